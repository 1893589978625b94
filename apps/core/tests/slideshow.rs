use portfolio_core::markup::render_menu;
use portfolio_core::{
    CatalogueResponse, DeviceProfile, IgnoreReason, Notice, SelectOutcome, Session, SessionConfig,
    TickOutcome,
};

const CATALOGUE: &str = r#"{"projects":[
    {"name":"A","tags":["x"],"header":"H1","body":"B1"},
    {"name":"B","tags":["x","y"],"header":"H2","body":"B2"}
]}"#;

fn loaded(profile: DeviceProfile) -> Session {
    let mut session = Session::new(SessionConfig::for_profile(profile));
    session.load(Ok(CatalogueResponse::ok(CATALOGUE)));
    session
}

/// Ticks until the transition completes, returning how many ticks it took.
fn drive(session: &mut Session) -> usize {
    let mut ticks = 0;
    while let Some(outcome) = session.tick() {
        ticks += 1;
        if outcome == TickOutcome::Completed {
            break;
        }
        assert!(ticks < 1_000, "transition did not settle");
    }
    ticks
}

#[test]
fn catalogue_yields_tag_groups_and_menu_counts() {
    let session = loaded(DeviceProfile::Desktop);

    let groups = session
        .tag_groups()
        .iter()
        .map(|g| (g.tag.as_str(), g.members.clone()))
        .collect::<Vec<_>>();
    assert_eq!(
        groups,
        vec![
            ("x", vec!["A".to_string(), "B".to_string()]),
            ("y", vec!["B".to_string()]),
        ]
    );

    let labels = session
        .menu()
        .entries()
        .iter()
        .map(portfolio_core::MenuEntry::label)
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["x(2)", "y(1)"]);

    let html = render_menu(session.menu());
    assert!(html.contains(">x(2)</span>"));
    assert!(html.contains(">y(1)</span>"));
}

#[test]
fn selecting_b_displays_its_content_and_reveals_overview_on_completion() {
    let mut session = loaded(DeviceProfile::Desktop);

    assert_eq!(session.select_project("B"), SelectOutcome::Started);
    assert_eq!(session.view().title, "B");

    let mut revealed_at = None;
    let mut ticks = 0;
    while let Some(outcome) = session.tick() {
        ticks += 1;
        if session.view().overview_visible && revealed_at.is_none() {
            revealed_at = Some((ticks, outcome));
        }
        if outcome == TickOutcome::Completed {
            break;
        }
    }

    assert_eq!(revealed_at, Some((ticks, TickOutcome::Completed)));
    assert_eq!(session.view().header().content, "H2");
    assert_eq!(session.view().body().content, "B2");
    assert!(session.view().panes.iter().all(|p| p.visible));
}

#[test]
fn reselecting_mid_flight_leaves_the_running_animation_alone() {
    let mut session = loaded(DeviceProfile::Desktop);
    session.select_project("B");
    for _ in 0..5 {
        session.tick();
    }
    let before = session.transition().map(|t| (t.phase(), t.ticks()));

    assert_eq!(
        session.select_project("B"),
        SelectOutcome::Ignored(IgnoreReason::Transitioning)
    );
    assert_eq!(
        session.select_project("A"),
        SelectOutcome::Ignored(IgnoreReason::Transitioning)
    );
    assert_eq!(session.transition().map(|t| (t.phase(), t.ticks())), before);

    drive(&mut session);
    assert_eq!(
        session.select_project("B"),
        SelectOutcome::Ignored(IgnoreReason::AlreadyActive)
    );
    assert!(session.transition().is_none());
}

#[test]
fn unknown_project_produces_exactly_one_notice() {
    let mut session = loaded(DeviceProfile::Desktop);

    assert_eq!(session.select_project("Ghost"), SelectOutcome::NotFound);

    assert_eq!(session.selection().active_project(), None);
    assert_eq!(
        session.take_notices(),
        vec![Notice::ProjectMissing("Ghost".to_string())]
    );
    assert!(session.transition().is_none());
}

#[test]
fn tagless_project_is_unreachable_from_menu_but_still_selectable_by_name() {
    let raw = r#"{"projects":[
        {"name":"Hidden","tags":[],"header":"h","body":"b"},
        {"name":"Shown","tags":["t"],"header":"h","body":"b"}
    ]}"#;
    let mut session = Session::new(SessionConfig::default());
    session.load(Ok(CatalogueResponse::ok(raw)));

    let labels = session
        .menu()
        .entries()
        .iter()
        .flat_map(|e| e.items.iter().map(|i| i.label.clone()))
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["Shown"]);

    assert_eq!(session.select_project("Hidden"), SelectOutcome::Started);
}

#[test]
fn mobile_profile_reveals_without_touching_width() {
    let mut session = loaded(DeviceProfile::Mobile);
    session.select_project("A");

    drive(&mut session);

    assert!(session.view().panes.iter().all(|p| p.width.is_none()));
    assert_eq!(session.view().body().content, "B1");
    assert!(session.view().overview_visible);
}

#[test]
fn successive_selections_swap_content() {
    let mut session = loaded(DeviceProfile::Firefox);

    session.select_project("A");
    drive(&mut session);
    session.select_project("B");
    drive(&mut session);

    assert_eq!(session.view().title, "B");
    assert_eq!(session.view().header().content, "H2");
    assert_eq!(session.selection().active_items().len(), 2);
}
