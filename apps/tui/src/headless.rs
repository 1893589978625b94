use color_eyre::Result;
use portfolio_core::{
    CatalogueResponse, FetchError, SelectOutcome, Session, SessionConfig, TickOutcome,
};
use serde::Serialize;

use crate::fetch::CatalogueLocation;
use crate::ui::text::markup_to_text;

#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub menu: Vec<HeadlessEntry>,
    pub selection: Option<HeadlessSelection>,
    pub notices: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HeadlessEntry {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HeadlessSelection {
    pub name: String,
    pub started: bool,
    pub ticks: u32,
    /// Wall-clock time the transition would take at the configured tick rate.
    pub simulated_ms: u128,
    pub title: String,
    pub header: String,
    pub body: String,
    pub overview_visible: bool,
}

/// Print the tag menu, and optionally a completed selection, without a UI
pub async fn run_headless(
    config: SessionConfig,
    location: &CatalogueLocation,
    json: bool,
    select: Option<&str>,
) -> Result<()> {
    let report = build_report(config, location.fetch().await, select);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

pub fn build_report(
    config: SessionConfig,
    fetched: Result<CatalogueResponse, FetchError>,
    select: Option<&str>,
) -> HeadlessReport {
    let mut session = Session::new(config);
    session.load(fetched);

    let menu = session
        .menu()
        .entries()
        .iter()
        .map(|entry| HeadlessEntry {
            label: entry.label(),
            items: entry.items.iter().map(|item| item.label.clone()).collect(),
        })
        .collect();

    let selection = select.map(|name| run_selection(&mut session, name));

    HeadlessReport {
        menu,
        selection,
        notices: session
            .take_notices()
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}

/// Drives the transition by hand, tick after tick, until it settles.
fn run_selection(session: &mut Session, name: &str) -> HeadlessSelection {
    let started = session.select_project(name) == SelectOutcome::Started;
    let mut ticks = 0;
    let mut simulated_ms = 0;

    while let Some(interval) = session.tick_interval() {
        simulated_ms += interval.as_millis();
        ticks += 1;
        if session.tick() == Some(TickOutcome::Completed) {
            break;
        }
    }

    let view = session.view();
    HeadlessSelection {
        name: name.to_string(),
        started,
        ticks,
        simulated_ms,
        title: view.title.clone(),
        header: view.header().content.clone(),
        body: view.body().content.clone(),
        overview_visible: view.overview_visible,
    }
}

fn print_report(report: &HeadlessReport) {
    println!("\nPortfolio Menu");
    println!("==============");
    for entry in &report.menu {
        println!("{}", entry.label);
        for item in &entry.items {
            println!("  - {item}");
        }
    }

    if let Some(selection) = &report.selection {
        println!("\nSelection: {}", selection.name);
        if selection.started {
            println!(
                "Transition: {} ticks (~{} ms)",
                selection.ticks, selection.simulated_ms
            );
            println!("\n{}", markup_to_text(&selection.header));
            if selection.overview_visible {
                println!("\n<- Back to overview");
            }
            println!("\n{}", markup_to_text(&selection.body));
        }
    }

    for notice in &report.notices {
        eprintln!("Notice: {notice}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::DeviceProfile;

    const CATALOGUE: &str = r#"{"projects":[
        {"name":"A","tags":["x"],"header":"H1","body":"B1"},
        {"name":"B","tags":["x","y"],"header":"H2","body":"B2"}
    ]}"#;

    #[test]
    fn report_lists_menu_entries() {
        let report = build_report(
            SessionConfig::default(),
            Ok(CatalogueResponse::ok(CATALOGUE)),
            None,
        );

        let labels = report.menu.iter().map(|e| e.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["x(2)", "y(1)"]);
        assert_eq!(report.menu[0].items, vec!["A", "B"]);
        assert!(report.selection.is_none());
        assert!(report.notices.is_empty());
    }

    #[test]
    fn selection_runs_to_completion() {
        let report = build_report(
            SessionConfig::for_profile(DeviceProfile::Desktop),
            Ok(CatalogueResponse::ok(CATALOGUE)),
            Some("B"),
        );

        let selection = report.selection.as_ref();
        assert!(selection.is_some_and(|s| s.started));
        assert!(selection.is_some_and(|s| s.title == "B"));
        assert!(selection.is_some_and(|s| s.header == "H2" && s.body == "B2"));
        assert!(selection.is_some_and(|s| s.overview_visible));
        // 23 fade ticks at 40 ms, then 11 roll-out ticks at 10 ms.
        assert!(selection.is_some_and(|s| s.ticks == 34 && s.simulated_ms == 1030));
    }

    #[test]
    fn missing_selection_and_failed_fetch_become_notices() {
        let report = build_report(
            SessionConfig::default(),
            Err(FetchError::Request("down".to_string())),
            Some("A"),
        );

        assert_eq!(
            report.notices,
            vec!["Portfolio request failed.", "Portfolio item does not exist."]
        );
        assert!(report.selection.is_some_and(|s| !s.started && s.ticks == 0));
    }

    #[test]
    fn json_output_is_serializable() -> Result<(), serde_json::Error> {
        let report = build_report(
            SessionConfig::default(),
            Ok(CatalogueResponse::ok(CATALOGUE)),
            Some("A"),
        );

        let json = serde_json::to_string(&report)?;
        assert!(json.contains(r#""label":"x(2)""#));
        assert!(json.contains(r#""overview_visible":true"#));
        Ok(())
    }
}
