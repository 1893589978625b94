use portfolio_core::{
    CatalogueResponse, FetchError, LoadOutcome, Notice, SelectOutcome, Session, SessionConfig,
    TickOutcome,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// One visible line of the menu column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Category(usize),
    Item { entry: usize, item: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch should be started by the event loop.
    Requested,
    Loading,
    Ready,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub session: Session,
    pub cursor: usize,
    pub load_state: LoadState,
    pub notices: VecDeque<Notice>,
    pub status_message: String,
    pub source_label: String,
    next_tick: Option<Instant>,
}

impl App {
    pub fn new(config: SessionConfig, source_label: impl Into<String>) -> Self {
        Self {
            running: true,
            show_help: false,
            session: Session::new(config),
            cursor: 0,
            load_state: LoadState::Requested,
            notices: VecDeque::new(),
            status_message: String::new(),
            source_label: source_label.into(),
            next_tick: None,
        }
    }

    pub fn menu_rows(&self) -> Vec<MenuRow> {
        let mut rows = Vec::new();
        for (entry_index, entry) in self.session.menu().entries().iter().enumerate() {
            rows.push(MenuRow::Category(entry_index));
            if entry.expanded {
                rows.extend((0..entry.items.len()).map(|item| MenuRow::Item {
                    entry: entry_index,
                    item,
                }));
            }
        }
        rows
    }

    pub fn selected_row(&self) -> Option<MenuRow> {
        self.menu_rows().get(self.cursor).copied()
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let rows = self.menu_rows().len();
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    /// Enter on a category toggles it; on a project it selects it.
    pub fn activate_selected(&mut self) {
        match self.selected_row() {
            Some(MenuRow::Category(index)) => {
                self.session.toggle_category(index);
                self.clamp_cursor();
            }
            Some(MenuRow::Item { entry, item }) => {
                let label = self
                    .session
                    .menu()
                    .entries()
                    .get(entry)
                    .and_then(|e| e.items.get(item))
                    .map(|i| i.label.clone());
                if let Some(label) = label {
                    self.select_project(&label);
                }
            }
            None => {}
        }
    }

    pub fn select_project(&mut self, name: &str) -> SelectOutcome {
        let outcome = self.session.select_project(name);
        if outcome == SelectOutcome::Started {
            self.next_tick = None;
            self.status_message = format!("Loading {name}...");
        }
        self.collect_notices();
        outcome
    }

    pub fn request_reload(&mut self) {
        if self.load_state != LoadState::Loading {
            self.load_state = LoadState::Requested;
        }
    }

    pub fn apply_load(&mut self, result: Result<CatalogueResponse, FetchError>) {
        let outcome = self.session.load(result);
        if let LoadOutcome::Loaded { projects, tags } = outcome {
            self.status_message = format!("{projects} projects in {tags} tags");
        }
        self.load_state = LoadState::Ready;
        self.clamp_cursor();
        self.collect_notices();
    }

    /// Runs at most one transition tick once its interval has elapsed.
    pub fn update(&mut self, now: Instant) {
        let Some(interval) = self.session.tick_interval() else {
            self.next_tick = None;
            return;
        };
        let due = *self.next_tick.get_or_insert(now + interval);
        if now < due {
            return;
        }

        if self.session.tick() == Some(TickOutcome::Completed) {
            self.status_message = format!("Showing {}", self.session.view().title);
        }
        self.next_tick = self.session.tick_interval().map(|interval| now + interval);
    }

    /// Poll timeout that never sleeps past the next transition tick.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.next_tick
            .map_or(max, |due| due.saturating_duration_since(now).min(max))
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    fn collect_notices(&mut self) {
        self.notices.extend(self.session.take_notices());
    }

    fn clamp_cursor(&mut self) {
        let rows = self.menu_rows().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOGUE: &str = r#"{"projects":[
        {"name":"A","tags":["x"],"header":"<h1>H1</h1>","body":"B1"},
        {"name":"B","tags":["x","y"],"header":"H2","body":"B2"}
    ]}"#;

    fn loaded_app() -> App {
        let mut app = App::new(SessionConfig::default(), "test");
        app.apply_load(Ok(CatalogueResponse::ok(CATALOGUE)));
        app
    }

    #[test]
    fn rows_expand_with_their_category() {
        let mut app = loaded_app();
        assert_eq!(
            app.menu_rows(),
            vec![MenuRow::Category(0), MenuRow::Category(1)]
        );

        app.activate_selected();

        assert_eq!(
            app.menu_rows(),
            vec![
                MenuRow::Category(0),
                MenuRow::Item { entry: 0, item: 0 },
                MenuRow::Item { entry: 0, item: 1 },
                MenuRow::Category(1),
            ]
        );
    }

    #[test]
    fn enter_on_item_starts_transition() {
        let mut app = loaded_app();
        app.activate_selected();
        app.move_cursor_down();
        app.move_cursor_down();

        app.activate_selected();

        assert!(app.session.is_transitioning());
        assert_eq!(app.session.view().title, "B");
    }

    #[test]
    fn ticks_wait_for_their_interval() {
        let mut app = loaded_app();
        app.select_project("A");
        let start = Instant::now();

        app.update(start);
        assert_eq!(app.session.transition().map(|t| t.ticks()), Some(0));
        app.update(start + Duration::from_millis(39));
        assert_eq!(app.session.transition().map(|t| t.ticks()), Some(0));
        app.update(start + Duration::from_millis(40));
        assert_eq!(app.session.transition().map(|t| t.ticks()), Some(1));
        assert_eq!(
            app.poll_timeout(start + Duration::from_millis(40), Duration::from_millis(50)),
            Duration::from_millis(40)
        );
    }

    #[test]
    fn transition_completes_under_simulated_clock() {
        let mut app = loaded_app();
        app.select_project("A");
        let mut now = Instant::now();

        for _ in 0..200 {
            now += Duration::from_millis(40);
            app.update(now);
            if !app.session.is_transitioning() {
                break;
            }
        }

        assert!(!app.session.is_transitioning());
        assert_eq!(app.session.view().header().content, "<h1>H1</h1>");
        assert!(app.session.view().overview_visible);
        assert_eq!(app.status_message, "Showing A");
    }

    #[test]
    fn failures_surface_as_notices() {
        let mut app = App::new(SessionConfig::default(), "test");
        app.apply_load(Err(FetchError::Request("offline".to_string())));

        assert_eq!(app.current_notice(), Some(&Notice::RequestFailed));
        assert_eq!(app.load_state, LoadState::Ready);
        app.dismiss_notice();
        assert!(app.current_notice().is_none());
    }

    #[test]
    fn reload_is_not_requested_twice_while_loading() {
        let mut app = loaded_app();
        app.load_state = LoadState::Loading;

        app.request_reload();

        assert_eq!(app.load_state, LoadState::Loading);
    }
}
