use thiserror::Error;

use crate::catalogue::Catalogue;
use crate::session::{Notice, Session};
use crate::tag_index::index_tags;

/// Relative path the catalogue is requested from.
pub const DEFAULT_CATALOGUE_PATH: &str = "portfolio-request";

const STATUS_OK: u16 = 200;

/// Raw answer to the catalogue request, as delivered by a host's transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueResponse {
    pub status: u16,
    pub body: String,
}

impl CatalogueResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK,
            body: body.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { projects: usize, tags: usize },
    RequestFailed,
    Invalid,
}

impl Session {
    /// Applies the single catalogue request's result.
    ///
    /// On success the catalogue is replaced wholesale and the menu rebuilt with
    /// the configured build mode. Failures queue exactly one notice and leave
    /// the current catalogue in place.
    pub fn load(&mut self, response: Result<CatalogueResponse, FetchError>) -> LoadOutcome {
        let response = match response {
            Ok(response) if response.status == STATUS_OK => response,
            Ok(response) => {
                tracing::warn!(status = response.status, "catalogue request was not OK");
                self.push_notice(Notice::RequestFailed);
                return LoadOutcome::RequestFailed;
            }
            Err(error) => {
                tracing::warn!(%error, "catalogue request failed");
                self.push_notice(Notice::RequestFailed);
                return LoadOutcome::RequestFailed;
            }
        };

        let catalogue = match Catalogue::from_json(&response.body) {
            Ok(catalogue) => catalogue,
            Err(error) => {
                tracing::warn!(%error, "catalogue body rejected");
                self.push_notice(Notice::CatalogueInvalid(error.to_string()));
                return LoadOutcome::Invalid;
            }
        };

        self.catalogue = catalogue;
        self.groups = index_tags(&self.catalogue);
        let mode = self.config().menu_mode;
        self.menu.render(&self.groups, mode);
        self.rehighlight();

        tracing::info!(
            projects = self.catalogue.len(),
            tags = self.groups.len(),
            "catalogue loaded"
        );
        LoadOutcome::Loaded {
            projects: self.catalogue.len(),
            tags: self.groups.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuBuildMode;
    use crate::session::SessionConfig;

    const BODY: &str = r#"{"projects":[{"name":"A","tags":["x"],"header":"H1","body":"B1"}]}"#;

    #[test]
    fn successful_load_builds_menu() {
        let mut session = Session::new(SessionConfig::default());

        let outcome = session.load(Ok(CatalogueResponse::ok(BODY)));

        assert_eq!(outcome, LoadOutcome::Loaded { projects: 1, tags: 1 });
        assert_eq!(session.menu().entries()[0].label(), "x(1)");
        assert!(session.take_notices().is_empty());
    }

    #[test]
    fn transport_failure_reports_request_notice() {
        let mut session = Session::new(SessionConfig::default());

        let outcome = session.load(Err(FetchError::Request("offline".to_string())));

        assert_eq!(outcome, LoadOutcome::RequestFailed);
        assert_eq!(session.take_notices(), vec![Notice::RequestFailed]);
        assert!(session.menu().is_empty());
    }

    #[test]
    fn non_ok_status_is_a_request_failure() {
        let mut session = Session::new(SessionConfig::default());

        let outcome = session.load(Ok(CatalogueResponse {
            status: 404,
            body: BODY.to_string(),
        }));

        assert_eq!(outcome, LoadOutcome::RequestFailed);
        assert_eq!(session.take_notices().len(), 1);
    }

    #[test]
    fn parse_failure_inlines_cause_and_keeps_previous_catalogue() {
        let mut session = Session::new(SessionConfig::default());
        session.load(Ok(CatalogueResponse::ok(BODY)));

        let outcome = session.load(Ok(CatalogueResponse::ok("{ not json")));

        assert_eq!(outcome, LoadOutcome::Invalid);
        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0]
            .to_string()
            .starts_with("Json parse or Tag Menu build error: "));
        assert_eq!(session.catalogue().len(), 1);
    }

    #[test]
    fn reload_in_append_mode_duplicates_menu() {
        let config = SessionConfig {
            menu_mode: MenuBuildMode::Append,
            ..SessionConfig::default()
        };
        let mut session = Session::new(config);

        session.load(Ok(CatalogueResponse::ok(BODY)));
        session.load(Ok(CatalogueResponse::ok(BODY)));

        assert_eq!(session.menu().entries().len(), 2);
        assert_eq!(session.catalogue().len(), 1);
    }

    #[test]
    fn reload_keeps_active_project_highlighted() {
        let mut session = Session::new(SessionConfig::default());
        session.load(Ok(CatalogueResponse::ok(BODY)));
        session.select_project("A");

        session.load(Ok(CatalogueResponse::ok(BODY)));

        assert_eq!(session.selection().active_items().len(), 1);
        assert!(session.menu().entries()[0].items[0].active);
    }
}
