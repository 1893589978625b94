use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::catalogue::Catalogue;
use crate::menu::{ItemRef, MenuBuildMode, MenuModel};
use crate::tag_index::TagGroup;
use crate::transition::{DeviceProfile, Pane, TickOutcome, TransitionConfig, TransitionEngine};

/// Width each pane rolls out to, in pixels.
pub const DEFAULT_WIDTH_BUDGET: f64 = 1060.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub transition: TransitionConfig,
    pub menu_mode: MenuBuildMode,
    pub width_budgets: [f64; 2],
}

impl SessionConfig {
    pub const fn for_profile(profile: DeviceProfile) -> Self {
        Self {
            transition: TransitionConfig::for_profile(profile),
            menu_mode: MenuBuildMode::Replace,
            width_budgets: [DEFAULT_WIDTH_BUDGET, DEFAULT_WIDTH_BUDGET],
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::for_profile(DeviceProfile::default())
    }
}

/// A blocking, user-facing message for the host to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    RequestFailed,
    CatalogueInvalid(String),
    ProjectMissing(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed => write!(f, "Portfolio request failed."),
            Self::CatalogueInvalid(cause) => {
                write!(f, "Json parse or Tag Menu build error: {cause}")
            }
            Self::ProjectMissing(_) => write!(f, "Portfolio item does not exist."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Transitioning,
    AlreadyActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Started,
    NotFound,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active_project: Option<String>,
    active_items: Vec<ItemRef>,
    transitioning: bool,
}

impl SelectionState {
    pub fn active_project(&self) -> Option<&str> {
        self.active_project.as_deref()
    }

    pub fn active_items(&self) -> &[ItemRef] {
        &self.active_items
    }

    pub const fn is_transitioning(&self) -> bool {
        self.transitioning
    }
}

/// Everything the detail side of the page shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GalleryView {
    pub title: String,
    /// Header pane, then body pane.
    pub panes: [Pane; 2],
    pub overview_visible: bool,
}

impl GalleryView {
    pub const fn header(&self) -> &Pane {
        &self.panes[0]
    }

    pub const fn body(&self) -> &Pane {
        &self.panes[1]
    }
}

/// Process-wide viewer state, owned by a single host event loop.
#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    pub(crate) catalogue: Catalogue,
    pub(crate) groups: Vec<TagGroup>,
    pub(crate) menu: MenuModel,
    selection: SelectionState,
    view: GalleryView,
    transition: Option<TransitionEngine>,
    notices: VecDeque<Notice>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub const fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn tag_groups(&self) -> &[TagGroup] {
        &self.groups
    }

    pub const fn menu(&self) -> &MenuModel {
        &self.menu
    }

    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub const fn view(&self) -> &GalleryView {
        &self.view
    }

    pub const fn transition(&self) -> Option<&TransitionEngine> {
        self.transition.as_ref()
    }

    pub const fn is_transitioning(&self) -> bool {
        self.selection.transitioning
    }

    pub fn select_project(&mut self, name: &str) -> SelectOutcome {
        if self.selection.transitioning {
            tracing::debug!(name, "selection ignored while transitioning");
            return SelectOutcome::Ignored(IgnoreReason::Transitioning);
        }
        if self.selection.active_project.as_deref() == Some(name) {
            return SelectOutcome::Ignored(IgnoreReason::AlreadyActive);
        }

        let Some(content) = self
            .catalogue
            .find(name)
            .map(|project| project.content().map(str::to_string))
        else {
            tracing::warn!(name, "selected project is not in the catalogue");
            self.notices
                .push_back(Notice::ProjectMissing(name.to_string()));
            return SelectOutcome::NotFound;
        };

        self.menu.clear_highlights(&self.selection.active_items);
        self.selection.active_items = self.menu.highlight(name);
        self.transition = Some(TransitionEngine::new(
            self.config.transition,
            content.into(),
            &self.config.width_budgets,
        ));
        self.selection.transitioning = true;
        self.selection.active_project = Some(name.to_string());
        self.view.title = name.to_string();
        tracing::info!(name, "transition started");

        SelectOutcome::Started
    }

    /// Always allowed, even mid-transition.
    pub fn toggle_category(&mut self, index: usize) -> bool {
        self.menu.toggle_category(index)
    }

    /// Advances the running transition by one tick; `None` when idle.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        let engine = self.transition.as_mut()?;
        let outcome = engine.tick(&mut self.view.panes);

        if outcome == TickOutcome::Completed {
            tracing::info!(ticks = engine.ticks(), "transition completed");
            self.transition = None;
            self.selection.transitioning = false;
            self.view.overview_visible = true;
        }

        Some(outcome)
    }

    /// How long the host should wait before the next [`Session::tick`].
    pub fn tick_interval(&self) -> Option<Duration> {
        self.transition.as_ref().map(TransitionEngine::tick_interval)
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub(crate) fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    /// Keeps every copy of the active project's label highlighted after the
    /// menu changes shape.
    pub(crate) fn rehighlight(&mut self) {
        if let Some(name) = self.selection.active_project.as_deref() {
            self.selection.active_items = self.menu.highlight(name);
        } else {
            self.selection.active_items.clear();
        }
    }
}
