// Export our modules for use in the front-ends and tests
pub mod catalogue;
pub mod loader;
pub mod markup;
pub mod menu;
pub mod session;
pub mod tag_index;
pub mod transition;

pub use catalogue::{Catalogue, CatalogueError, Project};
pub use loader::{CatalogueResponse, FetchError, LoadOutcome, DEFAULT_CATALOGUE_PATH};
pub use menu::{ItemRef, MenuBuildMode, MenuEntry, MenuModel, SubItem};
pub use session::{
    GalleryView, IgnoreReason, Notice, SelectOutcome, SelectionState, Session, SessionConfig,
    DEFAULT_WIDTH_BUDGET,
};
pub use tag_index::{index_tags, TagGroup};
pub use transition::{
    DeviceProfile, Pane, Phase, RevealStyle, TickOutcome, TransitionConfig, TransitionEngine,
};
