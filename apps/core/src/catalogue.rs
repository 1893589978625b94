use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// A single portfolio entry as delivered by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub tags: Vec<String>,
    /// Markup shown in the header pane.
    pub header: String,
    /// Markup shown in the body pane.
    pub body: String,
}

impl Project {
    /// Pane content in pane order: header first, then body.
    pub fn content(&self) -> [&str; 2] {
        [self.header.as_str(), self.body.as_str()]
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

/// Ordered project list, replaced wholesale on every load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    projects: Vec<Project>,
}

impl Catalogue {
    pub const fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogueError> {
        let catalogue = serde_json::from_str::<Self>(raw)?;
        tracing::debug!(projects = catalogue.len(), "parsed catalogue");
        Ok(catalogue)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// First project with exactly this name, in catalogue order.
    pub fn find(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.name == name)
    }
}
