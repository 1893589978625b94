use serde::{Deserialize, Serialize};

use crate::tag_index::TagGroup;

/// How a render treats entries already in the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuBuildMode {
    /// Start from an empty menu on every render.
    #[default]
    Replace,
    /// Keep earlier entries; rendering twice duplicates every tag.
    Append,
}

impl MenuBuildMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "replace" => Some(Self::Replace),
            "append" => Some(Self::Append),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Append => "append",
        }
    }
}

/// Position of a sub item: entry index, then item index within the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemRef {
    pub entry: usize,
    pub item: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubItem {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub tag: String,
    pub count: usize,
    pub items: Vec<SubItem>,
    pub active: bool,
    pub expanded: bool,
}

impl MenuEntry {
    fn from_group(group: &TagGroup) -> Self {
        Self {
            tag: group.tag.clone(),
            count: group.count(),
            items: group
                .members
                .iter()
                .map(|label| SubItem {
                    label: label.clone(),
                    active: false,
                })
                .collect(),
            active: false,
            expanded: false,
        }
    }

    /// Top-level label, e.g. `rust(3)`.
    pub fn label(&self) -> String {
        format!("{}({})", self.tag, self.count)
    }
}

/// Menu view model consumed by the rendering layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuModel {
    entries: Vec<MenuEntry>,
    revision: u64,
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bumped on every mutation so hosts can skip redundant redraws.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub fn render(&mut self, groups: &[TagGroup], mode: MenuBuildMode) {
        if mode == MenuBuildMode::Replace {
            self.entries.clear();
        }
        self.entries.extend(groups.iter().map(MenuEntry::from_group));
        self.bump();
        tracing::debug!(
            entries = self.entries.len(),
            mode = mode.as_str(),
            "menu rendered"
        );
    }

    /// Expands or collapses one category. Returns false for an unknown index.
    pub fn toggle_category(&mut self, index: usize) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.active = !entry.active;
        entry.expanded = !entry.expanded;
        self.bump();
        true
    }

    /// Activates every sub item labelled `label`, across all categories.
    pub fn highlight(&mut self, label: &str) -> Vec<ItemRef> {
        let mut found = Vec::new();
        for (entry_index, entry) in self.entries.iter_mut().enumerate() {
            for (item_index, item) in entry.items.iter_mut().enumerate() {
                if item.label == label {
                    item.active = true;
                    found.push(ItemRef {
                        entry: entry_index,
                        item: item_index,
                    });
                }
            }
        }
        self.bump();
        found
    }

    pub fn clear_highlights(&mut self, items: &[ItemRef]) {
        for item_ref in items {
            if let Some(item) = self
                .entries
                .get_mut(item_ref.entry)
                .and_then(|entry| entry.items.get_mut(item_ref.item))
            {
                item.active = false;
            }
        }
        self.bump();
    }

    pub fn item(&self, item_ref: ItemRef) -> Option<&SubItem> {
        self.entries
            .get(item_ref.entry)
            .and_then(|entry| entry.items.get(item_ref.item))
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
