//! Element identifiers of the host page and the HTML rendering of the menu.
//!
//! The web front-end locates every element through these constants, so they
//! must match the page markup exactly.

use std::fmt::Write as _;

use crate::menu::{MenuEntry, MenuModel};

pub const TAG_CONTAINER_ID: &str = "js-gallery-tag-container";
pub const MENU_ITEM_CLASS: &str = "js-gallery-menu-item";
pub const MENU_CONTAINER_CLASS: &str = "js-gallery-menu-item-container";
pub const SUB_ITEM_CLASS: &str = "js-gallery-menu-sub-item";
pub const HEADER_PANE_ID: &str = "js-gallery-sub-container-1";
pub const BODY_PANE_ID: &str = "js-gallery-sub-container-2";
pub const TITLE_ID: &str = "item_title";
pub const OVERVIEW_ID: &str = "back-to-portfolio";
pub const ACTIVE_CLASS: &str = "active";
/// Attribute carrying a top-level entry's index, read by the click delegate.
pub const INDEX_ATTRIBUTE: &str = "data-index";

/// Pane identifiers in pane order (header, body).
pub const PANE_IDS: [&str; 2] = [HEADER_PANE_ID, BODY_PANE_ID];

pub fn render_menu(menu: &MenuModel) -> String {
    let mut html = String::new();
    for (index, entry) in menu.entries().iter().enumerate() {
        render_entry(&mut html, index, entry);
    }
    html
}

fn render_entry(html: &mut String, index: usize, entry: &MenuEntry) {
    let label = format!(
        "{}({})",
        htmlize::escape_text(entry.tag.as_str()),
        entry.count
    );
    let _ = write!(
        html,
        "<span class='{}' {INDEX_ATTRIBUTE}='{index}'>{label}</span>",
        class_list(MENU_ITEM_CLASS, entry.active),
    );
    let display = if entry.expanded { "block" } else { "none" };
    let _ = write!(
        html,
        "<div class='{MENU_CONTAINER_CLASS}' style='display:{display}'>"
    );
    for item in &entry.items {
        let _ = write!(
            html,
            "<span class='{}'>{}</span>",
            class_list(SUB_ITEM_CLASS, item.active),
            htmlize::escape_text(item.label.as_str()),
        );
    }
    html.push_str("</div>");
}

fn class_list(base: &str, active: bool) -> String {
    if active {
        format!("{base} {ACTIVE_CLASS}")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuBuildMode;
    use crate::tag_index::TagGroup;

    fn menu() -> MenuModel {
        let mut menu = MenuModel::new();
        menu.render(
            &[TagGroup {
                tag: "x".to_string(),
                members: vec!["A".to_string(), "B".to_string()],
            }],
            MenuBuildMode::Replace,
        );
        menu
    }

    #[test]
    fn collapsed_entry_markup() {
        assert_eq!(
            render_menu(&menu()),
            "<span class='js-gallery-menu-item' data-index='0'>x(2)</span>\
             <div class='js-gallery-menu-item-container' style='display:none'>\
             <span class='js-gallery-menu-sub-item'>A</span>\
             <span class='js-gallery-menu-sub-item'>B</span></div>"
        );
    }

    #[test]
    fn active_and_expanded_state_is_reflected() {
        let mut menu = menu();
        menu.toggle_category(0);
        menu.highlight("B");

        let html = render_menu(&menu);

        assert!(html.contains("class='js-gallery-menu-item active'"));
        assert!(html.contains("style='display:block'"));
        assert!(html.contains("<span class='js-gallery-menu-sub-item active'>B</span>"));
        assert!(html.contains("<span class='js-gallery-menu-sub-item'>A</span>"));
    }

    #[test]
    fn labels_are_escaped() {
        let mut menu = MenuModel::new();
        menu.render(
            &[TagGroup {
                tag: "<b>".to_string(),
                members: vec!["R&D".to_string()],
            }],
            MenuBuildMode::Replace,
        );

        let html = render_menu(&menu);

        assert!(html.contains("&lt;b&gt;(1)"));
        assert!(html.contains(">R&amp;D<"));
    }

    #[test]
    fn empty_menu_renders_nothing() {
        assert!(render_menu(&MenuModel::new()).is_empty());
    }
}
