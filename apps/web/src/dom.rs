use std::cell::{Cell, RefCell};

use portfolio_core::markup::{
    self, BODY_PANE_ID, HEADER_PANE_ID, OVERVIEW_ID, TAG_CONTAINER_ID, TITLE_ID,
};
use portfolio_core::{Pane, Session};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Handles on the page elements the gallery writes to.
///
/// The surface remembers what it last wrote so a tick only touches the styles
/// that moved.
pub struct DomSurface {
    tag_container: Element,
    title: HtmlElement,
    panes: [HtmlElement; 2],
    overview: HtmlElement,
    menu_revision: Cell<Option<u64>>,
    pane_content: RefCell<[String; 2]>,
}

impl DomSurface {
    pub fn locate(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            tag_container: element(document, TAG_CONTAINER_ID)?,
            title: html_element(document, TITLE_ID)?,
            panes: [
                html_element(document, HEADER_PANE_ID)?,
                html_element(document, BODY_PANE_ID)?,
            ],
            overview: html_element(document, OVERVIEW_ID)?,
            menu_revision: Cell::new(None),
            pane_content: RefCell::new([String::new(), String::new()]),
        })
    }

    pub const fn tag_container(&self) -> &Element {
        &self.tag_container
    }

    pub fn sync(&self, session: &Session) -> Result<(), JsValue> {
        let revision = session.menu().revision();
        if self.menu_revision.get() != Some(revision) {
            self.tag_container
                .set_inner_html(&markup::render_menu(session.menu()));
            self.menu_revision.set(Some(revision));
        }

        // Nothing below has been touched until a project is chosen.
        if session.selection().active_project().is_none() {
            return Ok(());
        }

        let view = session.view();
        self.title.set_inner_text(&view.title);

        let mut written = self.pane_content.borrow_mut();
        let targets = self.panes.iter().zip(&view.panes);
        for ((element, pane), last) in targets.zip(written.iter_mut()) {
            if *last != pane.content {
                element.set_inner_html(&pane.content);
                last.clone_from(&pane.content);
            }
            style_pane(element, pane)?;
        }

        if view.overview_visible {
            self.overview.style().set_property("display", "block")?;
        }
        Ok(())
    }
}

fn style_pane(element: &HtmlElement, pane: &Pane) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("opacity", &format!("{:.3}", pane.opacity))?;
    match pane.width {
        Some(width) => style.set_property("width", &format!("{width}px"))?,
        None => {
            style.remove_property("width")?;
        }
    }
    style.set_property("display", if pane.visible { "block" } else { "none" })
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    element(document, id)?.dyn_into::<HtmlElement>().map_err(JsValue::from)
}
