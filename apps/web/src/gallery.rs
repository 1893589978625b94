use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use portfolio_core::markup::{INDEX_ATTRIBUTE, MENU_ITEM_CLASS, SUB_ITEM_CLASS};
use portfolio_core::{
    CatalogueResponse, FetchError, LoadOutcome, SelectOutcome, Session, SessionConfig,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Element, Event};

use crate::dom::DomSurface;
use crate::menu_click::{dispatcher, MenuAction, MenuTarget};

#[derive(Clone, Copy, PartialEq, Eq)]
struct ActiveInterval {
    id: i32,
    period: Duration,
}

/// Owns the session and keeps the page and the tick timer in step with it.
pub struct Gallery {
    session: RefCell<Session>,
    surface: DomSurface,
    ticker: RefCell<Option<ActiveInterval>>,
    tick_callback: OnceCell<Closure<dyn FnMut()>>,
}

impl Gallery {
    pub fn new(config: SessionConfig, surface: DomSurface) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<Self>| {
            let gallery = Self {
                session: RefCell::new(Session::new(config)),
                surface,
                ticker: RefCell::new(None),
                tick_callback: OnceCell::new(),
            };
            let weak = weak.clone();
            let _ = gallery.tick_callback.set(Closure::new(move || {
                if let Some(gallery) = weak.upgrade() {
                    gallery.on_tick();
                }
            }));
            gallery
        })
    }

    pub fn load(&self, response: Result<CatalogueResponse, FetchError>) {
        let outcome = self.session.borrow_mut().load(response);
        if let LoadOutcome::Loaded { projects, tags } = outcome {
            console::log_1(&format!("catalogue loaded: {projects} projects, {tags} tags").into());
        }
        self.refresh();
    }

    fn on_tick(&self) {
        let outcome = self.session.borrow_mut().tick();
        if outcome.is_some() {
            self.refresh();
        } else {
            self.rearm();
        }
    }

    fn refresh(&self) {
        let notices = {
            let mut session = self.session.borrow_mut();
            let notices = session.take_notices();
            if let Err(error) = self.surface.sync(&session) {
                console::error_1(&error);
            }
            notices
        };
        self.rearm();

        let Some(window) = web_sys::window() else {
            return;
        };
        for notice in notices {
            console::warn_1(&notice.to_string().into());
            let _ = window.alert_with_message(&notice.to_string());
        }
    }

    fn rearm(&self) {
        let wanted = self.session.borrow().tick_interval();
        let mut ticker = self.ticker.borrow_mut();
        if ticker.map(|active| active.period) == wanted {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(active) = ticker.take() {
            window.clear_interval_with_handle(active.id);
        }
        let (Some(period), Some(callback)) = (wanted, self.tick_callback.get()) else {
            return;
        };
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis,
        ) {
            Ok(id) => *ticker = Some(ActiveInterval { id, period }),
            Err(error) => console::error_1(&error),
        }
    }
}

impl MenuTarget for Gallery {
    fn select(&self, name: &str) {
        let outcome = self.session.borrow_mut().select_project(name);
        if let SelectOutcome::Ignored(reason) = outcome {
            console::debug_1(&format!("selection of {name:?} ignored: {reason:?}").into());
        }
        self.refresh();
    }

    fn toggle(&self, index: usize) {
        if self.session.borrow_mut().toggle_category(index) {
            self.refresh();
        }
    }
}

/// One click handler on the tag container serves every menu element,
/// including the ones rendered after a reload. The listener is never
/// removed, so the gallery it holds stays alive for the page's lifetime.
pub fn attach_menu_listener(gallery: &Rc<Gallery>) -> Result<(), JsValue> {
    let mut dispatch = dispatcher(Rc::clone(gallery));
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        let sub_item_label = target
            .closest(&format!(".{SUB_ITEM_CLASS}"))
            .ok()
            .flatten()
            .and_then(|item| item.text_content());
        let entry_index = target
            .closest(&format!(".{MENU_ITEM_CLASS}"))
            .ok()
            .flatten()
            .and_then(|entry| entry.get_attribute(INDEX_ATTRIBUTE));

        if let Some(action) = MenuAction::resolve(sub_item_label, entry_index.as_deref()) {
            dispatch(action);
        }
    });

    gallery
        .surface
        .tag_container()
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}
