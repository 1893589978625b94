mod device;
mod dom;
mod fetch;
mod gallery;
mod menu_click;

use portfolio_core::{SessionConfig, DEFAULT_CATALOGUE_PATH};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

use crate::dom::DomSurface;
use crate::gallery::Gallery;

fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let profile = device::detect();
    console::log_1(&format!("portfolio slideshow starting ({})", profile.as_str()).into());

    let surface = DomSurface::locate(&document)?;
    let gallery = Gallery::new(SessionConfig::for_profile(profile), surface);
    gallery::attach_menu_listener(&gallery)?;

    spawn_local(async move {
        let response = fetch::fetch_catalogue(DEFAULT_CATALOGUE_PATH).await;
        gallery.load(response);
    });

    Ok(())
}
