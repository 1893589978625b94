use portfolio_core::{CatalogueResponse, FetchError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Issues the single same-origin GET for the catalogue.
pub async fn fetch_catalogue(path: &str) -> Result<CatalogueResponse, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Request("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(path, &opts).map_err(js_error)?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response = response_value.dyn_into::<Response>().map_err(js_error)?;
    let status = response.status();

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    Ok(CatalogueResponse { status, body })
}

fn js_error(value: JsValue) -> FetchError {
    FetchError::Request(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
