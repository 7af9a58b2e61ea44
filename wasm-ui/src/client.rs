//! HTTP access to the calculation backend.

use gloo::net::http::Request;
use js_sys::Reflect;
use labcalc::{ApiError, Calculation, ClientConfig, Outcome, decode_response};
use wasm_bindgen::JsValue;

/// Page global that overrides the API base, e.g. `window.LABCALC_API_BASE = "/api"`.
pub const API_BASE_GLOBAL: &str = "LABCALC_API_BASE";

fn read_global(key: &str) -> Option<String> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

/// Configuration for this page, honouring [`API_BASE_GLOBAL`] when set.
pub fn config_from_global() -> ClientConfig {
    match read_global(API_BASE_GLOBAL) {
        Some(base) => ClientConfig::with_api_base(base),
        None => ClientConfig::default(),
    }
}

async fn post<C: Calculation>(url: &str, request: &C) -> labcalc::Result<(u16, String)> {
    let response = Request::post(url)
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok((status, body))
}

/// POST `request` as JSON to its endpoint and decode the reply.
///
/// Failures are logged to the console before being returned.
pub async fn call<C: Calculation>(
    config: &ClientConfig,
    request: &C,
) -> labcalc::Result<Outcome<C::Output>> {
    let endpoint = C::ENDPOINT;
    let result = post(&config.endpoint_url(endpoint), request)
        .await
        .and_then(|(status, body)| decode_response::<C::Output>(status, &body));
    match &result {
        Err(e) if e.is_transport() => log::error!("API call to {} failed: {}", endpoint.path(), e),
        Err(e) => log::warn!("API call to {} rejected: {}", endpoint.path(), e),
        Ok(_) => {}
    }
    result
}
