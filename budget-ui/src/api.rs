//! Browser transport: posts the report request through `window.fetch`.

use budget_core::{report_url, ReportError, ReportRequest, ReportResult, ReportTransport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Posts to the report endpoint relative to the page origin unless a base
/// URL is given.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    url: String,
}

impl FetchTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            url: report_url(base_url),
        }
    }
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new("")
    }
}

fn js_error(err: JsValue) -> ReportError {
    ReportError::Transport(format!("{err:?}"))
}

impl ReportTransport for FetchTransport {
    async fn fetch_report(&self, request: &ReportRequest) -> budget_core::Result<ReportResult> {
        let body = request.to_json()?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&body));

        let req = Request::new_with_str_and_init(&self.url, &opts).map_err(js_error)?;
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| ReportError::Transport("no global window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        if !resp.ok() {
            log::error!("[Budget] {} answered {}: {}", self.url, resp.status(), text);
            return Err(ReportError::Api {
                status: resp.status(),
                body: text,
            });
        }
        ReportResult::from_json(&text)
    }
}
