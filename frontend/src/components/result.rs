//! Result route.
//!
//! Receives the upload payload through history state and shows it as-is.
//! Visiting the route directly (or after a reload) has no state to show.

use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_location, A};

use crate::types::ResultPayload;

fn decode_state(state: Option<wasm_bindgen::JsValue>) -> Option<ResultPayload> {
    let value = state?;
    match serde_wasm_bindgen::from_value(value) {
        Ok(payload) => Some(payload),
        Err(e) => {
            log::warn!("Ignoring unreadable result state: {}", e);
            None
        }
    }
}

/// Pretty-printed JSON for display.
pub fn render_payload(payload: &ResultPayload) -> String {
    serde_json::to_string_pretty(&payload.0).unwrap_or_else(|_| payload.0.to_string())
}

#[component]
pub fn ResultView() -> impl IntoView {
    let location = use_location();
    let payload = move || location.state.with(|state| decode_state(state.0.clone()));

    view! {
        <Title text="Patch - Result"/>
        <div class="result">
            {move || match payload() {
                Some(payload) => view! {
                    <pre class="result-payload">{render_payload(&payload)}</pre>
                }.into_view(),
                None => view! {
                    <div class="result-empty">
                        <p>"No result to show."</p>
                        <A href="/" class="btn btn-primary">"Upload files"</A>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_payload_pretty_prints() {
        let payload = ResultPayload(json!({ "transcript": "..." }));
        let rendered = render_payload(&payload);
        assert!(rendered.contains("\"transcript\": \"...\""));
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn test_missing_state() {
        assert_eq!(decode_state(None), None);
    }
}
