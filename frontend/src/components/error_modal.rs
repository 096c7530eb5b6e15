//! Blocking dialog shown when an upload fails.
//!
//! The cause is never shown; the dialog lists the usual suspects instead.

use leptos::*;

/// Plausible reasons an upload is rejected.
pub const FAILURE_REASONS: &[&str] = &[
    "The audio file is shorter than the Zoom recording.",
    "The audio file is for a different meeting than the video file.",
    "Our server is currently overloaded and the request timed out (unfortunately, a lot of processing power is required).",
];

#[component]
pub fn UploadErrorModal(
    /// Whether the dialog is visible
    #[prop(into)]
    open: Signal<bool>,
    /// Called when the user dismisses the dialog
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get() fallback=|| view! { }>
            <div class="modal-backdrop" on:click=move |_| on_close.call(())>
                <div
                    class="modal upload-modal"
                    role="alertdialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button class="modal-close" aria-label="Close" on:click=move |_| on_close.call(())>
                        "×"
                    </button>
                    <div class="upload-error-image">"⚠️"</div>
                    <h1 class="upload-error-title">"UH-OH!"</h1>
                    <p class="upload-error-message">
                        "There was an error uploading your files! This could be because of one of the following reasons:"
                    </p>
                    <ul class="upload-error-list">
                        {FAILURE_REASONS
                            .iter()
                            .map(|reason| view! { <li class="upload-error-list-item">{*reason}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </Show>
    }
}
