//! Patch - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for uploading a Zoom recording together with a
//! separately recorded audio track, so the backend can patch the audio.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (logo)                                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /        UploadSection (video slot, audio slot,        │
//! │  │            submit, loading, error dialog)                │
//! │  └── /result  ResultView (payload from history state)       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastStack (validation notices)                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend URL, allow-lists, messages
//! - [`types`] - Slots, file selections, errors
//! - [`state`] - Upload form state machine
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;

pub use types::{
    // Slots
    Slot,
    // Files
    SelectedFile, FileSelection,
    // API
    ResultPayload,
    // Errors
    SelectionError, SubmitError, UploadError,
};

pub use state::{Completion, SubmissionState, UploadForm};

pub use components::*;

pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and logger, then mount the app on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Patch - Starting Leptos App (backend: {})", backend_url());

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let toaster = Toaster::new();

    view! {
        <Title text="Patch"/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path="/" view=move || view! { <UploadSection toaster=toaster/> }/>
                    <Route path=RESULT_ROUTE view=ResultView/>
                </Routes>
            </main>
            <ToastStack toaster=toaster/>
        </Router>
    }
}
