//! Video + audio upload page with drag & drop support.
//!
//! Both slots share one selection path: drops and the hidden file picker
//! end up in [`UploadForm::select_file`], and rejected selections become
//! toasts. The submit button only exists while [`UploadForm::can_submit`]
//! holds, so at most one upload is ever outstanding.

use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, State};
use serde::Serialize;
use web_sys::{File, FileList};

use crate::components::{Toaster, UploadErrorModal};
use crate::config::{upload_url, RESULT_ROUTE};
use crate::services::upload::{HttpTransport, UploadTransport};
use crate::state::{Completion, UploadForm};
use crate::types::{ResultPayload, Slot};

type Form = RwSignal<UploadForm<File>>;

fn files_from_list(list: Option<FileList>) -> Vec<File> {
    list.map(|list| collect_indexed(list.length(), |i| list.get(i)))
        .unwrap_or_default()
}

/// Gather `len` items from an index-based JS collection, skipping holes.
fn collect_indexed<T>(len: u32, get: impl Fn(u32) -> Option<T>) -> Vec<T> {
    (0..len).filter_map(get).collect()
}

/// Nesting depth of `dragenter`/`dragleave` over a drop zone.
///
/// Moving between the zone's children fires a leave for the old element
/// and an enter for the new one, so the zone only stops being active once
/// every enter has been matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct DragDepth(u32);

impl DragDepth {
    fn enter(&mut self) {
        self.0 += 1;
    }

    fn leave(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    fn reset(&mut self) {
        self.0 = 0;
    }

    fn is_active(&self) -> bool {
        self.0 > 0
    }
}

/// Run one selection attempt and surface any rejection.
fn apply_selection(form: Form, toaster: Toaster, slot: Slot, files: Vec<File>) {
    let Some(result) = form.try_update(|f| f.select_file(slot, files)) else {
        return;
    };

    match result {
        Ok(()) => {
            let name = form.with_untracked(|f| f.selection(slot).map(|s| s.name.clone()));
            log::info!("📎 {} file selected: {}", slot.label(), name.unwrap_or_default());
        }
        Err(e) => {
            log::warn!("Rejected {} selection: {}", slot.label(), e);
            if let Some(message) = e.toast_message() {
                toaster.push_error(message);
            }
        }
    }
}

/// Hand the payload to the result view through history state.
fn navigate_to_result(navigate: impl Fn(&str, NavigateOptions), payload: &ResultPayload) {
    let state = match payload.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(value) => State(Some(value)),
        Err(e) => {
            log::error!("Failed to encode result payload: {}", e);
            State(None)
        }
    };

    navigate(
        RESULT_ROUTE,
        NavigateOptions {
            state,
            ..Default::default()
        },
    );
}

#[component]
pub fn UploadSection(toaster: Toaster) -> impl IntoView {
    let form: Form = create_rw_signal(UploadForm::new());
    let navigate = use_navigate();

    let on_submit = move |ev: ev::MouseEvent| {
        ev.prevent_default();

        let url = upload_url();
        let request = match form.try_update(|f| f.begin_submit(&url)) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::warn!("Upload not started: {}", e);
                return;
            }
            None => return,
        };

        log::info!("📤 Uploading video and audio to {}", request.url);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = HttpTransport::new().send(request).await;
            if let Err(e) = &result {
                log::error!("❌ Upload failed: {}", e);
            }

            match form.try_update(|f| f.complete(result)) {
                Some(Completion::Navigate(payload)) => {
                    log::info!("✅ Upload successful, opening result");
                    navigate_to_result(navigate, &payload);
                }
                Some(Completion::ShowError) | Some(Completion::Ignored) | None => {}
            }
        });
    };

    let on_close_error = Callback::new(move |_: ()| form.update(|f| f.dismiss_error()));

    view! {
        <div class="upload">
            <div class="upload-slots">
                <SlotPanel kind=Slot::Video form=form toaster=toaster/>
                <SlotPanel kind=Slot::Audio form=form toaster=toaster/>
            </div>

            <Show
                when=move || form.with(|f| f.can_submit())
                fallback=|| view! { }
            >
                <button class="btn btn-primary upload-button" on:click=on_submit.clone()>
                    "Upload"
                </button>
            </Show>

            <Show
                when=move || form.with(|f| f.is_in_flight())
                fallback=|| view! { }
            >
                <div class="upload-loading">
                    <div class="spinner" role="progressbar" aria-label="Loading..."></div>
                </div>
            </Show>

            <UploadErrorModal
                open=Signal::derive(move || form.with(|f| f.show_error()))
                on_close=on_close_error
            />
        </div>
    }
}

/// Captions shown above a slot: (caption, accepted extensions).
fn slot_captions(slot: Slot) -> (&'static str, &'static str) {
    match slot {
        Slot::Video => (
            "Upload your video file with “bad” audio.",
            "Acceptable file types: .mp4, .mov",
        ),
        Slot::Audio => (
            "Upload your “completely fine” audio file.",
            "Acceptable file types: .mp3, .m4a",
        ),
    }
}

/// One slot: badge, captions, then either a drop zone or the chosen file.
#[component]
fn SlotPanel(kind: Slot, form: Form, toaster: Toaster) -> impl IntoView {
    let slot = kind;
    let drag_depth = create_rw_signal(DragDepth::default());
    let is_dragging = move || drag_depth.with(|d| d.is_active());
    let input_ref = create_node_ref::<html::Input>();

    let selected_name = move || form.with(|f| f.selection(slot).map(|s| s.name.clone()));
    let is_filled = move || form.with(|f| f.selection(slot).is_some());
    let (caption, sub_caption) = slot_captions(slot);
    let badge = match slot {
        Slot::Video => "1",
        Slot::Audio => "2",
    };

    let on_drag_enter = move |ev: ev::DragEvent| {
        ev.prevent_default();
        drag_depth.update(|d| d.enter());
    };

    // Needed for the zone to accept a drop at all
    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
    };

    let on_drag_leave = move |_: ev::DragEvent| {
        drag_depth.update(|d| d.leave());
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        drag_depth.update(|d| d.reset());
        let files = files_from_list(ev.data_transfer().and_then(|dt| dt.files()));
        apply_selection(form, toaster, slot, files);
    };

    let on_browse = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let files = files_from_list(input.files());
        // Reset so picking the same file again still fires `change`
        input.set_value("");
        apply_selection(form, toaster, slot, files);
    };

    let on_cancel = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        if let Some(Err(e)) = form.try_update(|f| f.cancel_selection(slot)) {
            log::warn!("Cancel refused: {}", e);
        }
    };

    view! {
        <div class=format!("upload-slot upload-slot-{}", slot.label())>
            <div class="upload-badge" class:done=is_filled>
                {move || if is_filled() { "✓" } else { badge }}
            </div>
            <div class="upload-info" class:done=is_filled>
                <p class="upload-info-caption">{caption}</p>
                <p class="upload-info-subcaption">{sub_caption}</p>
            </div>

            <div class="upload-container">
                {move || match selected_name() {
                    Some(name) => view! {
                        <div class="upload-selected">
                            <p class="upload-file-name">{name}</p>
                            <button
                                class="btn btn-cancel"
                                disabled=move || form.with(|f| f.is_in_flight())
                                on:click=on_cancel
                            >
                                "Cancel"
                            </button>
                        </div>
                    }.into_view(),
                    None => view! {
                        <div
                            class="upload-dropzone"
                            class:drag-active=is_dragging
                            on:dragenter=on_drag_enter
                            on:dragover=on_drag_over
                            on:dragleave=on_drag_leave
                            on:drop=on_drop
                        >
                            <Show
                                when=move || !is_dragging()
                                fallback=|| view! { <p class="upload-drop">"Drop the file here"</p> }
                            >
                                <p class="upload-text">
                                    {format!("Drag ‘n’ drop your {} file here", slot.label())}
                                </p>
                                <p class="upload-text-or">"or"</p>
                                <button class="btn btn-primary upload-browse" on:click=on_browse>
                                    "Browse files"
                                </button>
                            </Show>
                        </div>
                    }.into_view(),
                }}
            </div>

            <input
                type="file"
                accept=slot.accept_attr()
                style="display:none"
                node_ref=input_ref
                on:change=on_file_change
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captions_name_accepted_extensions() {
        assert!(slot_captions(Slot::Video).1.contains(".mp4"));
        assert!(slot_captions(Slot::Video).1.contains(".mov"));
        assert!(slot_captions(Slot::Audio).1.contains(".mp3"));
        assert!(slot_captions(Slot::Audio).1.contains(".m4a"));
    }

    #[test]
    fn test_missing_file_list_is_empty() {
        assert!(files_from_list(None).is_empty());
    }

    #[test]
    fn test_collect_indexed_keeps_every_file() {
        let dropped = vec!["meeting.mp4", "clip.mp4"];
        let files = collect_indexed(dropped.len() as u32, |i| dropped.get(i as usize).copied());
        assert_eq!(files, vec!["meeting.mp4", "clip.mp4"]);

        // Holes reported by the browser are skipped
        let files = collect_indexed(3, |i| (i != 1).then_some(i));
        assert_eq!(files, vec![0, 2]);
    }

    #[test]
    fn test_drag_over_children_stays_active() {
        let mut depth = DragDepth::default();
        assert!(!depth.is_active());

        // Enter the zone, then move onto the "Browse files" button
        depth.enter();
        depth.enter();
        depth.leave();
        assert!(depth.is_active());

        // Back out of the zone entirely
        depth.leave();
        assert!(!depth.is_active());

        // Stray leave events never underflow
        depth.leave();
        assert_eq!(depth, DragDepth(0));
    }

    #[test]
    fn test_drop_resets_drag_state() {
        let mut depth = DragDepth::default();
        depth.enter();
        depth.enter();
        depth.reset();
        assert!(!depth.is_active());
    }
}
