//! Image upload view.
//!
//! Owns the whole upload workflow state: file selection, preview,
//! upload to the prediction service, and the error/result regions.

use leptos::html::Input;
use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::{ErrorBanner, ResultCard};
use crate::services::{format_size, read_preview, HttpPredictClient};
use crate::state::{upload, UploadBlocked, UploadState};
use crate::{ACCEPTED_TYPES, BACKEND_URL, MISSING_FILE_ALERT};

#[component]
pub fn UploadView() -> impl IntoView {
    let state = create_rw_signal(UploadState::<File>::new());
    let file_input = create_node_ref::<Input>();

    let preview = move || state.with(|s| s.preview().map(str::to_string));
    let loading = move || state.with(UploadState::is_loading);
    let error = Signal::derive(move || state.with(|s| s.error().map(str::to_string)));
    let result = Signal::derive(move || state.with(|s| s.result().cloned()));
    let file_caption = move || {
        state.with(|s| {
            s.file()
                .map(|f| format!("{} ({})", f.name(), format_size(f.size())))
        })
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input.files().and_then(|files| files.get(0));

        let Some(file) = selected else {
            log::debug!("File picker closed without a selection");
            state.update(UploadState::clear_selection);
            return;
        };

        log::info!("🖼️ Selected {} ({} bytes, {})", file.name(), file.size(), file.type_());
        let token = state.try_update(|s| s.select_file(file.clone()));

        spawn_local(async move {
            let Some(token) = token else { return };
            match read_preview(&file).await {
                Ok(data_url) => {
                    let applied = state.try_update(|s| s.apply_preview(token, data_url));
                    if applied != Some(true) {
                        log::debug!("Discarded preview of a replaced file");
                    }
                }
                Err(e) => log::error!("❌ Preview failed: {}", e),
            }
        });
    };

    let on_upload = move |_| {
        spawn_local(async move {
            let client = HttpPredictClient::new(BACKEND_URL);
            match upload(&state, &client).await {
                Ok(()) => {}
                Err(UploadBlocked::MissingFile) => {
                    log::warn!("⚠️ Upload clicked without a file");
                    if let Err(e) = gloo_utils::window().alert_with_message(MISSING_FILE_ALERT) {
                        log::error!("Failed to show alert: {:?}", e);
                    }
                }
                Err(UploadBlocked::InFlight) => log::debug!("Upload already in progress"),
            }
        });
    };

    let on_remove = move |_| {
        log::info!("🗑️ Removing selected image");
        state.update(UploadState::remove_file);
        // Reset the picker so the same file fires `change` again
        if let Some(input) = file_input.get() {
            input.set_value("");
        }
    };

    view! {
        <div class="upload-section">
            <input
                type="file"
                accept=ACCEPTED_TYPES
                class="file-input"
                aria-label="Upload an image"
                node_ref=file_input
                on:change=on_file_change
            />

            <Show
                when=move || preview().is_some()
                fallback=|| view! { }
            >
                <div class="image-preview">
                    <h3>"Image Preview:"</h3>
                    <img src=move || preview().unwrap_or_default() alt="Preview" class="preview-image"/>
                    <div class="file-caption">{move || file_caption().unwrap_or_default()}</div>
                    <div class="button-container">
                        <button
                            class="btn btn-remove"
                            aria-label="Remove image"
                            on:click=on_remove
                        >
                            "Remove"
                        </button>
                        <button
                            class="btn btn-primary"
                            aria-label="Upload and predict"
                            disabled=move || !state.with(UploadState::can_upload)
                            on:click=on_upload
                        >
                            {move || if loading() { "Processing..." } else { "Upload and Predict" }}
                        </button>
                    </div>
                </div>
            </Show>
        </div>

        <ErrorBanner error=error/>
        <ResultCard result=result/>
    }
}
