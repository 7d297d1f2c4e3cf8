//! Upload view state and the upload workflow.
//!
//! [`UploadState`] is plain data, generic over the file handle, so the
//! workflow can run against a `web_sys::File` in the browser and against
//! any cloneable stand-in under `cargo test`.
//!
//! ```text
//!   select_file ──▶ (file, no preview) ──apply_preview──▶ (file, preview)
//!        ▲                                                    │
//!        │                                               begin_upload
//!   remove_file                                               ▼
//!        │                                             (loading = true)
//!        └──────────── result XOR error ◀──finish_upload──────┘
//! ```

use std::cell::RefCell;

use leptos::{RwSignal, SignalUpdate};

use crate::services::PredictClient;
use crate::types::{AppResult, PredictionResult};

/// Identifies one file selection; used to discard stale preview reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionToken(u64);

/// Why an upload did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadBlocked {
    /// Nothing selected; the caller should alert the user.
    MissingFile,
    /// A request is already outstanding.
    InFlight,
}

/// Local state of the upload view.
#[derive(Clone, Debug)]
pub struct UploadState<F> {
    file: Option<F>,
    preview: Option<String>,
    result: Option<PredictionResult>,
    error: Option<String>,
    loading: bool,
    selection: u64,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            result: None,
            error: None,
            loading: false,
            selection: 0,
        }
    }
}

impl<F> UploadState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Preview data URL of the current file, once read.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the upload button should accept clicks.
    pub fn can_upload(&self) -> bool {
        self.file.is_some() && !self.loading
    }

    /// Store a newly picked file.
    ///
    /// Clears the previous result, error and preview. The returned token
    /// must be handed back to [`apply_preview`](Self::apply_preview).
    pub fn select_file(&mut self, file: F) -> SelectionToken {
        self.file = Some(file);
        self.reset_outputs();
        self.next_selection()
    }

    /// The picker fired a change event without a file (dialog cancelled
    /// after a previous pick).
    pub fn clear_selection(&mut self) {
        self.file = None;
        self.reset_outputs();
        self.next_selection();
    }

    /// Store a preview read for `token`. Returns `false` and drops the
    /// data URL if the selection changed meanwhile.
    pub fn apply_preview(&mut self, token: SelectionToken, data_url: String) -> bool {
        if token.0 != self.selection || self.file.is_none() {
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    /// Clear file, preview, result and error.
    ///
    /// An outstanding request is not cancelled; its response will still
    /// land in `finish_upload`.
    pub fn remove_file(&mut self) {
        self.file = None;
        self.reset_outputs();
        self.next_selection();
    }

    /// Enter the loading state and hand out the file to send.
    pub fn begin_upload(&mut self) -> Result<F, UploadBlocked>
    where
        F: Clone,
    {
        let file = self.file.clone().ok_or(UploadBlocked::MissingFile)?;
        if self.loading {
            return Err(UploadBlocked::InFlight);
        }
        self.loading = true;
        self.error = None;
        Ok(file)
    }

    /// Record the outcome of the request. Result and error are exclusive.
    pub fn finish_upload(&mut self, outcome: AppResult<PredictionResult>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
    }

    fn reset_outputs(&mut self) {
        self.preview = None;
        self.result = None;
        self.error = None;
    }

    fn next_selection(&mut self) -> SelectionToken {
        self.selection += 1;
        SelectionToken(self.selection)
    }
}

// =============================================================================
// Store abstraction
// =============================================================================

/// Somewhere an [`UploadState`] lives and can be mutated across await points.
///
/// Returns `None` when the state is gone (component unmounted).
pub trait UploadStore<F> {
    fn modify<R>(&self, f: impl FnOnce(&mut UploadState<F>) -> R) -> Option<R>;
}

impl<F: 'static> UploadStore<F> for RwSignal<UploadState<F>> {
    fn modify<R>(&self, f: impl FnOnce(&mut UploadState<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<F> UploadStore<F> for RefCell<UploadState<F>> {
    fn modify<R>(&self, f: impl FnOnce(&mut UploadState<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one upload cycle: enter loading, send, record the outcome.
///
/// Blocked uploads return early without calling `client`.
pub async fn upload<F, S, C>(store: &S, client: &C) -> Result<(), UploadBlocked>
where
    F: Clone,
    S: UploadStore<F>,
    C: PredictClient<F>,
{
    let file = match store.modify(UploadState::begin_upload) {
        Some(started) => started?,
        None => return Ok(()),
    };

    log::info!("Uploading image for prediction...");
    let outcome = client.predict(&file).await;

    match &outcome {
        Ok(result) => log::info!("Prediction: {} ({})", result.label, result.confidence_label()),
        Err(e) => log::warn!("Prediction failed: {}", e),
    }

    if store.modify(|state| state.finish_upload(outcome)).is_none() {
        log::debug!("Upload view gone before the response arrived");
    }
    Ok(())
}
