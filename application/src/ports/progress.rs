//! Progress notification port for the conversion flow

use examforge_domain::Model;

/// Receives progress callbacks while a conversion runs
///
/// Implemented in the presentation layer (spinner); the default
/// [`NoProgress`] does nothing.
pub trait ConversionProgress: Send + Sync {
    /// The prompt has been built; `estimated_tokens` is the pre-flight size
    fn on_prompt_built(&self, estimated_tokens: usize) {
        let _ = estimated_tokens;
    }

    /// The request is about to be sent to the backend
    fn on_request_started(&self, model: &Model) {
        let _ = model;
    }

    /// The backend responded with `bytes` of raw text
    fn on_response_received(&self, bytes: usize) {
        let _ = bytes;
    }

    /// Validation succeeded and produced `count` records
    fn on_records_validated(&self, count: usize) {
        let _ = count;
    }
}

/// No-op progress notifier
pub struct NoProgress;

impl ConversionProgress for NoProgress {}
