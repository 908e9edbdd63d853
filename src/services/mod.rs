//! Clients for the two external collaborators: the Gemini text service and
//! the spreadsheet-backed intake endpoint.

mod gemini;
mod sheets;
mod traits;

pub use gemini::GeminiClient;
pub use sheets::AppsScriptClient;
pub use traits::{EnhanceService, SubmitService};

#[cfg(test)]
pub use traits::{MockEnhanceService, MockSubmitService};

use thiserror::Error;

/// Failures crossing the service seam. Every variant is recovered at the call
/// site and surfaced to the user; none propagates past the app boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("no Gemini API key configured (set GEMINI_API_KEY or add it to the config file)")]
    MissingApiKey,

    #[error("the model returned no usable text")]
    EmptyResponse,
}
