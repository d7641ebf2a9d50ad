//! Adapter error types.

/// Errors from a suggestion request.
///
/// Every variant is logged in full at the call site; the UI only ever
/// shows one generic retry message.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("Request to the generation API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Generation API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Generation API returned no usable text")]
    EmptyResponse,
}
