//! Error taxonomy for the fetch pipeline.
//!
//! Every failure mode is classified into one of four variants and normalized
//! into the `Failure` state's message at the controller boundary; nothing
//! propagates past the controller.

use thiserror::Error;

use crate::catalog::MappingError;

/// Message shown for non-2xx responses. The raw status line and body are
/// logged but never shown to the user.
const HTTP_STATUS_MESSAGE: &str = "Something went wrong 😭";

/// Errors that can occur while fetching and mapping the catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure: unreachable host, DNS, aborted body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("catalog request failed with HTTP status {status}")]
    HttpStatus { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A record was missing a field the display shape needs.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl FetchError {
    /// The text carried into the `Failure` state.
    ///
    /// Non-2xx responses get a fixed message; the other variants surface the
    /// underlying error's own text.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::HttpStatus { .. } => HTTP_STATUS_MESSAGE.to_string(),
            FetchError::Transport(err) => err.to_string(),
            FetchError::Decode(err) => err.to_string(),
            FetchError::Mapping(err) => err.to_string(),
        }
    }
}
