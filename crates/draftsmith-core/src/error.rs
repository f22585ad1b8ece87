//! Error types exposed by **`draftsmith-core`**.
//!
//! Backend crates convert their transport-specific errors into one of these
//! enums before bubbling them up, so the pipeline only ever matches on the
//! small taxonomy below.

use thiserror::Error;

/// Convenient alias for generation results.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Failure of the single chat-completion round-trip.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The request did not finish within the client timeout.
    #[error("generation request timed out")]
    Timeout,

    /// Transport failure or a non-success HTTP status. `status` is `None`
    /// when no response was received at all.
    #[error("generation request failed ({}): {message}", status_label(.status))]
    Request {
        status: Option<u16>,
        message: String,
    },

    /// The response parsed as HTTP but lacked the completion structure.
    #[error("malformed generation response: {0}")]
    MalformedResponse(String),

    /// The backend could not express the request (unknown model etc.).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Failure while talking to the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request timed out")]
    Timeout,

    /// Transport failure or a non-success HTTP status. For the latter the
    /// response body is kept in `message` for diagnostics.
    #[error("store request failed ({}): {message}", status_label(.status))]
    Request {
        status: Option<u16>,
        message: String,
    },

    #[error("malformed store response: {0}")]
    MalformedResponse(String),
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "no response".to_owned(),
    }
}
