use draftsmith_core::error::{GenerationError, StoreError};
use thiserror::Error;

/// Everything that aborts a run. Each variant maps to exit status 1.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("missing required environment variable `{0}`")]
    ConfigMissing(&'static str),

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("topic catalog is empty")]
    EmptyCatalog,

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("generated post is too short: {words} words (minimum {minimum})")]
    ContentTooShort { words: usize, minimum: usize },

    #[error("could not count existing records: {0}")]
    Count(#[source] StoreError),

    #[error("could not write record: {0}")]
    Write(#[source] StoreError),
}
