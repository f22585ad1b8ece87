//! The two external capabilities a pipeline run depends on.
//!
//! Both traits return a [`Pin<Box<dyn Future>>`](std::pin::Pin) so they stay
//! object-safe without pulling in `async_trait`.
mod chat_complete;
mod record_store;

pub use chat_complete::{ChatCompleteParameters, ChatCompletionProvider};
pub use record_store::RecordStore;
