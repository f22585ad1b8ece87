//! Traits that tie a **prompt** to its chat messages and sampling settings.
//!
//! 1. [`IntoPrompt`] – turns a value into a list of chat messages.
//! 2. [`PromptTemplate`] – adds the sampling temperature the prompt was
//!    written for.
//!
//! ```rust
//! use draftsmith_core::template::{IntoPrompt, PromptTemplate};
//! use draftsmith_core::generic::{GenericMessage, GenericRole};
//!
//! struct HelloPrompt;
//!
//! impl IntoPrompt for HelloPrompt {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for HelloPrompt {
//!     const TEMPERATURE: f64 = 0.7;
//! }
//! ```

/// A prompt the [`crate::DraftClient`] can execute.
pub trait PromptTemplate: IntoPrompt {
    /// Sampling temperature sent with the request.
    const TEMPERATURE: f64;
}

/// Converts a value into a series of chat messages.
///
/// The `Message` type is associated so a backend may require its own richer
/// struct without dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`crate::generic::GenericMessage`] is a prompt on its own.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
