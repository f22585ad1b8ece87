//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`].
//!
//! A post prompt is a fixed system fragment followed by the rendered user
//! instruction. `PromptChain` lines these up without mutable vectors or
//! `extend()` calls:
//!
//! ```rust
//! use draftsmith_prompt::chain::PromptChain;
//! use draftsmith_core::generic::{GenericMessage, GenericRole};
//!
//! let messages: Vec<GenericMessage> = PromptChain::new()
//!     .with(GenericMessage::new("You write concise posts.".into(), GenericRole::System))
//!     .with(GenericMessage::new("Write about VPC routing.".into(), GenericRole::User))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! ```
use draftsmith_core::template::IntoPrompt;

/// Accumulates messages produced by [`IntoPrompt`] implementors.
///
/// The field is private so the only way to obtain the result is
/// [`Self::build`].
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
