//! Helpers for assembling instructions and chat message lists.
//!
//! * [`builder::PromptBuilder`] – fluent, line-oriented text builder.
//! * [`chain::PromptChain`] – concatenates values implementing
//!   [`IntoPrompt`](draftsmith_core::template::IntoPrompt).
pub mod builder;
pub mod chain;
