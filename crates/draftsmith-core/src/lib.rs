//! Provider-agnostic building blocks shared by every draftsmith crate.
//!
//! * [`generic`] – chat messages and roles independent of any LLM vendor.
//! * [`template`] – traits that turn a value into chat messages.
//! * [`provider`] – the two capabilities a pipeline run needs: a chat
//!   completion backend and a record store.
//! * [`record`] – the outbound draft record and what the store reports back.
//! * [`sanitize`] – the single place untrusted text gets encoded for its
//!   destination.
//! * [`client`] – [`DraftClient`], which binds a backend to a model.
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod record;
pub mod sanitize;
pub mod template;

pub use client::DraftClient;
