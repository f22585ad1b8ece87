//! Chat-completion backend for any OpenAI-compatible endpoint.
//!
//! Defaults to Groq's `https://api.groq.com/openai/v1`; point
//! [`OpenAiAdapterBuilder::with_base_url`] elsewhere for other vendors.
mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub use client::OpenAiClient;
pub mod api_v1;
mod client;
pub mod error;
