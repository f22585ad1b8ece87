//! # `draftsmith` – one scheduled post draft per run
//!
//! Each run walks a short, strictly sequential pipeline:
//!
//! | Stage            | Module        | What happens                                              |
//! |------------------|---------------|-----------------------------------------------------------|
//! | Topic selection  | [`select`]    | random pick from the topic bank, or cursor into a series  |
//! | Prompt building  | `draftsmith-types` | one template per [`Profile`]                         |
//! | Generation       | [`quality`]   | one chat completion, then word-count and marker checks    |
//! | Record writing   | [`image`], [`publish`] | badge or image URL, chunked body, one page create |
//!
//! [`pipeline::Pipeline`] strings the stages together over two capabilities,
//! a [`ChatCompletionProvider`](draftsmith_core::provider::ChatCompletionProvider)
//! and a [`RecordStore`](draftsmith_core::provider::RecordStore). The binary
//! plugs in the OpenAI-compatible and Notion adapters; tests plug in fakes.
pub mod config;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod profile;
pub mod publish;
pub mod quality;
pub mod select;

pub use config::Config;
pub use error::RunError;
pub use pipeline::{Outcome, Pipeline, exit_status};
pub use profile::Profile;

pub use draftsmith_notion as notion;
pub use draftsmith_openai as openai;
pub use draftsmith_prompt as prompt;
pub use draftsmith_types as types;
