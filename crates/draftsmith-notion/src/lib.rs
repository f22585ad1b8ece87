//! Notion database backend for draftsmith.
//!
//! Drafts become pages in one database. The crate exposes the raw
//! [`NotionClient`], the typed `api_v1` payloads, and [`NotionAdapter`],
//! which implements [`draftsmith_core::provider::RecordStore`].
mod adapter;
mod client;
mod store_impl;

pub use adapter::{NotionAdapter, NotionAdapterBuilder};
pub use client::NotionClient;
pub mod api_v1;
pub mod chunk;
pub mod error;
