//! Content tables and prompt templates for the draftsmith pipeline.
//!
//! * [`catalog`] – topic banks, the series list, voices, structures and the
//!   lookup tables behind badge images.
//! * [`fragments`] – reusable prompt fragments.
//! * [`posts`] – one prompt template per post profile.
pub mod catalog;
pub mod fragments;
pub mod posts;
