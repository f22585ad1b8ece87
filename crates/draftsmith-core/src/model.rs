//! Model identifiers.
//!
//! Known models are enum variants so application code never types a literal
//! like `"llama-3.3-70b-versatile"`; the backend crate maps them onto its own
//! naming scheme. [`Model::Custom`] carries anything else, e.g. a model name
//! taken from configuration.
//!
//! ```rust
//! use draftsmith_core::model::{GroqModel, Model};
//! assert_eq!(Model::from(GroqModel::Llama3_3_70bVersatile),
//!            Model::Groq(GroqModel::Llama3_3_70bVersatile));
//! ```

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Models served by Groq's OpenAI-compatible endpoint.
    Groq(GroqModel),
    /// Any other model name, passed through verbatim.
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroqModel {
    Llama3_3_70bVersatile,
}

impl From<GroqModel> for Model {
    fn from(val: GroqModel) -> Self {
        Model::Groq(val)
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Groq(GroqModel::Llama3_3_70bVersatile)
    }
}
