use std::borrow::Cow;

use draftsmith_core::model::{GroqModel, Model};

pub const LLAMA3_3_70B_VERSATILE: &str = "llama-3.3-70b-versatile";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'_, str>> {
    match model {
        Model::Custom(custom) if custom.trim().is_empty() => None,
        Model::Custom(custom) => Some(Cow::Borrowed(custom.as_str())),
        Model::Groq(GroqModel::Llama3_3_70bVersatile) => Some(LLAMA3_3_70B_VERSATILE.into()),
    }
}
