use serde::Serialize;

use crate::chunk::{MAX_RICH_TEXT_UNITS, chunk_text};

/// A plain-text rich-text object (`{"text": {"content": …}}`).
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RichText {
    pub text: TextContent,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TextContent {
    pub content: String,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

/// Rich-text objects for `text`, split so no object exceeds the size limit.
pub fn rich_text_blocks(text: &str) -> Vec<RichText> {
    chunk_text(text, MAX_RICH_TEXT_UNITS)
        .into_iter()
        .map(RichText::plain)
        .collect()
}
