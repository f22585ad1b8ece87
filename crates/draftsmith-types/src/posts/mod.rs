//! Post prompt templates, one per profile.
//!
//! Each template renders a single user instruction and pairs it with the
//! shared [`SYSTEM_ROLE`] fragment:
//!
//! ```rust
//! use draftsmith_core::template::IntoPrompt;
//! use draftsmith_types::catalog::{STRUCTURES, VOICES};
//! use draftsmith_types::posts::{BlogPostPrompt, Selection, Style};
//!
//! let selection = Selection::categorized("Docker build layers", "DevOps/Infra");
//! let style = Style { voice: VOICES[0], structure: STRUCTURES[0] };
//!
//! let messages = BlogPostPrompt::new(&selection, &style).into_prompt();
//! assert_eq!(messages.len(), 2);
//! ```
use std::borrow::Cow;

use draftsmith_core::sanitize::{Destination, encode};
use draftsmith_prompt::builder::PromptBuilder;

use crate::catalog::Voice;

mod blog;
mod deep_dive;
mod series;

pub use blog::BlogPostPrompt;
pub use deep_dive::DeepDivePrompt;
pub use series::SeriesPostPrompt;

pub const SYSTEM_ROLE: &str =
    "You write concise, technical posts for developers. Avoid fluff and personal life details.";

const TEMPERATURE: f64 = 0.7;

/// The topic chosen for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub topic: String,
    pub category: Option<String>,
    /// Position in a fixed series, for cursor-selected topics.
    pub sequence: Option<Sequence>,
}

/// 1-based position of a topic within a series of `total` topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    pub number: usize,
    pub total: usize,
}

impl Selection {
    pub fn categorized(topic: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            category: Some(category.into()),
            sequence: None,
        }
    }

    pub fn sequenced(topic: impl Into<String>, number: usize, total: usize) -> Self {
        Self {
            topic: topic.into(),
            category: None,
            sequence: Some(Sequence { number, total }),
        }
    }

    /// Topic text safe to place between double quotes.
    pub fn quoted_topic(&self) -> Cow<'_, str> {
        encode(Destination::JsonString, &self.topic)
    }
}

/// Cosmetic parameters drawn once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub voice: Voice,
    pub structure: &'static str,
}

/// `VOICE/TONE` and `STRUCTURE` lines shared by every template.
fn with_style(builder: PromptBuilder, style: &Style) -> PromptBuilder {
    builder
        .add_label_value(
            "VOICE/TONE",
            format_args!("{} -> {}", style.voice.name, style.voice.instruction),
        )
        .add_label_value("STRUCTURE", style.structure)
        .add_blank_line()
}

fn with_formatting(builder: PromptBuilder) -> PromptBuilder {
    builder
        .add_section(
            "FORMATTING",
            [
                "Short paragraphs",
                "Blank line between paragraphs",
                "Use bullets if listing (max 3)",
                "Code block for commands",
            ],
        )
        .add_blank_line()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_topic_escapes_template_breaking_characters() {
        let selection = Selection::categorized(r#"The "one" line"#, "AWS/Cloud");

        assert_eq!(selection.quoted_topic(), r#"The \"one\" line"#);
    }
}
