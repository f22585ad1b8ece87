//! Builder-style helper for constructing **plain-text instructions**.
//!
//! Writing long multi-line format strings inline is tedious and error-prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the layout. Every method returns `self`:
//!
//! ```rust
//! use draftsmith_prompt::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .add_line("Write a short post.")
//!     .add_blank_line()
//!     .add_label_value("VOICE", "Calm and structured")
//!     .add_section("FORMATTING", ["Short paragraphs", "Blank line between paragraphs"])
//!     .finalize();
//!
//! assert!(text.contains("VOICE: Calm and structured\n"));
//! assert!(text.ends_with("- Blank line between paragraphs\n"));
//! ```
//!
//! The builder performs **no validation** and no smart formatting: newlines
//! and whitespace are emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper producing a text buffer.
///
/// Call [`Self::finalize`] to obtain the assembled text.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add `LABEL: value` on its own line.
    pub fn add_label_value(mut self, label: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "{label}: {value}").expect("failed to write buffer");
        self
    }

    /// Add a `- item` bullet line.
    pub fn add_bullet(mut self, item: impl Display) -> Self {
        writeln!(self.buffer, "- {item}").expect("failed to write buffer");
        self
    }

    /// Add a `HEADING:` line followed by one bullet per item.
    pub fn add_section<I>(self, heading: impl Display, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        items
            .into_iter()
            .fold(self.add_line(format_args!("{heading}:")), |builder, item| {
                builder.add_bullet(item)
            })
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_renders_heading_and_bullets() {
        let text = PromptBuilder::new()
            .add_section("HOOK IDEAS", ["Before/after", "Common mistake"])
            .finalize();

        assert_eq!(text, "HOOK IDEAS:\n- Before/after\n- Common mistake\n");
    }

    #[test]
    fn empty_section_keeps_heading() {
        let text = PromptBuilder::new()
            .add_section("NOTES", Vec::<&str>::new())
            .add_blank_line()
            .finalize();

        assert_eq!(text, "NOTES:\n\n");
    }
}
