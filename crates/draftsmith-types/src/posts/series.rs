use draftsmith_core::{
    generic::{GenericMessage, GenericRole},
    template::{IntoPrompt, PromptTemplate},
};
use draftsmith_prompt::{builder::PromptBuilder, chain::PromptChain};

use super::{SYSTEM_ROLE, Selection, Sequence, Style, TEMPERATURE, with_formatting, with_style};
use crate::fragments::StaticFragment;

/// One day of a fixed-length daily series.
pub struct SeriesPostPrompt<'a> {
    selection: &'a Selection,
    sequence: Sequence,
    style: &'a Style,
}

impl<'a> SeriesPostPrompt<'a> {
    pub fn new(selection: &'a Selection, sequence: Sequence, style: &'a Style) -> Self {
        Self {
            selection,
            sequence,
            style,
        }
    }

    /// The prefix every post of the series must carry, e.g. `Day 7/30`.
    pub fn day_marker(sequence: Sequence) -> String {
        format!("Day {}/{}", sequence.number, sequence.total)
    }

    pub fn instruction(&self) -> String {
        let Sequence { number, total } = self.sequence;

        let builder = PromptBuilder::new()
            .add_line(format_args!(
                "Write Day {number} of a {total}-day LinkedIn series on AWS: \"{}\".",
                self.selection.quoted_topic()
            ))
            .add_blank_line();

        let builder = with_style(builder, self.style)
            .add_section(
                "SERIES RULES",
                [
                    format!(
                        "Start the first line with \"{}:\" followed by the hook",
                        Self::day_marker(self.sequence)
                    ),
                    "Assume readers followed earlier days, but keep this post self-contained".to_owned(),
                    "End with one line saying the series continues tomorrow (no spoilers)".to_owned(),
                ],
            )
            .add_blank_line()
            .add_section(
                "CONTENT (180-280 words)",
                [
                    "What the service or concept is, in one sentence",
                    "One non-obvious gotcha beginners hit",
                    "Practical example (CLI command, config snippet, or console setting)",
                    "One actionable tip",
                ],
            )
            .add_blank_line();

        with_formatting(builder)
            .add_line("Avoid fluff. Keep it beginner-friendly but technically precise.")
            .finalize()
    }
}

impl IntoPrompt for SeriesPostPrompt<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        PromptChain::new()
            .with(StaticFragment::from(SYSTEM_ROLE))
            .with(GenericMessage::new(self.instruction(), GenericRole::User))
            .build()
    }
}

impl PromptTemplate for SeriesPostPrompt<'_> {
    const TEMPERATURE: f64 = TEMPERATURE;
}
