use draftsmith_core::{
    generic::{GenericMessage, GenericRole},
    template::{IntoPrompt, PromptTemplate},
};
use draftsmith_prompt::{builder::PromptBuilder, chain::PromptChain};

use super::{SYSTEM_ROLE, Selection, Style, TEMPERATURE, with_formatting, with_style};
use crate::fragments::StaticFragment;

/// Long-form post of 300-450 words for readers who know the basics.
pub struct DeepDivePrompt<'a> {
    selection: &'a Selection,
    style: &'a Style,
}

impl<'a> DeepDivePrompt<'a> {
    pub fn new(selection: &'a Selection, style: &'a Style) -> Self {
        Self { selection, style }
    }

    pub fn instruction(&self) -> String {
        let category = self
            .selection
            .category
            .as_deref()
            .map(|category| format!(" (Category: {category})"))
            .unwrap_or_default();

        let builder = PromptBuilder::new()
            .add_line(format_args!(
                "Write an in-depth technical LinkedIn post about: \"{}\"{category}.",
                self.selection.quoted_topic()
            ))
            .add_blank_line();

        let builder = with_style(builder, self.style)
            .add_section(
                "DEPTH (300-450 words)",
                [
                    "Explain the underlying mechanism, not just the symptom",
                    "Walk through one concrete failure scenario end to end",
                    "Include a config snippet or CLI command in a code block",
                    "Name the trade-off and when the opposite choice is right",
                    "Close with a checklist of at most 3 items",
                ],
            )
            .add_blank_line();

        with_formatting(builder)
            .add_line("Write for engineers who already know the basics. No fluff.")
            .finalize()
    }
}

impl IntoPrompt for DeepDivePrompt<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        PromptChain::new()
            .with(StaticFragment::from(SYSTEM_ROLE))
            .with(GenericMessage::new(self.instruction(), GenericRole::User))
            .build()
    }
}

impl PromptTemplate for DeepDivePrompt<'_> {
    const TEMPERATURE: f64 = TEMPERATURE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{STRUCTURES, VOICES};

    #[test]
    fn instruction_sets_the_long_form_range() {
        let selection = Selection::categorized("Idempotency keys", "Microservices/Backend");
        let style = Style {
            voice: VOICES[2],
            structure: STRUCTURES[3],
        };

        let text = DeepDivePrompt::new(&selection, &style).instruction();

        assert!(text.starts_with(
            "Write an in-depth technical LinkedIn post about: \"Idempotency keys\" (Category: Microservices/Backend)."
        ));
        assert!(text.contains("DEPTH (300-450 words):\n"));
    }
}
