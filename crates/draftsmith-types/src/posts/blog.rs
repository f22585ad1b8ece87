use draftsmith_core::{
    generic::{GenericMessage, GenericRole},
    template::{IntoPrompt, PromptTemplate},
};
use draftsmith_prompt::{builder::PromptBuilder, chain::PromptChain};

use super::{SYSTEM_ROLE, Selection, Style, TEMPERATURE, with_formatting, with_style};
use crate::fragments::StaticFragment;

/// Light, story-driven technical post of 200-300 words.
pub struct BlogPostPrompt<'a> {
    selection: &'a Selection,
    style: &'a Style,
}

impl<'a> BlogPostPrompt<'a> {
    pub fn new(selection: &'a Selection, style: &'a Style) -> Self {
        Self { selection, style }
    }

    pub fn instruction(&self) -> String {
        let subject = match &self.selection.category {
            Some(category) => format!(
                "Write a technical LinkedIn post about: \"{}\" (Category: {category}).",
                self.selection.quoted_topic()
            ),
            None => format!(
                "Write a technical LinkedIn post about: \"{}\".",
                self.selection.quoted_topic()
            ),
        };

        let builder = with_style(PromptBuilder::new().add_line(subject).add_blank_line(), self.style)
            .add_section(
                "STORYTELLING (light, not personal)",
                [
                    "Include a short technical scenario (1-2 sentences max)",
                    "No personal life details or emotions",
                    "Avoid repetitive phrases like \"I was confused\" or \"spent hours\"",
                    "Keep it professional and focused on the technical lesson",
                ],
            )
            .add_blank_line()
            .add_section(
                "CONTENT (200-300 words)",
                [
                    "Hook that feels fresh (varied style)",
                    "One non-obvious technical insight or gotcha",
                    "Practical example (CLI command, config snippet, or architecture choice)",
                    "Why it matters in real systems",
                    "One actionable tip",
                ],
            )
            .add_blank_line();

        with_formatting(builder)
            .add_section(
                "HOOK IDEAS (rotate styles)",
                [
                    "Technical scenario: \"While configuring X, this broke...\"",
                    "Before/after: \"I used to do X. Now I do Y.\"",
                    "Common mistake: \"Most people get X wrong. Here's why.\"",
                    "Discovery: \"Found out Y when testing Z.\"",
                    "Comparison: \"X vs Y. Here's the practical difference.\"",
                ],
            )
            .add_blank_line()
            .add_line("Avoid fluff. Keep it technical, readable, and lightly story-driven.")
            .finalize()
    }
}

impl IntoPrompt for BlogPostPrompt<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        PromptChain::new()
            .with(StaticFragment::from(SYSTEM_ROLE))
            .with(GenericMessage::new(self.instruction(), GenericRole::User))
            .build()
    }
}

impl PromptTemplate for BlogPostPrompt<'_> {
    const TEMPERATURE: f64 = TEMPERATURE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{STRUCTURES, VOICES};

    #[test]
    fn instruction_names_topic_category_and_style() {
        let selection = Selection::categorized("CI caching", "DevOps/Infra");
        let style = Style {
            voice: VOICES[3],
            structure: STRUCTURES[1],
        };

        let text = BlogPostPrompt::new(&selection, &style).instruction();

        assert!(text.starts_with(
            "Write a technical LinkedIn post about: \"CI caching\" (Category: DevOps/Infra).\n\n"
        ));
        assert!(text.contains(
            "VOICE/TONE: The Debugger -> Focused on fixing real issues. Explain the root cause.\n"
        ));
        assert!(text.contains("STRUCTURE: List: Hook -> 3 bullets -> Practical tip\n"));
        assert!(text.contains("CONTENT (200-300 words):\n"));
    }

    #[test]
    fn prompt_is_system_then_user() {
        let selection = Selection::categorized("CI caching", "DevOps/Infra");
        let style = Style {
            voice: VOICES[0],
            structure: STRUCTURES[0],
        };

        let messages = BlogPostPrompt::new(&selection, &style).into_prompt();

        assert_eq!(messages[0].role, GenericRole::System);
        assert_eq!(messages[0].content.as_deref(), Some(SYSTEM_ROLE));
        assert_eq!(messages[1].role, GenericRole::User);
    }
}
