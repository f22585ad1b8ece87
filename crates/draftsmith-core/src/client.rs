//! Lightweight client that executes a [`PromptTemplate`] against a single
//! concrete [`ChatCompletionProvider`] and returns the generated text.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! checks that the prompt's message type converts into what the backend
//! expects. Tests plug in an in-memory backend; the binary plugs in the
//! OpenAI-compatible adapter.
use std::sync::Arc;

use crate::{
    error::{GenerationError, Result},
    model::Model,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
    template::{IntoPrompt, PromptTemplate},
};

/// A client bound to a single provider and model.
#[derive(Debug, Clone)]
pub struct DraftClient<B> {
    backend: Arc<B>,
    model: Model,
}

impl<B> DraftClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B, model: Model) -> Self {
        Self {
            backend: Arc::new(backend),
            model,
        }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Send `prompt` and return the text of the first completion.
    ///
    /// # Errors
    ///
    /// Whatever the backend reports, plus
    /// [`GenerationError::MalformedResponse`] when the completion carries no
    /// text at all.
    pub async fn prompt_execute<P>(&self, prompt: P) -> Result<String>
    where
        P: PromptTemplate,
        <P as IntoPrompt>::Message: Into<B::Message> + Clone,
    {
        let params = ChatCompleteParameters::new(prompt.into_prompt(), self.model.clone())
            .with_temperature(P::TEMPERATURE);

        let response = self.backend.chat_complete(params).await?;

        response.content.content.ok_or_else(|| {
            GenerationError::MalformedResponse("first completion carries no text content".into())
        })
    }
}
