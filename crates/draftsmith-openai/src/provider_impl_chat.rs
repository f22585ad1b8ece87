use std::{future::Future, pin::Pin, sync::Arc};

use draftsmith_core::{
    error::Result,
    generic::GenericChatCompletionResponse,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::try_from(params)?;

            let response = client.chat_completion(request).await?;
            let usage = response.usage_report();

            let Some(first_choice) = response.into_first_choice() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            if first_choice.finish_reason == Some(FinishReason::Length) {
                tracing::warn!("completion stopped at the token limit; the post may be cut off");
            }

            if let Some(usage) = &usage {
                tracing::debug!(
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    total_tokens = usage.total_tokens,
                    "completion usage"
                );
            }

            Ok(GenericChatCompletionResponse {
                content: first_choice.message.into(),
                usage,
            })
        })
    }
}
