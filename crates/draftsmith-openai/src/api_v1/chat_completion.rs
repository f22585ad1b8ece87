use draftsmith_core::error::GenerationError;
use draftsmith_core::generic::{GenericMessage, GenericRole, GenericUsageReport};
use draftsmith_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Serialize};

use crate::model_map::map_model;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl<M> TryFrom<ChatCompleteParameters<M>> for ChatCompletionRequest
where
    M: Into<ChatCompletionMessage> + Clone,
{
    type Error = GenerationError;

    fn try_from(value: ChatCompleteParameters<M>) -> Result<Self, Self::Error> {
        let model = map_model(&value.model).ok_or_else(|| {
            GenerationError::InvalidRequest(format!(
                "backend does not support selected model: {:?}",
                value.model
            ))
        })?;

        Ok(Self {
            model: model.into_owned(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<ChatCompletionMessageForResponse> for GenericMessage {
    fn from(value: ChatCompletionMessageForResponse) -> Self {
        GenericMessage {
            content: value.content,
            role: value.role.into(),
            name: value.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionMessageForResponse,
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Usage {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}

impl ChatCompletionResponse {
    /// Consume the response and return its first choice, if any.
    pub fn into_first_choice(self) -> Option<ChatCompletionChoice> {
        self.choices.into_iter().next()
    }

    pub fn usage_report(&self) -> Option<GenericUsageReport> {
        self.usage.map(|usage| GenericUsageReport {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        })
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    #[serde(other)]
    Other,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

impl From<MessageRole> for GenericRole {
    fn from(value: MessageRole) -> Self {
        match value {
            MessageRole::User => GenericRole::User,
            MessageRole::System => GenericRole::System,
            MessageRole::Assistant => GenericRole::Assistant,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content.unwrap_or_default(),
            name: value.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use draftsmith_core::model::{GroqModel, Model};
    use serde_json::json;

    use super::*;

    #[test]
    fn request_serialises_model_messages_and_temperature() {
        let params = ChatCompleteParameters::new(
            vec![
                GenericMessage::new("be brief".into(), GenericRole::System),
                GenericMessage::new("write".into(), GenericRole::User),
            ],
            Model::Groq(GroqModel::Llama3_3_70bVersatile),
        )
        .with_temperature(0.7);

        let request = ChatCompletionRequest::try_from(params).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "llama-3.3-70b-versatile",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "write"}
                ],
                "temperature": 0.7
            })
        );
    }

    #[test]
    fn response_yields_the_first_choice() {
        let body = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1,
            "model": "llama-3.3-70b-versatile",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "second"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15},
            "x_groq": {"id": "req_1"}
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.usage_report().unwrap().total_tokens, 15);

        let choice = response.into_first_choice().unwrap();
        assert_eq!(choice.message.content.as_deref(), Some("first"));
        assert_eq!(choice.finish_reason, Some(FinishReason::Stop));
    }

    #[test]
    fn response_without_choices_does_not_parse() {
        let body = json!({"error": {"message": "overloaded"}});

        assert!(serde_json::from_value::<ChatCompletionResponse>(body).is_err());
    }

    #[test]
    fn unknown_finish_reasons_are_tolerated() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "eos"}]
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        let choice = response.into_first_choice().unwrap();

        assert_eq!(choice.finish_reason, Some(FinishReason::Other));
        assert_eq!(choice.message.content, None);
    }
}
