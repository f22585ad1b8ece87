use draftsmith_core::error::GenerationError;
use reqwest::StatusCode;

/// Every failure mode the HTTP client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t deserialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("endpoint returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("response format error: {0}")]
    Format(String),

    #[error("missing API key")]
    MissingApiKey,

    #[error("API key contains characters not allowed in a header")]
    InvalidApiKey,
}

impl From<OpenAiError> for GenerationError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::Http(err) if err.is_timeout() => GenerationError::Timeout,
            OpenAiError::Http(err) => GenerationError::Request {
                status: err.status().map(|status| status.as_u16()),
                message: err.to_string(),
            },
            OpenAiError::Api { status, body } => GenerationError::Request {
                status: Some(status.as_u16()),
                message: body,
            },
            OpenAiError::Serde(err) => GenerationError::MalformedResponse(err.to_string()),
            OpenAiError::Format(message) => GenerationError::MalformedResponse(message),
            key @ (OpenAiError::MissingApiKey | OpenAiError::InvalidApiKey) => {
                GenerationError::InvalidRequest(key.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_keep_status_and_body() {
        let err: GenerationError = OpenAiError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"error":"invalid api key"}"#.into(),
        }
        .into();

        match err {
            GenerationError::Request { status, message } => {
                assert_eq!(status, Some(401));
                assert!(message.contains("invalid api key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_failures_are_malformed() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GenerationError = OpenAiError::Serde(serde_err).into();

        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }
}
