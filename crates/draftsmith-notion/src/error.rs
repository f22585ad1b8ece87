use draftsmith_core::error::StoreError;
use reqwest::StatusCode;

/// Every failure mode of the Notion client.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t deserialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Notion returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("missing integration token")]
    MissingToken,

    #[error("integration token contains characters not allowed in a header")]
    InvalidToken,

    #[error("missing database id")]
    MissingDatabaseId,
}

impl From<NotionError> for StoreError {
    fn from(value: NotionError) -> Self {
        match value {
            NotionError::Http(err) if err.is_timeout() => StoreError::Timeout,
            NotionError::Http(err) => StoreError::Request {
                status: err.status().map(|status| status.as_u16()),
                message: err.to_string(),
            },
            NotionError::Api { status, body } => StoreError::Request {
                status: Some(status.as_u16()),
                message: body,
            },
            NotionError::Serde(err) => StoreError::MalformedResponse(err.to_string()),
            other @ (NotionError::MissingToken
            | NotionError::InvalidToken
            | NotionError::MissingDatabaseId) => StoreError::Request {
                status: None,
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_surface_the_response_body() {
        let err: StoreError = NotionError::Api {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"code":"validation_error","message":"Post is not a property"}"#.into(),
        }
        .into();

        match err {
            StoreError::Request { status, message } => {
                assert_eq!(status, Some(400));
                assert!(message.contains("Post is not a property"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
