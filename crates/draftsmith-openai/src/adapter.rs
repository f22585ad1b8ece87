use std::sync::Arc;

use reqwest::Client as HttpClient;

use crate::{
    client::{DEFAULT_TIMEOUT, OpenAiClient},
    error::OpenAiError,
};

/// Wires the HTTP client [`OpenAiClient`] into a value that implements
/// [`draftsmith_core::provider::ChatCompletionProvider`].
///
/// All user-facing functionality sits on
/// [`draftsmith_core::DraftClient`] once the adapter is plugged in.
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

/// Builder for [`OpenAiAdapter`].
///
/// ```rust,no_run
/// use draftsmith_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new()
///     .with_api_key("gsk_…")
///     .build()
///     .expect("valid adapter");
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`OpenAiError::MissingApiKey`] – no (or an empty) API key.
    /// * [`OpenAiError::Http`] – the `reqwest` client could not be built.
    pub fn build(self) -> Result<OpenAiAdapter, OpenAiError> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(OpenAiError::MissingApiKey)?;

        let http = HttpClient::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(OpenAiAdapter {
            client: Arc::new(OpenAiClient::with_http(api_key, http, self.base_url)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_an_api_key() {
        assert!(matches!(
            OpenAiAdapterBuilder::new().build(),
            Err(OpenAiError::MissingApiKey)
        ));
        assert!(matches!(
            OpenAiAdapterBuilder::new().with_api_key("").build(),
            Err(OpenAiError::MissingApiKey)
        ));
    }

    #[test]
    fn build_keeps_the_base_url() {
        let adapter = OpenAiAdapterBuilder::new()
            .with_api_key("key")
            .with_base_url("http://127.0.0.1:9/v1")
            .build()
            .unwrap();

        assert_eq!(adapter.client.base_url(), "http://127.0.0.1:9/v1");
    }
}
