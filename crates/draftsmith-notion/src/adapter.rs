use std::sync::Arc;

use reqwest::Client as HttpClient;

use crate::{
    client::{DEFAULT_TIMEOUT, NotionClient},
    error::NotionError,
};

/// Wires [`NotionClient`] and a target database into a value that implements
/// [`draftsmith_core::provider::RecordStore`].
pub struct NotionAdapter {
    pub(crate) client: Arc<NotionClient>,
    pub(crate) database_id: String,
}

impl NotionAdapter {
    pub fn database_id(&self) -> &str {
        &self.database_id
    }
}

/// Builder for [`NotionAdapter`].
///
/// ```rust,no_run
/// use draftsmith_notion::NotionAdapterBuilder;
///
/// let store = NotionAdapterBuilder::new()
///     .with_token("secret_…")
///     .with_database_id("0f6c…")
///     .build()
///     .expect("valid adapter");
/// ```
#[derive(Default)]
pub struct NotionAdapterBuilder {
    pub(crate) token: Option<String>,
    pub(crate) database_id: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl NotionAdapterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_database_id(mut self, database_id: impl Into<String>) -> Self {
        self.database_id = Some(database_id.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// # Errors
    ///
    /// * [`NotionError::MissingToken`] / [`NotionError::MissingDatabaseId`]
    ///   – a required value is absent or blank.
    /// * [`NotionError::Http`] – the `reqwest` client could not be built.
    pub fn build(self) -> Result<NotionAdapter, NotionError> {
        let token = self
            .token
            .filter(|token| !token.trim().is_empty())
            .ok_or(NotionError::MissingToken)?;
        let database_id = self
            .database_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(NotionError::MissingDatabaseId)?;

        let http = HttpClient::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(NotionAdapter {
            client: Arc::new(NotionClient::with_http(token, http, self.base_url)),
            database_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_token_and_database() {
        assert!(matches!(
            NotionAdapterBuilder::new().with_database_id("db").build(),
            Err(NotionError::MissingToken)
        ));
        assert!(matches!(
            NotionAdapterBuilder::new().with_token("t").with_database_id(" ").build(),
            Err(NotionError::MissingDatabaseId)
        ));
    }

    #[test]
    fn build_keeps_database_and_base_url() {
        let store = NotionAdapterBuilder::new()
            .with_token("t")
            .with_database_id("db")
            .with_base_url("http://127.0.0.1:9/v1/")
            .build()
            .unwrap();

        assert_eq!(store.database_id(), "db");
        assert_eq!(store.client.base_url(), "http://127.0.0.1:9/v1");
    }
}
