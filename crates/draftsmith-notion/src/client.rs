use std::time::Duration;

use draftsmith_core::sanitize::{Destination, encode};
use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    api_v1::{CreatePageRequest, PageResponse, QueryDatabaseRequest, QueryDatabaseResponse},
    error::NotionError,
};

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const NOTION_VERSION: &str = "2022-06-28";

/// Minimal HTTP client for the two Notion endpoints draftsmith uses.
///
/// Shares a single `reqwest::Client`, so cloning `NotionClient` is cheap.
#[derive(Clone)]
pub struct NotionClient {
    token: String,
    http: HttpClient,
    base: String,
}

impl NotionClient {
    /// Build around an existing `reqwest::Client`, which carries the timeout.
    pub fn with_http(token: impl Into<String>, http: HttpClient, base_url: Option<String>) -> Self {
        Self {
            token: token.into(),
            http,
            base: base_url
                .map(|base| base.trim_end_matches('/').to_owned())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// `POST /databases/{id}/query`.
    pub async fn query_database(
        &self,
        database_id: &str,
        request: &QueryDatabaseRequest,
    ) -> Result<QueryDatabaseResponse, NotionError> {
        let url = format!(
            "{}/databases/{}/query",
            self.base,
            encode(Destination::UrlPathSegment, database_id)
        );
        self.post_json(url, request).await
    }

    /// `POST /pages`.
    pub async fn create_page(
        &self,
        request: &CreatePageRequest,
    ) -> Result<PageResponse, NotionError> {
        let url = format!("{}/pages", self.base);
        self.post_json(url, request).await
    }

    fn headers(&self) -> Result<HeaderMap, NotionError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("notion-version"),
            HeaderValue::from_static(NOTION_VERSION),
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|_| NotionError::InvalidToken)?,
        );
        Ok(headers)
    }

    async fn post_json<B, R>(&self, url: String, body: &B) -> Result<R, NotionError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        tracing::debug!(%url, "notion request");

        let resp = self
            .http
            .post(url)
            .headers(self.headers()?)
            .json(body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(NotionError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_version_and_bearer_token() {
        let client = NotionClient::with_http("secret_abc", HttpClient::new(), None);

        let headers = client.headers().unwrap();

        assert_eq!(headers["notion-version"], NOTION_VERSION);
        assert_eq!(headers[AUTHORIZATION], "Bearer secret_abc");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn tokens_with_newlines_are_rejected() {
        let client = NotionClient::with_http("secret\nabc", HttpClient::new(), None);

        assert!(matches!(client.headers(), Err(NotionError::InvalidToken)));
    }
}
