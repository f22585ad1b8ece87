use serde::{Deserialize, Serialize, de::IgnoredAny};

/// Largest page Notion returns for a database query.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Serialize, Clone)]
pub struct QueryDatabaseRequest {
    pub page_size: u32,
}

impl Default for QueryDatabaseRequest {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryDatabaseResponse {
    /// Only the number of pages matters.
    pub results: Vec<IgnoredAny>,
    #[serde(default)]
    pub has_more: bool,
}
