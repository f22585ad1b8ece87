//! The outbound draft record and what a store reports back.
use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything a store needs to persist one generated draft.
///
/// Built once per run and handed to [`crate::provider::RecordStore::create_record`].
/// Splitting `body` into store-sized blocks is the store's job.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRecord {
    pub title: String,
    pub date: NaiveDate,
    pub body: String,
    pub hashtags: String,
    pub image_url: String,
    /// Also embed `image_url` as an image block in the record body.
    pub embed_image: bool,
    pub status: DraftStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftStatus {
    #[default]
    Draft,
}

impl DraftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStatus::Draft => "Draft",
        }
    }
}

impl Display for DraftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of counting existing records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordCount {
    /// Records actually returned by the store.
    pub returned: usize,
    /// The store holds more records than it returned.
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRecord {
    pub id: String,
    pub url: Option<String>,
}
