use chrono::NaiveDate;
use draftsmith_core::record::DraftRecord;
use serde::{Deserialize, Serialize};

use super::{Block, RichText, rich_text_blocks};

/// Body of `POST /pages` for a draft.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: DraftProperties,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

impl CreatePageRequest {
    /// Map a draft onto the database schema: `Topic`, `Date`, `Post`,
    /// `Hashtags`, `Image` and `Status`.
    pub fn for_draft(database_id: impl Into<String>, record: &DraftRecord) -> Self {
        let children = if record.embed_image {
            vec![Block::external_image(&record.image_url)]
        } else {
            Vec::new()
        };

        Self {
            parent: Parent {
                database_id: database_id.into(),
            },
            properties: DraftProperties {
                topic: TitleProperty {
                    title: rich_text_blocks(&record.title),
                },
                date: DateProperty {
                    date: DateValue { start: record.date },
                },
                post: RichTextProperty {
                    rich_text: rich_text_blocks(&record.body),
                },
                hashtags: RichTextProperty {
                    rich_text: rich_text_blocks(&record.hashtags),
                },
                image: UrlProperty {
                    url: record.image_url.clone(),
                },
                status: SelectProperty {
                    select: SelectOption {
                        name: record.status.as_str().to_owned(),
                    },
                },
            },
            children,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Parent {
    pub database_id: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DraftProperties {
    #[serde(rename = "Topic")]
    pub topic: TitleProperty,
    #[serde(rename = "Date")]
    pub date: DateProperty,
    #[serde(rename = "Post")]
    pub post: RichTextProperty,
    #[serde(rename = "Hashtags")]
    pub hashtags: RichTextProperty,
    #[serde(rename = "Image")]
    pub image: UrlProperty,
    #[serde(rename = "Status")]
    pub status: SelectProperty,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TitleProperty {
    pub title: Vec<RichText>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RichTextProperty {
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct DateProperty {
    pub date: DateValue,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct DateValue {
    pub start: NaiveDate,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct UrlProperty {
    pub url: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SelectProperty {
    pub select: SelectOption,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub name: String,
}

/// The fields of a created page we care about.
#[derive(Debug, Deserialize, Clone)]
pub struct PageResponse {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use draftsmith_core::record::DraftStatus;
    use serde_json::json;

    use super::*;

    fn record(body: String, embed_image: bool) -> DraftRecord {
        DraftRecord {
            title: "Docker build layers: why your image is huge".into(),
            date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            body,
            hashtags: "#AWS #DevOps".into(),
            image_url: "https://img.shields.io/badge/DevOps%2FInfra-Tech-20BF6B".into(),
            embed_image,
            status: DraftStatus::Draft,
        }
    }

    #[test]
    fn payload_matches_the_database_schema() {
        let request = CreatePageRequest::for_draft("db-1", &record("Short post.".into(), false));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "parent": {"database_id": "db-1"},
                "properties": {
                    "Topic": {"title": [{"text": {"content": "Docker build layers: why your image is huge"}}]},
                    "Date": {"date": {"start": "2026-10-18"}},
                    "Post": {"rich_text": [{"text": {"content": "Short post."}}]},
                    "Hashtags": {"rich_text": [{"text": {"content": "#AWS #DevOps"}}]},
                    "Image": {"url": "https://img.shields.io/badge/DevOps%2FInfra-Tech-20BF6B"},
                    "Status": {"select": {"name": "Draft"}}
                }
            })
        );
    }

    #[test]
    fn long_posts_are_split_across_rich_text_objects() {
        let body = "word ".repeat(800);
        let request = CreatePageRequest::for_draft("db-1", &record(body.clone(), false));

        let parts = &request.properties.post.rich_text;
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|part| part.text.content.chars().count() <= 1900));
        assert_eq!(
            parts
                .iter()
                .map(|part| part.text.content.as_str())
                .collect::<String>(),
            body
        );
    }

    #[test]
    fn embedded_image_becomes_a_child_block() {
        let request = CreatePageRequest::for_draft("db-1", &record("Body".into(), true));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value["children"],
            json!([{
                "object": "block",
                "type": "image",
                "image": {
                    "type": "external",
                    "external": {"url": "https://img.shields.io/badge/DevOps%2FInfra-Tech-20BF6B"}
                }
            }])
        );
    }
}
