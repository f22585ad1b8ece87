//! Assembly of the outbound record.
use chrono::NaiveDate;
use draftsmith_core::record::{DraftRecord, DraftStatus};
use draftsmith_types::posts::Selection;

use crate::{image::ImageRef, profile::Profile};

/// Page title for `selection`: the topic, prefixed with the day for a series.
pub fn record_title(selection: &Selection) -> String {
    match selection.sequence {
        Some(sequence) => format!("Day {}: {}", sequence.number, selection.topic),
        None => selection.topic.clone(),
    }
}

pub fn build_record(
    profile: Profile,
    selection: &Selection,
    text: String,
    image: &ImageRef,
    today: NaiveDate,
) -> DraftRecord {
    DraftRecord {
        title: record_title(selection),
        date: today,
        body: text,
        hashtags: profile.hashtags().to_owned(),
        image_url: image.url.clone(),
        embed_image: image.embed,
        status: DraftStatus::Draft,
    }
}

#[cfg(test)]
mod tests {
    use draftsmith_types::catalog::{BLOG_HASHTAGS, SERIES_HASHTAGS};

    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn blog_record_carries_the_topic_as_title() {
        let selection = Selection::categorized("Idempotency keys", "Microservices/Backend");
        let image = ImageRef {
            url: "https://img.example/badge".into(),
            embed: false,
        };

        let record = build_record(Profile::Blog, &selection, "body".into(), &image, date());

        assert_eq!(record.title, "Idempotency keys");
        assert_eq!(record.date, date());
        assert_eq!(record.body, "body");
        assert_eq!(record.hashtags, BLOG_HASHTAGS);
        assert_eq!(record.image_url, "https://img.example/badge");
        assert!(!record.embed_image);
        assert_eq!(record.status, DraftStatus::Draft);
    }

    #[test]
    fn series_title_is_prefixed_with_the_day() {
        let selection = Selection::sequenced("SQS standard vs FIFO queues", 15, 30);
        let image = ImageRef {
            url: "u".into(),
            embed: false,
        };

        let record = build_record(Profile::Series, &selection, String::new(), &image, date());

        assert_eq!(record.title, "Day 15: SQS standard vs FIFO queues");
        assert_eq!(record.hashtags, SERIES_HASHTAGS);
    }

    #[test]
    fn embed_flag_follows_the_image() {
        let selection = Selection::categorized("t", "c");
        let image = ImageRef {
            url: "u".into(),
            embed: true,
        };

        let record = build_record(Profile::DeepDive, &selection, String::new(), &image, date());

        assert!(record.embed_image);
    }
}
