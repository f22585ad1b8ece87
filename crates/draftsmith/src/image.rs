//! Badge and illustration URLs attached to a draft.
use draftsmith_core::sanitize::{Destination, encode};
use draftsmith_types::{
    catalog::{
        BADGE_COLORS, FALLBACK_BADGE_COLOR, FALLBACK_SERVICE_LABEL, SERIES_BADGE_COLOR,
        SERIES_SERVICES,
    },
    posts::Selection,
};

use crate::profile::Profile;

/// Image attached to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    /// Also embed the image in the page body.
    pub embed: bool,
}

/// Badge color for `category`, hex without `#`.
pub fn badge_color(category: &str) -> &'static str {
    BADGE_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_BADGE_COLOR)
}

pub fn category_badge_url(category: &str) -> String {
    format!(
        "https://img.shields.io/badge/{}-Tech-{}?style=for-the-badge&logo=github&logoColor=white",
        encode(Destination::UrlPathSegment, category),
        badge_color(category)
    )
}

/// Service named on the badge for day `number` (1-based).
pub fn service_label(number: usize) -> &'static str {
    number
        .checked_sub(1)
        .and_then(|index| SERIES_SERVICES.get(index))
        .copied()
        .unwrap_or(FALLBACK_SERVICE_LABEL)
}

pub fn service_badge_url(number: usize) -> String {
    let day = format!("Day {number}");

    format!(
        "https://img.shields.io/badge/{}-{}-{SERIES_BADGE_COLOR}?style=for-the-badge&logo=amazonaws&logoColor=white",
        encode(Destination::UrlPathSegment, &day),
        encode(Destination::UrlPathSegment, service_label(number)),
    )
}

/// Generated illustration for `topic`.
pub fn generated_image_url(topic: &str) -> String {
    format!(
        "https://image.pollinations.ai/prompt/{}?width=1200&height=627&nologo=true",
        encode(Destination::UrlPathSegment, topic)
    )
}

/// The image a `profile` attaches for `selection`.
pub fn for_selection(profile: Profile, selection: &Selection) -> ImageRef {
    match profile {
        Profile::Blog => ImageRef {
            url: category_badge_url(selection.category.as_deref().unwrap_or_default()),
            embed: false,
        },
        Profile::Series => ImageRef {
            url: service_badge_url(selection.sequence.map_or(0, |sequence| sequence.number)),
            embed: false,
        },
        Profile::DeepDive => ImageRef {
            url: generated_image_url(&selection.topic),
            embed: true,
        },
    }
}
