//! The three post profiles and what distinguishes them.
use std::{fmt::Display, str::FromStr};

use draftsmith_types::catalog::{BLOG_HASHTAGS, DEEP_DIVE_HASHTAGS, SERIES_HASHTAGS};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Profile {
    /// Random topic, light story-driven post.
    #[default]
    Blog,
    /// Next topic of the fixed daily series.
    Series,
    /// Random topic, long-form post with a hard length floor.
    DeepDive,
}

/// How a profile picks its topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Cursor,
}

impl Profile {
    pub fn name(self) -> &'static str {
        match self {
            Profile::Blog => "blog",
            Profile::Series => "series",
            Profile::DeepDive => "deep-dive",
        }
    }

    pub fn strategy(self) -> Strategy {
        match self {
            Profile::Series => Strategy::Cursor,
            Profile::Blog | Profile::DeepDive => Strategy::Random,
        }
    }

    pub fn hashtags(self) -> &'static str {
        match self {
            Profile::Blog => BLOG_HASHTAGS,
            Profile::Series => SERIES_HASHTAGS,
            Profile::DeepDive => DEEP_DIVE_HASHTAGS,
        }
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown profile `{0}` (expected blog, series or deep-dive)")]
pub struct UnknownProfile(pub String);

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blog" => Ok(Profile::Blog),
            "series" => Ok(Profile::Series),
            "deep-dive" | "deep_dive" | "deepdive" => Ok(Profile::DeepDive),
            _ => Err(UnknownProfile(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for profile in [Profile::Blog, Profile::Series, Profile::DeepDive] {
            assert_eq!(profile.name().parse::<Profile>().unwrap(), profile);
        }
        assert_eq!(" Deep_Dive ".parse::<Profile>().unwrap(), Profile::DeepDive);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "weekly".parse::<Profile>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown profile `weekly` (expected blog, series or deep-dive)"
        );
    }

    #[test]
    fn only_the_series_uses_the_cursor() {
        assert_eq!(Profile::Series.strategy(), Strategy::Cursor);
        assert_eq!(Profile::Blog.strategy(), Strategy::Random);
        assert_eq!(Profile::DeepDive.strategy(), Strategy::Random);
    }
}
