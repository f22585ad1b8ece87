//! Post-hoc checks on generated text.
//!
//! Soft bounds and missing markers only warn. A [`WordFloor::Reject`] floor
//! aborts the run before anything is written.
use std::fmt::Display;

use draftsmith_types::posts::{SeriesPostPrompt, Selection};
use tracing::warn;

use crate::{error::RunError, profile::Profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordFloor {
    /// Fewer words only produce a warning.
    Warn(usize),
    /// Fewer words fail with [`RunError::ContentTooShort`].
    Reject(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityRules {
    pub floor: WordFloor,
    pub ceiling: usize,
    /// Literal substrings the post is expected to contain.
    pub markers: Vec<String>,
}

impl QualityRules {
    pub fn for_profile(profile: Profile, selection: &Selection) -> Self {
        match profile {
            Profile::Blog => Self {
                floor: WordFloor::Warn(150),
                ceiling: 400,
                markers: Vec::new(),
            },
            Profile::Series => Self {
                floor: WordFloor::Warn(150),
                ceiling: 350,
                markers: selection
                    .sequence
                    .map(SeriesPostPrompt::day_marker)
                    .into_iter()
                    .collect(),
            },
            Profile::DeepDive => Self {
                floor: WordFloor::Reject(250),
                ceiling: 600,
                markers: vec!["TL;DR".to_owned()],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityWarning {
    Short { words: usize, minimum: usize },
    Long { words: usize, maximum: usize },
    MissingMarker(String),
}

impl Display for QualityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityWarning::Short { words, minimum } => {
                write!(f, "generated post is short ({words} words, expected at least {minimum})")
            }
            QualityWarning::Long { words, maximum } => {
                write!(f, "generated post is long ({words} words, expected at most {maximum})")
            }
            QualityWarning::MissingMarker(marker) => {
                write!(f, "generated post does not contain `{marker}`")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityReport {
    pub words: usize,
    pub warnings: Vec<QualityWarning>,
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Check `text` against `rules`, logging every warning.
///
/// # Errors
///
/// [`RunError::ContentTooShort`] when a [`WordFloor::Reject`] floor is not
/// met.
pub fn check(text: &str, rules: &QualityRules) -> Result<QualityReport, RunError> {
    let words = word_count(text);
    let mut warnings = Vec::new();

    match rules.floor {
        WordFloor::Reject(minimum) if words < minimum => {
            return Err(RunError::ContentTooShort { words, minimum });
        }
        WordFloor::Warn(minimum) if words < minimum => {
            warnings.push(QualityWarning::Short { words, minimum });
        }
        _ => {}
    }

    if words > rules.ceiling {
        warnings.push(QualityWarning::Long {
            words,
            maximum: rules.ceiling,
        });
    }

    warnings.extend(
        rules
            .markers
            .iter()
            .filter(|marker| !text.contains(marker.as_str()))
            .cloned()
            .map(QualityWarning::MissingMarker),
    );

    for warning in &warnings {
        warn!("{warning}");
    }

    Ok(QualityReport { words, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn blog_rules() -> QualityRules {
        QualityRules::for_profile(Profile::Blog, &Selection::categorized("t", "c"))
    }

    #[test]
    fn counts_whitespace_separated_words() {
        assert_eq!(word_count("  one\ttwo\n\nthree  "), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn in_range_post_has_no_warnings() {
        let report = check(&words(250), &blog_rules()).unwrap();

        assert_eq!(report.words, 250);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn soft_bounds_only_warn() {
        let short = check(&words(100), &blog_rules()).unwrap();
        assert_eq!(
            short.warnings,
            vec![QualityWarning::Short {
                words: 100,
                minimum: 150
            }]
        );

        let long = check(&words(401), &blog_rules()).unwrap();
        assert_eq!(
            long.warnings,
            vec![QualityWarning::Long {
                words: 401,
                maximum: 400
            }]
        );
    }

    #[test]
    fn deep_dive_rejects_short_posts() {
        let rules = QualityRules::for_profile(Profile::DeepDive, &Selection::categorized("t", "c"));

        match check(&words(100), &rules) {
            Err(RunError::ContentTooShort { words, minimum }) => {
                assert_eq!(words, 100);
                assert_eq!(minimum, 250);
            }
            other => panic!("expected ContentTooShort, got {other:?}"),
        }
    }

    #[test]
    fn deep_dive_missing_tldr_is_a_warning() {
        let rules = QualityRules::for_profile(Profile::DeepDive, &Selection::categorized("t", "c"));

        let report = check(&words(300), &rules).unwrap();
        assert_eq!(
            report.warnings,
            vec![QualityWarning::MissingMarker("TL;DR".into())]
        );

        let with_marker = format!("TL;DR: keep it short.\n\n{}", words(300));
        assert!(check(&with_marker, &rules).unwrap().warnings.is_empty());
    }

    #[test]
    fn series_expects_its_day_marker() {
        let selection = Selection::sequenced("SQS", 15, 30);
        let rules = QualityRules::for_profile(Profile::Series, &selection);
        assert_eq!(rules.markers, vec!["Day 15/30".to_owned()]);

        let post = format!("Day 15/30: queues. {}", words(200));
        assert!(check(&post, &rules).unwrap().warnings.is_empty());

        let report = check(&words(200), &rules).unwrap();
        assert_eq!(
            report.warnings,
            vec![QualityWarning::MissingMarker("Day 15/30".into())]
        );
    }

    #[test]
    fn later_day_label_does_not_satisfy_an_earlier_day() {
        let selection = Selection::sequenced("IAM", 1, 30);
        let rules = QualityRules::for_profile(Profile::Series, &selection);

        let post = format!("Day 10/30: roles. {}", words(200));
        let report = check(&post, &rules).unwrap();

        assert_eq!(
            report.warnings,
            vec![QualityWarning::MissingMarker("Day 1/30".into())]
        );
    }
}
