//! Encoding of untrusted text for the place it gets interpolated into.
//!
//! Topic and category strings end up inside URL path segments (badge and
//! image URLs) and inside quoted text of the instruction. Every such
//! interpolation goes through [`encode`].

use std::borrow::Cow;

/// Where an untrusted string is about to be interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// A single path segment of a URL. Everything outside the RFC 3986
    /// unreserved set is percent-encoded, including `/`, `&` and spaces.
    UrlPathSegment,
    /// The inside of a double-quoted JSON string literal.
    JsonString,
}

/// Encode `input` for `destination`. Borrows when nothing needs escaping.
///
/// ```rust
/// use draftsmith_core::sanitize::{encode, Destination};
///
/// assert_eq!(encode(Destination::UrlPathSegment, "Tools & Tips"), "Tools%20%26%20Tips");
/// assert_eq!(encode(Destination::JsonString, r#"say "hi""#), r#"say \"hi\""#);
/// ```
pub fn encode(destination: Destination, input: &str) -> Cow<'_, str> {
    match destination {
        Destination::UrlPathSegment => urlencoding::encode(input),
        Destination::JsonString => {
            if !input
                .chars()
                .any(|c| c == '"' || c == '\\' || c.is_control())
            {
                return Cow::Borrowed(input);
            }
            let quoted = serde_json::Value::from(input).to_string();
            Cow::Owned(quoted[1..quoted.len() - 1].to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_encodes_reserved_characters() {
        assert_eq!(encode(Destination::UrlPathSegment, "AWS/Cloud"), "AWS%2FCloud");
        assert_eq!(
            encode(Destination::UrlPathSegment, "Tools & Tips"),
            "Tools%20%26%20Tips"
        );
        assert_eq!(
            encode(Destination::UrlPathSegment, "a?b#c"),
            "a%3Fb%23c"
        );
    }

    #[test]
    fn path_segment_borrows_plain_text() {
        assert!(matches!(
            encode(Destination::UrlPathSegment, "DevOps"),
            Cow::Borrowed("DevOps")
        ));
    }

    #[test]
    fn json_string_escapes_quotes_and_control_characters() {
        assert_eq!(
            encode(Destination::JsonString, "line\nbreak \"quoted\" back\\slash"),
            "line\\nbreak \\\"quoted\\\" back\\\\slash"
        );
    }

    #[test]
    fn json_string_leaves_unicode_alone() {
        let input = "Retries vs timeouts — naïve ✓";
        assert!(matches!(
            encode(Destination::JsonString, input),
            Cow::Borrowed(s) if s == input
        ));
    }
}
