//! Destination URL validation.
//!
//! A destination is the URL the QR glyph encodes.  Only absolute
//! `http` / `https` URLs are accepted.  Parsing follows the WHATWG URL
//! standard (via the [`url`] crate), which is the same algorithm the
//! browser's `URL` constructor uses.
//!
//! The candidate is judged verbatim: no trimming, no scheme guessing.

use url::Url;

/// Fallback destination encoded when the entered URL is not valid.
pub const PLACEHOLDER_DESTINATION: &str = "https://example.com";

/// Why a candidate string was rejected as a destination.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DestinationError {
    /// The candidate is the empty string.
    #[error("destination is empty")]
    Empty,

    /// The candidate does not parse as an absolute URL.
    #[error("destination is not a valid URL: {0}")]
    Malformed(#[from] url::ParseError),

    /// The candidate parses but uses a scheme other than `http`/`https`.
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
}

/// Parse and check a destination candidate.
///
/// # Errors
///
/// Returns [`DestinationError::Empty`] for `""`,
/// [`DestinationError::Malformed`] if URL parsing fails, and
/// [`DestinationError::UnsupportedScheme`] for any scheme other than
/// `http` or `https`.
pub fn validate_destination(candidate: &str) -> Result<Url, DestinationError> {
    if candidate.is_empty() {
        return Err(DestinationError::Empty);
    }
    let url = Url::parse(candidate)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DestinationError::UnsupportedScheme(other.to_owned())),
    }
}

/// Returns `true` iff `candidate` is a non-empty absolute `http`/`https` URL.
#[must_use]
pub fn is_valid_destination(candidate: &str) -> bool {
    validate_destination(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_destination("https://example.com"));
        assert!(is_valid_destination("http://example.com"));
        assert!(is_valid_destination(
            "https://g.page/r/CabcDEF123/review?hl=de"
        ));
        assert!(is_valid_destination("http://localhost:8080/path"));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_valid_destination(""));
        assert_eq!(validate_destination(""), Err(DestinationError::Empty));
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(!is_valid_destination("ftp://example.com"));
        assert!(!is_valid_destination("mailto:owner@example.com"));
        assert!(!is_valid_destination("javascript:alert(1)"));
        assert!(matches!(
            validate_destination("ftp://example.com"),
            Err(DestinationError::UnsupportedScheme(s)) if s == "ftp"
        ));
    }

    #[test]
    fn rejects_relative_and_garbage() {
        assert!(!is_valid_destination("not a url"));
        assert!(!is_valid_destination("example"));
        assert!(!is_valid_destination("example.com"));
        assert!(!is_valid_destination("/relative/path"));
        assert!(!is_valid_destination("https://"));
        assert!(matches!(
            validate_destination("example"),
            Err(DestinationError::Malformed(_))
        ));
    }

    #[test]
    fn scheme_is_case_insensitive_like_the_browser() {
        // WHATWG parsing lowercases the scheme before comparison.
        assert!(is_valid_destination("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn repeated_calls_agree() {
        for candidate in ["", "example", "https://example.com", "ftp://x", "http:"] {
            assert_eq!(
                is_valid_destination(candidate),
                is_valid_destination(candidate),
                "{candidate:?}"
            );
        }
    }

    #[test]
    fn placeholder_is_itself_valid() {
        assert!(is_valid_destination(PLACEHOLDER_DESTINATION));
    }
}
