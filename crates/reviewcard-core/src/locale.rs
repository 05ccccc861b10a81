//! Best-effort locale guessing from an IP-geolocation lookup.
//!
//! The network call itself lives in `reviewcard-io`; this module owns
//! the response format, the country-to-language mapping, and the
//! [`LocaleDetector`] capability the view layer depends on.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Country codes whose visitors get the German interface.
pub const GERMAN_SPEAKING_COUNTRIES: &[&str] = &["DE", "AT", "CH"];

/// Where and how long to look up the visitor's country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoConfig {
    /// JSON endpoint returning an object with a `country_code` field.
    pub endpoint: String,
    /// Give up after this many milliseconds.
    pub timeout_ms: u32,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("https://ipapi.co/json/"),
            timeout_ms: 3_000,
        }
    }
}

/// Errors from interpreting a geolocation response body.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// The body is not a JSON object of the expected shape.
    #[error("malformed geolocation response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The part of the geolocation response we care about.
///
/// The service returns many more fields; they are ignored.  An error
/// payload (e.g. rate limiting) has no `country_code`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeoResponse {
    #[serde(default)]
    pub country_code: Option<String>,
}

/// Map a country code to the interface language it implies.
///
/// Codes are matched exactly as the service reports them (uppercase
/// ISO 3166-1 alpha-2).  `None` means "no opinion": keep whatever
/// language is active.
#[must_use]
pub fn language_for_country(country_code: &str) -> Option<Language> {
    GERMAN_SPEAKING_COUNTRIES
        .contains(&country_code)
        .then_some(Language::De)
}

/// Parse a geolocation response body and derive a language guess.
///
/// # Errors
///
/// Returns [`LocaleError::Malformed`] if the body is not a JSON object
/// (a missing `country_code` is not an error; it yields `Ok(None)`).
pub fn guess_from_response(body: &str) -> Result<Option<Language>, LocaleError> {
    let response: GeoResponse = serde_json::from_str(body)?;
    Ok(response
        .country_code
        .as_deref()
        .and_then(language_for_country))
}

/// Capability to guess the visitor's language.
///
/// Implementations must never fail loudly: any error collapses to
/// `None` after being logged.
pub trait LocaleDetector {
    /// Resolve to a language guess, or `None` when unavailable.
    fn detect_locale(&self) -> impl Future<Output = Option<Language>>;
}
