//! IP-geolocation lookup for the initial interface language.
//!
//! [`IpLocaleDetector`] fetches the configured endpoint once, races it
//! against a timeout, and maps the reported country to a language via
//! `reviewcard-core`.  Every failure is logged and collapses to `None`;
//! the caller keeps its current language.

use futures_util::future::{Either, select};
use gloo_timers::future::TimeoutFuture;
use reviewcard_core::{GeoConfig, Language, LocaleDetector, LocaleError, guess_from_response};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Errors that can occur while looking up the visitor's country.
#[derive(Debug, thiserror::Error)]
pub enum GeolocateError {
    /// A browser API call (including `fetch`) failed.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The service answered with a non-2xx status.
    #[error("geolocation service returned HTTP {0}")]
    Status(u16),

    /// No answer within the configured timeout.
    #[error("geolocation lookup timed out after {0} ms")]
    Timeout(u32),

    /// The answer could not be interpreted.
    #[error(transparent)]
    Response(#[from] LocaleError),
}

impl From<JsValue> for GeolocateError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Locale detector backed by an IP-geolocation JSON endpoint.
#[derive(Debug, Clone, Default)]
pub struct IpLocaleDetector {
    config: GeoConfig,
}

impl IpLocaleDetector {
    #[must_use]
    pub const fn new(config: GeoConfig) -> Self {
        Self { config }
    }

    /// Look up the visitor's country and derive a language guess.
    ///
    /// # Errors
    ///
    /// Returns [`GeolocateError::Timeout`] if the lookup exceeds
    /// `timeout_ms`, and the other variants for network, HTTP status,
    /// or response format problems.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; fetch futures are !Send
    pub async fn lookup(&self) -> Result<Option<Language>, GeolocateError> {
        let fetch = Box::pin(fetch_text(&self.config.endpoint));
        let timeout = Box::pin(TimeoutFuture::new(self.config.timeout_ms));
        let body = match select(fetch, timeout).await {
            Either::Left((body, _)) => body?,
            Either::Right(((), _)) => return Err(GeolocateError::Timeout(self.config.timeout_ms)),
        };
        Ok(guess_from_response(&body)?)
    }
}

impl LocaleDetector for IpLocaleDetector {
    #[allow(clippy::future_not_send)]
    async fn detect_locale(&self) -> Option<Language> {
        match self.lookup().await {
            Ok(guess) => {
                tracing::info!(?guess, "locale detection finished");
                guess
            }
            Err(e) => {
                tracing::warn!("locale detection failed: {e}");
                None
            }
        }
    }
}

/// `fetch(url)` and return the body as text.
#[allow(clippy::future_not_send)]
async fn fetch_text(url: &str) -> Result<String, GeolocateError> {
    let window =
        web_sys::window().ok_or_else(|| GeolocateError::JsError("no global window".into()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()
        .map_err(|e| GeolocateError::JsError(format!("failed to cast response: {e:?}")))?;
    if !response.ok() {
        return Err(GeolocateError::Status(response.status()));
    }
    JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| GeolocateError::JsError("response body is not text".into()))
}
