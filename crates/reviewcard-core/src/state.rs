//! The card form's view state.

use serde::{Deserialize, Serialize};

use crate::language::Strings;
use crate::qr::QrMatrix;
use crate::theme::Theme;
use crate::validate::is_valid_destination;

/// Inline problem shown under the URL field.
///
/// Stored as a kind rather than text so it re-localizes when the
/// language changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrlError {
    /// The entered text is not an `http`/`https` URL.
    Invalid,
    /// An export was attempted without a valid URL.
    RequiredForExport,
    /// The URL is valid but too long to encode.
    TooLong,
}

impl UrlError {
    /// Localized message for this problem.
    #[must_use]
    pub const fn message(self, strings: &Strings) -> &'static str {
        match self {
            Self::Invalid => strings.url_error,
            Self::RequiredForExport => strings.url_required,
            Self::TooLong => strings.url_too_long,
        }
    }
}

/// Everything the user has entered into the card form.
///
/// Fields other than `url` are public and free-form.  `url` goes
/// through [`set_url`](Self::set_url) so the derived error stays in
/// sync with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    pub title: String,
    url: String,
    pub extra_text: String,
    pub show_nfc: bool,
    pub dark_mode: bool,
    url_error: Option<UrlError>,
}

impl CardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The destination exactly as typed.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replace the destination and re-derive the inline error.
    ///
    /// Empty input clears the error; non-empty invalid input sets
    /// [`UrlError::Invalid`]; a valid URL that does not fit a QR glyph
    /// sets [`UrlError::TooLong`].
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        self.url_error = if self.url.is_empty() {
            None
        } else if !is_valid_destination(&self.url) {
            Some(UrlError::Invalid)
        } else if QrMatrix::encode(&self.url).is_err() {
            Some(UrlError::TooLong)
        } else {
            None
        };
    }

    /// The current inline URL problem, if any.
    #[must_use]
    pub const fn url_error(&self) -> Option<UrlError> {
        self.url_error
    }

    /// Record a problem discovered outside of typing (export gate).
    pub const fn flag_url_error(&mut self, error: UrlError) {
        self.url_error = Some(error);
    }

    /// Whether the current destination passes validation.
    #[must_use]
    pub fn has_valid_url(&self) -> bool {
        is_valid_destination(&self.url)
    }

    /// Whether an export may be offered: the destination validates and
    /// nothing is flagged against it.
    #[must_use]
    pub fn is_exportable(&self) -> bool {
        self.has_valid_url() && self.url_error.is_none()
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }
}
