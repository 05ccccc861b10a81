//! Export gating and request bookkeeping.
//!
//! The actual snapshot is asynchronous and browser-specific.  This
//! module decides whether an export may start, freezes what it should
//! capture, and classifies how it ended.
//!
//! A newer request supersedes an older one (cancel-and-restart): each
//! [`begin`](ExportCoordinator::begin) bumps a generation counter, and
//! a completion carrying a stale generation is reported as
//! [`ExportOutcome::Superseded`] so its artifact is dropped.

use serde::{Deserialize, Serialize};

use crate::language::Strings;
use crate::preview::{Preview, render};
use crate::qr::{QrError, QrSettings};
use crate::state::{CardState, UrlError};
use crate::theme::Rgb;

/// Where and how large the exported image is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Raster upscale factor relative to on-screen CSS pixels.
    pub scale: u32,
    /// Download filename.
    pub filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            scale: 2,
            filename: String::from("google-review-qr.png"),
        }
    }
}

/// Why an export was refused before any snapshot was attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportRejected {
    /// The entered URL is empty or not an `http`/`https` URL.
    #[error("no valid destination URL")]
    InvalidDestination,

    /// The URL is valid but cannot be encoded into a QR glyph.
    #[error("destination cannot be encoded: {0}")]
    Unencodable(QrError),
}

/// A frozen export job.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub generation: u64,
    /// What to capture, as rendered at the moment of the request.
    pub preview: Preview,
    pub scale: u32,
    pub filename: String,
}

impl ExportRequest {
    /// Fill colour behind the snapshot: the active theme's card colour.
    #[must_use]
    pub const fn background(&self) -> Rgb {
        self.preview.palette.card_bg
    }

    /// Output raster size in device pixels.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_size(&self) -> (u32, u32) {
        #[expect(clippy::cast_precision_loss)]
        let scale = self.scale as f32;
        let layout = &self.preview.layout;
        (
            (layout.width * scale).ceil() as u32,
            (layout.height * scale).ceil() as u32,
        )
    }
}

/// How an export request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome<T, E> {
    /// The snapshot succeeded and is the newest request.
    Completed(T),
    /// The snapshot failed; the error is for logging only.
    Failed(E),
    /// A newer request was started while this one was in flight.
    Superseded,
}

/// Tracks export generations for one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportCoordinator {
    generation: u64,
    pending: Option<u64>,
}

impl ExportCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `state` and, if allowed, open a new export generation.
    ///
    /// The URL is re-validated here regardless of whether the UI had
    /// the export control enabled.  On refusal the matching inline
    /// error is recorded on `state` and no generation is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ExportRejected::InvalidDestination`] when the URL does
    /// not validate, and [`ExportRejected::Unencodable`] when it is too
    /// long for a QR glyph.
    pub fn begin(
        &mut self,
        state: &mut CardState,
        strings: &Strings,
        qr_settings: QrSettings,
        settings: &ExportSettings,
    ) -> Result<ExportRequest, ExportRejected> {
        if !state.has_valid_url() {
            state.flag_url_error(UrlError::RequiredForExport);
            return Err(ExportRejected::InvalidDestination);
        }

        let preview = render(state, strings, qr_settings);
        if let Err(err) = &preview.qr.matrix {
            state.flag_url_error(UrlError::TooLong);
            return Err(ExportRejected::Unencodable(err.clone()));
        }

        self.generation += 1;
        self.pending = Some(self.generation);
        Ok(ExportRequest {
            generation: self.generation,
            preview,
            scale: settings.scale,
            filename: settings.filename.clone(),
        })
    }

    /// Whether `generation` is still the newest request.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Whether the newest request has not finished yet.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Classify the completion of request `generation`.
    pub fn finish<T, E>(&mut self, generation: u64, result: Result<T, E>) -> ExportOutcome<T, E> {
        if !self.is_current(generation) {
            return ExportOutcome::Superseded;
        }
        self.pending = None;
        match result {
            Ok(artifact) => ExportOutcome::Completed(artifact),
            Err(err) => ExportOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::language::EN;
    use crate::theme::{DARK, LIGHT};

    fn begin(
        coordinator: &mut ExportCoordinator,
        state: &mut CardState,
    ) -> Result<ExportRequest, ExportRejected> {
        coordinator.begin(state, &EN, QrSettings::default(), &ExportSettings::default())
    }

    fn valid_state() -> CardState {
        let mut state = CardState::new();
        state.set_url("https://example.com");
        state
    }

    #[test]
    fn invalid_url_is_rejected_and_flagged() {
        let mut coordinator = ExportCoordinator::new();
        let mut state = CardState::new();
        state.set_url("example");

        assert_eq!(
            begin(&mut coordinator, &mut state),
            Err(ExportRejected::InvalidDestination)
        );
        assert_eq!(state.url_error(), Some(UrlError::RequiredForExport));
        assert!(!coordinator.is_pending());
    }

    #[test]
    fn empty_url_is_rejected() {
        let mut coordinator = ExportCoordinator::new();
        let mut state = CardState::new();
        assert!(begin(&mut coordinator, &mut state).is_err());
        assert_eq!(state.url_error(), Some(UrlError::RequiredForExport));
    }

    #[test]
    fn overlong_url_is_rejected_as_unencodable() {
        let mut coordinator = ExportCoordinator::new();
        let mut state = CardState::new();
        state.set_url(format!("https://example.com/{}", "a".repeat(4_000)));
        assert_eq!(
            begin(&mut coordinator, &mut state),
            Err(ExportRejected::Unencodable(QrError::DataTooLong))
        );
        assert_eq!(state.url_error(), Some(UrlError::TooLong));
    }

    #[test]
    fn valid_url_produces_request() {
        let mut coordinator = ExportCoordinator::new();
        let mut state = valid_state();
        let request = begin(&mut coordinator, &mut state).unwrap();
        assert_eq!(request.filename, "google-review-qr.png");
        assert_eq!(request.scale, 2);
        assert_eq!(request.preview.qr.target, "https://example.com");
        assert_eq!(request.pixel_size(), (768, 816));
        assert!(coordinator.is_pending());
    }

    #[test]
    fn background_follows_theme() {
        let mut coordinator = ExportCoordinator::new();
        let mut state = valid_state();
        let light = begin(&mut coordinator, &mut state).unwrap();
        assert_eq!(light.background(), LIGHT.card_bg);

        state.dark_mode = true;
        let dark = begin(&mut coordinator, &mut state).unwrap();
        assert_eq!(dark.background(), DARK.card_bg);
    }

    #[test]
    fn single_request_completes() {
        let mut coordinator = ExportCoordinator::new();
        let mut state = valid_state();
        let request = begin(&mut coordinator, &mut state).unwrap();
        let outcome = coordinator.finish::<_, ()>(request.generation, Ok("png"));
        assert_eq!(outcome, ExportOutcome::Completed("png"));
        assert!(!coordinator.is_pending());
    }

    #[test]
    fn newer_request_supersedes_older() {
        let mut coordinator = ExportCoordinator::new();
        let mut state = valid_state();
        let first = begin(&mut coordinator, &mut state).unwrap();
        let second = begin(&mut coordinator, &mut state).unwrap();

        assert_eq!(
            coordinator.finish::<_, ()>(first.generation, Ok("old")),
            ExportOutcome::Superseded
        );
        assert!(coordinator.is_pending());
        assert_eq!(
            coordinator.finish::<_, ()>(second.generation, Ok("new")),
            ExportOutcome::Completed("new")
        );
    }

    #[test]
    fn failure_is_reported_and_retry_allowed() {
        let mut coordinator = ExportCoordinator::new();
        let mut state = valid_state();
        let request = begin(&mut coordinator, &mut state).unwrap();
        assert_eq!(
            coordinator.finish::<(), _>(request.generation, Err("tainted")),
            ExportOutcome::Failed("tainted")
        );
        assert!(begin(&mut coordinator, &mut state).is_ok());
    }

    #[test]
    fn rejection_does_not_supersede_in_flight_request() {
        let mut coordinator = ExportCoordinator::new();
        let mut state = valid_state();
        let request = begin(&mut coordinator, &mut state).unwrap();

        state.set_url("oops");
        assert!(begin(&mut coordinator, &mut state).is_err());
        assert!(coordinator.is_current(request.generation));
    }
}
