//! reviewcard-core: Review card model and rendering logic (sans-IO).
//!
//! Turns what the user typed into a card description:
//! destination validation -> card state -> preview (texts, QR glyph,
//! palette, layout) -> export request.
//!
//! This crate has **no browser dependencies** -- it operates on plain
//! strings and returns structured data.  Serialization to SVG/PNG lives
//! in `reviewcard-export`; everything touching the DOM or the network
//! lives in `reviewcard-io`.

pub mod export;
pub mod language;
pub mod layout;
pub mod locale;
pub mod preview;
pub mod qr;
pub mod state;
pub mod theme;
pub mod validate;

pub use export::{ExportCoordinator, ExportOutcome, ExportRejected, ExportRequest, ExportSettings};
pub use language::{Language, LanguageState, Strings};
pub use layout::{CardLayout, Rect};
pub use locale::{
    GeoConfig, LocaleDetector, LocaleError, guess_from_response, language_for_country,
};
pub use preview::{Preview, QrGlyph, qr_target, render};
pub use qr::{QrError, QrMatrix, QrSettings};
pub use state::{CardState, UrlError};
pub use theme::{Palette, Rgb, Theme};
pub use validate::{
    DestinationError, PLACEHOLDER_DESTINATION, is_valid_destination, validate_destination,
};
