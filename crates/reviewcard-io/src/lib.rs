//! reviewcard-io: Browser I/O and Dioxus component library.
//!
//! Handles Blob downloads, rasterizing the card preview, the
//! IP-geolocation locale lookup, and provides the form, preview,
//! export, and language components for the reviewcard web page.

pub mod components;
pub mod download;
pub mod geolocate;
pub mod snapshot;

pub use components::{CardForm, CardPreview, ExportButton, LanguageSwitch};
pub use geolocate::IpLocaleDetector;
