//! reviewcard-export: Pure card serializers (sans-IO)
//!
//! Converts a rendered preview into SVG markup, and a rasterized
//! snapshot of that markup into a theme-flattened PNG.

pub mod png;
pub mod svg;

pub use png::{PNG_MIME, PngError, encode_png, flatten_onto, snapshot_to_png};
pub use svg::to_svg;
