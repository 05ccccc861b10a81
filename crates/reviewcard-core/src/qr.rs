//! QR glyph encoding.
//!
//! Wraps the [`qrcode`] encoder and exposes the module matrix as a
//! plain boolean grid so serializers do not depend on `qrcode` types.

use qrcode::{Color, EcLevel, QrCode};
use serde::{Deserialize, Serialize};

/// Rendering parameters for the QR glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrSettings {
    /// Edge length of the glyph (including quiet zone) in CSS pixels.
    pub size_px: u32,
    /// Quiet-zone width in modules on each side.
    pub quiet_zone: u32,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self {
            size_px: 160,
            quiet_zone: 4,
        }
    }
}

/// Errors from encoding a destination into a QR glyph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrError {
    /// The data does not fit even the largest QR version at level H.
    #[error("data too long for a QR code at error-correction level H")]
    DataTooLong,

    /// Any other encoder failure.
    #[error("QR encoding failed: {0}")]
    Encode(String),
}

impl From<qrcode::types::QrError> for QrError {
    fn from(err: qrcode::types::QrError) -> Self {
        match err {
            qrcode::types::QrError::DataTooLong => Self::DataTooLong,
            other => Self::Encode(other.to_string()),
        }
    }
}

/// Square grid of QR modules, `true` = dark.  Excludes the quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Encode `data` at error-correction level H.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::DataTooLong`] when `data` exceeds the capacity
    /// of a version-40 symbol at level H.
    pub fn encode(data: &str) -> Result<Self, QrError> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)?;
        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        Ok(Self { width, modules })
    }

    /// Number of modules along one edge.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at column `x`, row `y` is dark.
    ///
    /// Out-of-range coordinates read as light.
    #[must_use]
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// Iterate `(x, y)` of every dark module in row-major order.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(move |(i, _)| (i % width, i / width))
    }
}
