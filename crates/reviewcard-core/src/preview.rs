//! Preview renderer: a pure projection of card state onto a visual tree.
//!
//! [`render`] decides *what* the card shows (texts, glyph target,
//! colours, optional blocks) and *where* (via [`CardLayout`]).  The
//! result is consumed both by the live preview and by the exporter, so
//! what is exported is exactly what is shown.

use crate::layout::CardLayout;
use crate::language::Strings;
use crate::qr::{QrError, QrMatrix, QrSettings};
use crate::state::CardState;
use crate::theme::{Palette, Theme};
use crate::validate::{PLACEHOLDER_DESTINATION, is_valid_destination};

/// The scannable glyph and what it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrGlyph {
    /// The destination encoded: the entered URL when valid, otherwise
    /// [`PLACEHOLDER_DESTINATION`].
    pub target: String,
    /// Module matrix, or why `target` could not be encoded.
    pub matrix: Result<QrMatrix, QrError>,
    /// Glyph parameters (size, quiet zone).
    pub settings: QrSettings,
}

/// Everything needed to draw the card.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub theme: Theme,
    pub palette: Palette,
    /// Title as displayed (localized default when none entered).
    pub title: String,
    pub qr: QrGlyph,
    /// Extra text line, only when non-empty.
    pub extra_text: Option<String>,
    /// Whether the NFC icon is drawn.
    pub show_nfc: bool,
    pub tap_label: &'static str,
    pub scan_label: &'static str,
    pub layout: CardLayout,
}

/// Destination the glyph encodes for a given entered URL.
#[must_use]
pub fn qr_target(url: &str) -> &str {
    if is_valid_destination(url) {
        url
    } else {
        PLACEHOLDER_DESTINATION
    }
}

/// Project `state` onto a [`Preview`] using the given translations.
#[must_use]
pub fn render(state: &CardState, strings: &Strings, qr_settings: QrSettings) -> Preview {
    let theme = state.theme();
    let title = if state.title.is_empty() {
        strings.default_title.to_owned()
    } else {
        state.title.clone()
    };
    let extra_text = (!state.extra_text.is_empty()).then(|| state.extra_text.clone());

    let target = qr_target(state.url()).to_owned();
    let matrix = QrMatrix::encode(&target);

    #[expect(clippy::cast_precision_loss)]
    let glyph_px = qr_settings.size_px as f32;
    let layout = CardLayout::compute(
        glyph_px,
        &title,
        extra_text.as_deref(),
        state.show_nfc,
        strings.tap_phone,
        strings.scan_qr,
    );

    Preview {
        theme,
        palette: theme.palette(),
        title,
        qr: QrGlyph {
            target,
            matrix,
            settings: qr_settings,
        },
        extra_text,
        show_nfc: state.show_nfc,
        tap_label: strings.tap_phone,
        scan_label: strings.scan_qr,
        layout,
    }
}
