//! Light and dark card palettes.
//!
//! Switching theme is a pure selection between two constant palettes;
//! nothing else changes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Self = Self([0xFF, 0xFF, 0xFF]);
    pub const BLACK: Self = Self([0x00, 0x00, 0x00]);

    /// Build a colour from a `0xRRGGBB` literal.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn hex(value: u32) -> Self {
        Self([(value >> 16) as u8, (value >> 8) as u8, value as u8])
    }
}

impl fmt::Display for Rgb {
    /// Formats as a CSS hex colour, e.g. `#111827`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

/// Which palette is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn from_dark_mode(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The colours for this theme.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

/// Every theme-dependent colour of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Card fill, also the export background fill.
    pub card_bg: Rgb,
    /// Card outline.
    pub card_border: Rgb,
    /// Title, extra text and call-to-action text.
    pub text: Rgb,
    /// Dark modules of the QR glyph.
    pub qr_fg: Rgb,
    /// Light modules and quiet zone of the QR glyph.
    pub qr_bg: Rgb,
    /// NFC icon tint (inverted in the dark theme).
    pub nfc_tint: Rgb,
    /// Page background behind the card.
    pub page_bg: Rgb,
    /// Page text colour.
    pub page_text: Rgb,
}

const GRAY_900: Rgb = Rgb::hex(0x11_18_27);

pub const LIGHT: Palette = Palette {
    card_bg: Rgb::WHITE,
    card_border: Rgb::hex(0xE5_E7_EB),
    text: Rgb::BLACK,
    qr_fg: Rgb::BLACK,
    qr_bg: Rgb::WHITE,
    nfc_tint: Rgb::BLACK,
    page_bg: Rgb::WHITE,
    page_text: GRAY_900,
};

pub const DARK: Palette = Palette {
    card_bg: GRAY_900,
    card_border: Rgb::WHITE,
    text: Rgb::WHITE,
    qr_fg: Rgb::WHITE,
    qr_bg: GRAY_900,
    nfc_tint: Rgb::WHITE,
    page_bg: GRAY_900,
    page_text: Rgb::WHITE,
};

/// Rating star fill, identical in both themes.
pub const STAR_COLOR: Rgb = Rgb::hex(0xFB_BF_24);

/// Brand gradient stops framing the QR glyph: `(offset 0..=1, colour)`.
pub const FRAME_GRADIENT: [(f32, Rgb); 4] = [
    (0.0, Rgb::hex(0x42_85_F4)),
    (0.33, Rgb::hex(0xDB_44_37)),
    (0.66, Rgb::hex(0xF4_B4_00)),
    (1.0, Rgb::hex(0x0F_9D_58)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literal_round_trips_to_css() {
        assert_eq!(Rgb::hex(0x11_18_27).to_string(), "#111827");
        assert_eq!(Rgb::WHITE.to_string(), "#FFFFFF");
    }

    #[test]
    fn dark_swaps_qr_colours() {
        assert_eq!((LIGHT.qr_fg, LIGHT.qr_bg), (Rgb::BLACK, Rgb::WHITE));
        assert_eq!(DARK.qr_fg, Rgb::WHITE);
        assert_eq!(DARK.qr_bg, Rgb::hex(0x11_18_27));
    }

    #[test]
    fn nfc_tint_is_inverted_in_dark() {
        let [r, g, b] = LIGHT.nfc_tint.0;
        assert_eq!(DARK.nfc_tint.0, [255 - r, 255 - g, 255 - b]);
    }

    #[test]
    fn toggling_twice_is_identity() {
        let start = Theme::from_dark_mode(false);
        let toggled = Theme::from_dark_mode(!start.is_dark());
        let back = Theme::from_dark_mode(!toggled.is_dark());
        assert_eq!(back.palette(), start.palette());
        assert_ne!(toggled.palette(), start.palette());
    }
}
