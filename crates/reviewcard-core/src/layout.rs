//! Fixed geometry of the review card.
//!
//! All values are CSS pixels at 1x.  The card is a single column of
//! blocks stacked top to bottom: title, framed QR glyph, rating stars,
//! optional extra text, and the call-to-action row.  The title and
//! extra text wrap at word boundaries to the content width; each
//! wrapped line adds one line height to the card.

/// Card width (Tailwind `max-w-sm`).
pub const CARD_WIDTH: f32 = 384.0;
/// Inner padding on every side (`p-8`).
pub const CARD_PADDING: f32 = 32.0;
/// Corner radius (`rounded-lg`).
pub const CARD_RADIUS: f32 = 8.0;

pub const TITLE_FONT_PX: f32 = 20.0;
/// Line height of the title.
pub const TITLE_LINE: f32 = 28.0;
const TITLE_GAP: f32 = 24.0;

/// Width of the gradient ring around the QR glyph.
pub const FRAME_RING: f32 = 8.0;
/// Distance from the frame's outer edge to the glyph.
const FRAME_INSET: f32 = 24.0;

const STARS_GAP: f32 = 24.0;
pub const STAR_SIZE: f32 = 24.0;
const STAR_SPACING: f32 = 4.0;
/// Number of decorative rating stars.
pub const RATING_STARS: usize = 5;

pub const SMALL_FONT_PX: f32 = 14.0;
/// Line height of extra text and the call-to-action row.
pub const SMALL_LINE: f32 = 20.0;
const EXTRA_GAP: f32 = 12.0;
const CTA_GAP: f32 = 16.0;
/// Horizontal gap between call-to-action items.
pub const CTA_SPACING: f32 = 16.0;

pub const NFC_ICON_SIZE: f32 = 16.0;
const NFC_ICON_GAP: f32 = 8.0;

/// Average advance of a sans-serif glyph as a fraction of font size.
///
/// Used to wrap text blocks and to centre the call-to-action row
/// around the NFC icon; each line is centred by the renderer.
const AVG_GLYPH_ADVANCE: f32 = 0.52;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Shrink by `amount` on every side.
    #[must_use]
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (amount.mul_add(-2.0, self.width)).max(0.0),
            (amount.mul_add(-2.0, self.height)).max(0.0),
        )
    }
}

/// Resolved positions of every block on the card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub width: f32,
    pub height: f32,
    /// Title box, one [`TITLE_LINE`] per wrapped line.
    pub title: Rect,
    /// Title split into lines that fit the content width.
    pub title_lines: Vec<String>,
    /// Outer edge of the gradient frame.
    pub qr_frame: Rect,
    /// The QR glyph itself, quiet zone included.
    pub qr_glyph: Rect,
    pub stars: [Rect; RATING_STARS],
    /// Extra-text box, one [`SMALL_LINE`] per wrapped line, when extra
    /// text is shown.
    pub extra_text: Option<Rect>,
    /// Extra text split into lines; empty when none is shown.
    pub extra_lines: Vec<String>,
    /// Call-to-action line box.
    pub cta: Rect,
    /// Horizontal centre of the call-to-action text run.
    pub cta_text_center_x: f32,
    /// NFC icon box, when the icon is shown.
    pub nfc_icon: Option<Rect>,
}

/// Rough rendered width of `text` at `font_px`.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn approx_text_width(text: &str, font_px: f32) -> f32 {
    text.chars().count() as f32 * font_px * AVG_GLYPH_ADVANCE
}

/// Split `text` into lines no wider than `max_width` at `font_px`.
///
/// Breaks at whitespace (runs of which collapse to one space); a single
/// word wider than a line is broken between characters.  Always returns
/// at least one line.
#[must_use]
pub fn wrap_text(text: &str, font_px: f32, max_width: f32) -> Vec<String> {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max_chars = ((max_width / (font_px * AVG_GLYPH_ADVANCE)).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0;
    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        let joined = if line.is_empty() {
            word_chars
        } else {
            line_chars + 1 + word_chars
        };
        if joined <= max_chars {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            line_chars = joined;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        let mut rest = word;
        while rest.chars().count() > max_chars {
            let cut = rest
                .char_indices()
                .nth(max_chars)
                .map_or(rest.len(), |(i, _)| i);
            lines.push(rest[..cut].to_owned());
            rest = &rest[cut..];
        }
        line.push_str(rest);
        line_chars = rest.chars().count();
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

#[expect(clippy::cast_precision_loss)]
fn block_height(lines: &[String], line_height: f32) -> f32 {
    lines.len() as f32 * line_height
}

/// Width of the call-to-action text run `"{tap}  /  {scan}"`.
#[must_use]
pub fn cta_text_width(tap_label: &str, scan_label: &str) -> f32 {
    approx_text_width(tap_label, SMALL_FONT_PX)
        + approx_text_width("/", SMALL_FONT_PX)
        + CTA_SPACING * 2.0
        + approx_text_width(scan_label, SMALL_FONT_PX)
}

impl CardLayout {
    /// Lay out the card for the given content.
    ///
    /// `glyph_px` is the QR glyph edge length including quiet zone.
    /// `extra_text` is `None` when no extra-text block is shown.
    #[must_use]
    pub fn compute(
        glyph_px: f32,
        title_text: &str,
        extra_text: Option<&str>,
        has_nfc: bool,
        tap_label: &str,
        scan_label: &str,
    ) -> Self {
        let center_x = CARD_WIDTH / 2.0;
        let content_width = CARD_PADDING.mul_add(-2.0, CARD_WIDTH);
        let mut y = CARD_PADDING;

        let title_lines = wrap_text(title_text, TITLE_FONT_PX, content_width);
        let title_height = block_height(&title_lines, TITLE_LINE);
        let title = Rect::new(CARD_PADDING, y, content_width, title_height);
        y += title_height + TITLE_GAP;

        let frame_size = FRAME_INSET.mul_add(2.0, glyph_px);
        let qr_frame = Rect::new(center_x - frame_size / 2.0, y, frame_size, frame_size);
        let qr_glyph = Rect::new(
            qr_frame.x + FRAME_INSET,
            qr_frame.y + FRAME_INSET,
            glyph_px,
            glyph_px,
        );
        y += frame_size + STARS_GAP;

        #[expect(clippy::cast_precision_loss)]
        let stars_width =
            (RATING_STARS as f32).mul_add(STAR_SIZE, STAR_SPACING * (RATING_STARS - 1) as f32);
        let stars_left = center_x - stars_width / 2.0;
        let stars = std::array::from_fn(|i| {
            #[expect(clippy::cast_precision_loss)]
            let offset = i as f32 * (STAR_SIZE + STAR_SPACING);
            Rect::new(stars_left + offset, y, STAR_SIZE, STAR_SIZE)
        });
        y += STAR_SIZE;

        let extra_lines = extra_text
            .map(|text| wrap_text(text, SMALL_FONT_PX, content_width))
            .unwrap_or_default();
        let extra_text = extra_text.is_some().then(|| {
            y += EXTRA_GAP;
            let height = block_height(&extra_lines, SMALL_LINE);
            let rect = Rect::new(CARD_PADDING, y, content_width, height);
            y += height;
            rect
        });

        y += CTA_GAP;
        let cta = Rect::new(CARD_PADDING, y, content_width, SMALL_LINE);
        let text_width = cta_text_width(tap_label, scan_label);
        let (cta_text_center_x, nfc_icon) = if has_nfc {
            let run = text_width + NFC_ICON_SIZE + NFC_ICON_GAP;
            let left = center_x - run / 2.0;
            let icon = Rect::new(
                left,
                cta.center_y() - NFC_ICON_SIZE / 2.0,
                NFC_ICON_SIZE,
                NFC_ICON_SIZE,
            );
            let text_left = left + NFC_ICON_SIZE + NFC_ICON_GAP;
            (text_left + text_width / 2.0, Some(icon))
        } else {
            (center_x, None)
        };
        y += SMALL_LINE + CARD_PADDING;

        Self {
            width: CARD_WIDTH,
            height: y,
            title,
            title_lines,
            qr_frame,
            qr_glyph,
            stars,
            extra_text,
            extra_lines,
            cta,
            cta_text_center_x,
            nfc_icon,
        }
    }
}
