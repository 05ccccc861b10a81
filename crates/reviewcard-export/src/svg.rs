//! SVG serializer for the review card.
//!
//! Converts a [`Preview`] into a self-contained SVG document using the
//! [`svg`] crate for document construction, XML escaping, and path data
//! formatting.  The same markup is shown as the live preview and fed to
//! the rasterizer on export, so both always agree.
//!
//! The document embeds no external resources (fonts fall back to the
//! system sans-serif, icons are inline paths), which keeps the canvas
//! it is drawn onto untainted.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{
    Definitions, Group, LinearGradient, Path, Rectangle, Stop, TSpan, Text, Title,
};

use reviewcard_core::layout::{
    CARD_RADIUS, FRAME_RING, SMALL_FONT_PX, SMALL_LINE, STAR_SIZE, TITLE_FONT_PX, TITLE_LINE,
};
use reviewcard_core::theme::{FRAME_GRADIENT, STAR_COLOR};
use reviewcard_core::{Preview, QrMatrix, Rect, Rgb};

/// `id` of the gradient used for the QR frame.
const FRAME_GRADIENT_ID: &str = "rc-frame";

const FONT_FAMILY: &str =
    "ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, Arial, sans-serif";

/// Five-point star in a 24x24 box.
const STAR_PATH: &str =
    "M12 17.27L18.18 21L16.54 13.97L22 9.24L14.81 8.63L12 2L9.19 8.63L2 9.24L7.46 13.97L5.82 21L12 17.27Z";

/// NFC waves in a 24x24 box, stroked.
const NFC_PATHS: [&str; 4] = [
    "M6 8.32a7.43 7.43 0 0 1 0 7.36",
    "M9.46 6.21a11.76 11.76 0 0 1 0 11.58",
    "M12.91 4.1a15.91 15.91 0 0 1 .01 15.8",
    "M16.37 2a20.16 20.16 0 0 1 0 20",
];

/// Edge length of the NFC icon's path coordinate box.
const NFC_VIEWBOX: f32 = 24.0;

/// Serialize a preview into an SVG document string.
///
/// The document's user units are CSS pixels; `width`/`height` equal the
/// card layout size so the browser rasterizes it 1:1 unless scaled.
///
/// # Examples
///
/// ```
/// use reviewcard_core::{CardState, QrSettings, render};
/// use reviewcard_core::language::EN;
///
/// let mut state = CardState::new();
/// state.set_url("https://example.com");
/// let svg = reviewcard_export::to_svg(&render(&state, &EN, QrSettings::default()));
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("Rate us!"));
/// ```
#[must_use]
pub fn to_svg(preview: &Preview) -> String {
    let layout = &preview.layout;
    let palette = &preview.palette;

    let mut doc = Document::new()
        .set("width", layout.width)
        .set("height", layout.height)
        .set("viewBox", format!("0 0 {} {}", layout.width, layout.height))
        .set("font-family", FONT_FAMILY)
        .add(Title::new(preview.title.as_str()))
        .add(frame_gradient());

    // Card: fill + 1px outline drawn inside the bounds.
    doc = doc.add(
        Rectangle::new()
            .set("x", 0.5)
            .set("y", 0.5)
            .set("width", layout.width - 1.0)
            .set("height", layout.height - 1.0)
            .set("rx", CARD_RADIUS)
            .set("fill", palette.card_bg.to_string())
            .set("stroke", palette.card_border.to_string())
            .set("stroke-width", 1),
    );

    doc = doc.add(
        text_block(
            &layout.title_lines,
            layout.title,
            TITLE_LINE,
            TITLE_FONT_PX,
            palette.text,
        )
        .set("font-weight", 700),
    );

    // Gradient ring, then the card-coloured well inside it.
    doc = doc
        .add(rounded_rect(layout.qr_frame, &format!("url(#{FRAME_GRADIENT_ID})")))
        .add(rounded_rect(
            layout.qr_frame.inset(FRAME_RING),
            &palette.card_bg.to_string(),
        ));

    if let Ok(matrix) = &preview.qr.matrix {
        doc = doc.add(qr_group(
            matrix,
            layout.qr_glyph,
            preview.qr.settings.quiet_zone,
            palette.qr_fg,
            palette.qr_bg,
        ));
    }

    for star in &layout.stars {
        doc = doc.add(
            Path::new()
                .set("d", STAR_PATH)
                .set(
                    "transform",
                    format!(
                        "translate({} {}) scale({})",
                        star.x,
                        star.y,
                        star.width / STAR_SIZE
                    ),
                )
                .set("fill", STAR_COLOR.to_string()),
        );
    }

    if let Some(rect) = layout.extra_text {
        doc = doc.add(
            text_block(&layout.extra_lines, rect, SMALL_LINE, SMALL_FONT_PX, palette.text)
                .set("font-weight", 500),
        );
    }

    if preview.show_nfc
        && let Some(icon) = layout.nfc_icon
    {
        doc = doc.add(nfc_icon(icon, palette.nfc_tint));
    }

    let cta = format!(
        "{}\u{a0}\u{a0}/\u{a0}\u{a0}{}",
        preview.tap_label, preview.scan_label
    );
    doc = doc.add(centered_text(
        &cta,
        layout.cta_text_center_x,
        layout.cta.center_y(),
        SMALL_FONT_PX,
        palette.text,
    ));

    doc.to_string()
}

/// Horizontal four-stop brand gradient.
fn frame_gradient() -> Definitions {
    let mut gradient = LinearGradient::new()
        .set("id", FRAME_GRADIENT_ID)
        .set("x1", 0)
        .set("y1", 0)
        .set("x2", 1)
        .set("y2", 0);
    for (offset, color) in FRAME_GRADIENT {
        gradient = gradient.add(
            Stop::new()
                .set("offset", offset)
                .set("stop-color", color.to_string()),
        );
    }
    Definitions::new().add(gradient)
}

fn rounded_rect(rect: Rect, fill: &str) -> Rectangle {
    Rectangle::new()
        .set("x", rect.x)
        .set("y", rect.y)
        .set("width", rect.width)
        .set("height", rect.height)
        .set("rx", CARD_RADIUS)
        .set("fill", fill)
}

fn centered_text(content: &str, x: f32, y: f32, font_px: f32, color: Rgb) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central")
        .set("font-size", font_px)
        .set("fill", color.to_string())
}

/// Centred multi-line text: one `<tspan>` per line, stacked from the
/// top of `rect` at `line_height`.
fn text_block(lines: &[String], rect: Rect, line_height: f32, font_px: f32, color: Rgb) -> Text {
    let x = rect.center_x();
    let mut text = Text::new("")
        .set("text-anchor", "middle")
        .set("font-size", font_px)
        .set("fill", color.to_string());
    for (i, line) in lines.iter().enumerate() {
        #[expect(clippy::cast_precision_loss)]
        let y = line_height.mul_add(i as f32 + 0.5, rect.y);
        text = text.add(
            TSpan::new(line.as_str())
                .set("x", x)
                .set("y", y)
                .set("dominant-baseline", "central"),
        );
    }
    text
}

/// Build the QR glyph: a background square for the quiet zone plus one
/// path holding every dark module.
///
/// Module coordinates are emitted in module units and scaled by the
/// group transform so the path stays compact.
fn qr_group(matrix: &QrMatrix, rect: Rect, quiet_zone: u32, fg: Rgb, bg: Rgb) -> Group {
    #[expect(clippy::cast_precision_loss)]
    let total_modules = (matrix.width() + 2 * quiet_zone as usize) as f32;
    let module_px = rect.width / total_modules;

    let mut data = Data::new();
    for (x, y) in matrix.dark_modules() {
        #[expect(clippy::cast_precision_loss)]
        let (mx, my) = ((x + quiet_zone as usize) as f32, (y + quiet_zone as usize) as f32);
        data = data
            .move_to((mx, my))
            .horizontal_line_by(1.0_f32)
            .vertical_line_by(1.0_f32)
            .horizontal_line_by(-1.0_f32)
            .close();
    }

    Group::new()
        .set("shape-rendering", "crispEdges")
        .add(
            Rectangle::new()
                .set("x", rect.x)
                .set("y", rect.y)
                .set("width", rect.width)
                .set("height", rect.height)
                .set("fill", bg.to_string()),
        )
        .add(
            Path::new()
                .set("d", data)
                .set("fill", fg.to_string())
                .set(
                    "transform",
                    format!("translate({} {}) scale({module_px})", rect.x, rect.y),
                ),
        )
}

fn nfc_icon(rect: Rect, tint: Rgb) -> Group {
    let mut group = Group::new()
        .set(
            "transform",
            format!("translate({} {}) scale({})", rect.x, rect.y, rect.width / NFC_VIEWBOX),
        )
        .set("fill", "none")
        .set("stroke", tint.to_string())
        .set("stroke-width", 2)
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round");
    for d in NFC_PATHS {
        group = group.add(Path::new().set("d", d));
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewcard_core::language::{DE, EN};
    use reviewcard_core::theme::{DARK, LIGHT};
    use reviewcard_core::{CardState, QrSettings, render};

    fn svg_for(state: &CardState) -> String {
        to_svg(&render(state, &EN, QrSettings::default()))
    }

    fn valid_state() -> CardState {
        let mut state = CardState::new();
        state.set_url("https://example.com");
        state
    }

    #[test]
    fn document_has_card_dimensions() {
        let svg = svg_for(&valid_state());
        assert!(svg.contains(r#"width="384""#));
        assert!(svg.contains(r#"height="408""#));
        assert!(svg.contains(r#"viewBox="0 0 384 408""#));
        assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    }

    #[test]
    fn title_is_escaped() {
        let mut state = valid_state();
        state.title = String::from("Fish & <Chips>");
        let svg = svg_for(&state);
        assert!(svg.contains("Fish &amp; &lt;Chips"));
        assert!(!svg.contains("<Chips>"));
    }

    #[test]
    fn five_stars_always_present() {
        let svg = svg_for(&CardState::new());
        assert_eq!(svg.matches(STAR_PATH).count(), 5);
    }

    #[test]
    fn light_theme_colours() {
        let svg = svg_for(&valid_state());
        assert!(svg.contains(&format!(r#"fill="{}""#, LIGHT.card_bg)));
        assert!(svg.contains(&format!(r#"stroke="{}""#, LIGHT.card_border)));
    }

    #[test]
    fn dark_theme_colours() {
        let mut state = valid_state();
        state.dark_mode = true;
        let svg = svg_for(&state);
        assert!(svg.contains(&format!(r#"fill="{}""#, DARK.card_bg)));
        assert!(svg.contains(&format!(r#"stroke="{}""#, DARK.card_border)));
    }

    #[test]
    fn nfc_icon_only_when_enabled() {
        let mut state = valid_state();
        assert!(!svg_for(&state).contains(NFC_PATHS[0]));
        state.show_nfc = true;
        assert!(svg_for(&state).contains(NFC_PATHS[0]));
    }

    #[test]
    fn nfc_icon_tint_follows_theme() {
        let mut state = valid_state();
        state.show_nfc = true;
        state.dark_mode = true;
        let svg = svg_for(&state);
        assert!(svg.contains(&format!(r#"stroke="{}""#, DARK.nfc_tint)));
    }

    #[test]
    fn extra_text_only_when_non_empty() {
        let mut state = valid_state();
        state.extra_text = String::from("10% off your next visit");
        assert!(svg_for(&state).contains("10% off your next visit"));
        assert!(svg_for(&state).contains(r#"height="440""#));
    }

    #[test]
    fn long_title_is_split_into_lines_inside_the_card() {
        let mut state = valid_state();
        state.title = String::from("Family Restaurant Zum Goldenen Hirschen am Markt");
        let preview = render(&state, &EN, QrSettings::default());
        let svg = to_svg(&preview);

        assert_eq!(svg.matches("<tspan").count(), preview.layout.title_lines.len());
        for line in &preview.layout.title_lines {
            assert!(svg.contains(&format!(">{line}</tspan>")), "{line:?}");
        }
        let height = format!(r#"height="{}""#, preview.layout.height);
        assert!(svg.contains(&height));
        assert!(!svg.contains(r#"height="408""#));
    }

    #[test]
    fn qr_modules_are_drawn() {
        let svg = svg_for(&valid_state());
        assert!(svg.contains("crispEdges"));
        assert!(svg.contains("h1 v1 h-1 z") || svg.contains("h1v1h-1z"));
    }

    #[test]
    fn unencodable_glyph_leaves_frame_empty() {
        let mut state = CardState::new();
        state.set_url(format!("https://example.com/{}", "a".repeat(4_000)));
        let svg = svg_for(&state);
        assert!(!svg.contains("crispEdges"));
        assert!(svg.contains(FRAME_GRADIENT_ID));
    }

    #[test]
    fn call_to_action_is_localized() {
        let svg = to_svg(&render(&CardState::new(), &DE, QrSettings::default()));
        assert!(svg.contains("Telefon antippen"));
        assert!(svg.contains("QR-Code scannen"));
    }
}
