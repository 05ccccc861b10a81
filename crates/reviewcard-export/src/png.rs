//! PNG export of a rasterized card snapshot.
//!
//! The browser hands back straight (non-premultiplied) RGBA pixels.
//! Any transparency is composited onto the theme background so the
//! exported image never shows an unexpected black or white fringe,
//! then the opaque result is encoded as PNG.

use image::{ImageEncoder, Rgb as Pixel, RgbImage, RgbaImage};
use reviewcard_core::Rgb;

/// MIME type of the exported artifact.
pub const PNG_MIME: &str = "image/png";

/// Errors that can occur while turning a snapshot into PNG bytes.
#[derive(Debug, thiserror::Error)]
pub enum PngError {
    /// The pixel buffer length does not match `width * height * 4`.
    #[error("snapshot buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// A zero-sized snapshot cannot be exported.
    #[error("snapshot is empty ({width}x{height})")]
    Empty { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Composite `snapshot` over a solid `background`.
#[must_use]
pub fn flatten_onto(snapshot: &RgbaImage, background: Rgb) -> RgbImage {
    let bg = background.0;
    RgbImage::from_fn(snapshot.width(), snapshot.height(), |x, y| {
        let [r, g, b, a] = snapshot.get_pixel(x, y).0;
        let blend = |c: u8, under: u8| -> u8 {
            let value = u16::from(c) * u16::from(a) + u16::from(under) * u16::from(255 - a);
            // Rounded division by 255; the result is at most 255.
            #[expect(clippy::cast_possible_truncation)]
            let out = ((value + 127) / 255) as u8;
            out
        };
        Pixel([blend(r, bg[0]), blend(g, bg[1]), blend(b, bg[2])])
    })
}

/// Encode an opaque image as PNG bytes.
///
/// # Errors
///
/// Returns [`PngError::Encode`] if the encoder fails.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, PngError> {
    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(png_bytes)
}

/// Flatten a raw RGBA snapshot onto `background` and encode it as PNG.
///
/// `rgba` is row-major, four bytes per pixel, exactly as returned by
/// `CanvasRenderingContext2D.getImageData`.
///
/// # Errors
///
/// Returns [`PngError::Empty`] for a zero-sized snapshot,
/// [`PngError::BufferSize`] if `rgba` has the wrong length, and
/// [`PngError::Encode`] if encoding fails.
pub fn snapshot_to_png(
    width: u32,
    height: u32,
    rgba: Vec<u8>,
    background: Rgb,
) -> Result<Vec<u8>, PngError> {
    if width == 0 || height == 0 {
        return Err(PngError::Empty { width, height });
    }
    let expected = width as usize * height as usize * 4;
    let actual = rgba.len();
    let snapshot = RgbaImage::from_raw(width, height, rgba).ok_or(PngError::BufferSize {
        width,
        height,
        expected,
        actual,
    })?;
    encode_png(&flatten_onto(&snapshot, background))
}
