//! Rasterize the card preview into PNG bytes.
//!
//! The preview's SVG markup is loaded into an off-screen `<img>` via a
//! Blob URL, drawn onto a canvas at the export scale over the theme
//! background, read back with `getImageData`, and encoded to PNG in
//! Rust by `reviewcard-export`.
//!
//! Drawing the SVG at the target pixel size (rather than drawing at 1x
//! and scaling the bitmap) keeps text and QR edges sharp.

use reviewcard_core::ExportRequest;
use reviewcard_export::PngError;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// Errors that can occur while capturing the preview.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// A browser API call returned an error (including a tainted
    /// canvas refusing `getImageData`).
    #[error("browser API error: {0}")]
    JsError(String),

    /// The pixel data could not be turned into a PNG.
    #[error(transparent)]
    Png(#[from] PngError),
}

impl From<JsValue> for SnapshotError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Capture `request.preview` as PNG bytes at `request.scale`.
///
/// # Errors
///
/// Returns [`SnapshotError::JsError`] if the SVG cannot be decoded as an
/// image or any canvas call fails, and [`SnapshotError::Png`] if
/// encoding fails.
#[allow(clippy::future_not_send)] // WASM is single-threaded; DOM handles are !Send
pub async fn capture_png(request: &ExportRequest) -> Result<Vec<u8>, SnapshotError> {
    let svg = reviewcard_export::to_svg(&request.preview);
    let (width, height) = request.pixel_size();
    let background = request.background();

    let image = load_svg_image(&svg).await?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SnapshotError::JsError("no document".into()))?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|e| SnapshotError::JsError(format!("failed to cast canvas: {e:?}")))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| SnapshotError::JsError("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|e| SnapshotError::JsError(format!("failed to cast 2d context: {e:?}")))?;

    let (w, h) = (f64::from(width), f64::from(height));
    ctx.set_fill_style_str(&background.to_string());
    ctx.fill_rect(0.0, 0.0, w, h);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&image, 0.0, 0.0, w, h)?;

    let pixels = ctx.get_image_data(0.0, 0.0, w, h)?;
    let rgba = pixels.data().0;
    Ok(reviewcard_export::snapshot_to_png(width, height, rgba, background)?)
}

/// Decode SVG markup into an `<img>` element.
///
/// The element requests anonymous CORS so any cross-origin content is
/// fetched in a canvas-safe way where the server allows it.
#[allow(clippy::future_not_send)]
async fn load_svg_image(svg: &str) -> Result<HtmlImageElement, SnapshotError> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(svg));
    let opts = BlobPropertyBag::new();
    opts.set_type("image/svg+xml;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let image = HtmlImageElement::new()?;
    image.set_cross_origin(Some("anonymous"));
    image.set_src(&url);
    let decoded = JsFuture::from(image.decode()).await;

    // Best-effort: the decoded image no longer needs the Blob.
    let _ = web_sys::Url::revoke_object_url(&url);

    decoded?;
    Ok(image)
}
