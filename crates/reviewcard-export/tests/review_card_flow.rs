//! Integration test: drive the card from an empty form through to an exported PNG.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use reviewcard_core::language::EN;
use reviewcard_core::theme::{DARK, LIGHT};
use reviewcard_core::{
    CardState, ExportCoordinator, ExportOutcome, ExportRequest, ExportSettings, QrSettings,
    UrlError, render,
};

/// A downloaded file as the browser would receive it.
#[derive(Debug)]
struct Download {
    filename: String,
    bytes: Vec<u8>,
}

/// Stand-in for the browser snapshot: a fully transparent canvas of the
/// requested size, so the output consists only of the flattened
/// background.
fn fake_snapshot(request: &ExportRequest) -> Result<Download, reviewcard_export::PngError> {
    let (width, height) = request.pixel_size();
    let rgba = vec![0u8; width as usize * height as usize * 4];
    let bytes = reviewcard_export::snapshot_to_png(width, height, rgba, request.background())?;
    Ok(Download {
        filename: request.filename.clone(),
        bytes,
    })
}

fn click_export(
    coordinator: &mut ExportCoordinator,
    state: &mut CardState,
    downloads: &mut Vec<Download>,
) {
    let Ok(request) =
        coordinator.begin(state, &EN, QrSettings::default(), &ExportSettings::default())
    else {
        return;
    };
    let result = fake_snapshot(&request);
    if let ExportOutcome::Completed(download) = coordinator.finish(request.generation, result) {
        downloads.push(download);
    }
}

#[test]
fn empty_form_to_download() {
    let mut state = CardState::new();
    let mut coordinator = ExportCoordinator::new();
    let mut downloads = Vec::new();

    // Empty form: export disabled, no error.
    assert!(!state.has_valid_url());
    assert_eq!(state.url_error(), None);

    // Partial input: error shown, still disabled.
    state.set_url("example");
    assert_eq!(state.url_error(), Some(UrlError::Invalid));
    assert!(!state.has_valid_url());

    // Valid input: error clears, export enabled, glyph encodes the URL.
    state.set_url("https://example.com");
    assert_eq!(state.url_error(), None);
    assert!(state.has_valid_url());
    let preview = render(&state, &EN, QrSettings::default());
    assert_eq!(preview.qr.target, "https://example.com");

    click_export(&mut coordinator, &mut state, &mut downloads);
    assert_eq!(downloads.len(), 1);
    assert_eq!(downloads[0].filename, "google-review-qr.png");

    let png = image::load_from_memory(&downloads[0].bytes)
        .expect("export should be a valid PNG")
        .to_rgb8();
    // Card is 384x408 CSS px, exported at 2x.
    assert_eq!(png.dimensions(), (768, 816));
    assert_eq!(png.get_pixel(0, 0).0, LIGHT.card_bg.0);
}

#[test]
fn export_refused_when_url_turns_invalid() {
    let mut state = CardState::new();
    let mut coordinator = ExportCoordinator::new();
    let mut downloads = Vec::new();

    state.set_url("https://example.com");
    state.set_url("ftp://example.com");
    click_export(&mut coordinator, &mut state, &mut downloads);

    assert!(downloads.is_empty());
    assert_eq!(state.url_error(), Some(UrlError::RequiredForExport));
}

#[test]
fn dark_export_uses_dark_background() {
    let mut state = CardState::new();
    let mut coordinator = ExportCoordinator::new();
    let mut downloads = Vec::new();

    state.set_url("https://example.com/review");
    state.dark_mode = true;
    state.extra_text = String::from("Thank you!");
    click_export(&mut coordinator, &mut state, &mut downloads);

    let png = image::load_from_memory(&downloads[0].bytes)
        .unwrap()
        .to_rgb8();
    assert_eq!(png.dimensions(), (768, 880));
    assert_eq!(png.get_pixel(767, 879).0, DARK.card_bg.0);
}

#[test]
fn superseded_export_produces_no_download() {
    let mut state = CardState::new();
    state.set_url("https://example.com");
    let mut coordinator = ExportCoordinator::new();
    let settings = ExportSettings::default();

    let first = coordinator
        .begin(&mut state, &EN, QrSettings::default(), &settings)
        .unwrap();
    let second = coordinator
        .begin(&mut state, &EN, QrSettings::default(), &settings)
        .unwrap();

    // The first snapshot resolves late, after the second click.
    let late = coordinator.finish(first.generation, fake_snapshot(&first));
    assert!(matches!(late, ExportOutcome::Superseded));

    let newest = coordinator.finish(second.generation, fake_snapshot(&second));
    assert!(matches!(newest, ExportOutcome::Completed(_)));
}

#[test]
fn exported_markup_matches_live_preview() {
    let mut state = CardState::new();
    state.set_url("https://example.com");
    state.title = String::from("Bakery Blum");
    let mut coordinator = ExportCoordinator::new();

    let live = reviewcard_export::to_svg(&render(&state, &EN, QrSettings::default()));
    let request = coordinator
        .begin(&mut state, &EN, QrSettings::default(), &ExportSettings::default())
        .unwrap();
    assert_eq!(reviewcard_export::to_svg(&request.preview), live);
}

#[test]
fn long_title_grows_exported_image() {
    let mut state = CardState::new();
    state.set_url("https://example.com");
    state.title = String::from("Family Restaurant Zum Goldenen Hirschen am Markt");
    let mut coordinator = ExportCoordinator::new();
    let mut downloads = Vec::new();

    click_export(&mut coordinator, &mut state, &mut downloads);

    let png = image::load_from_memory(&downloads[0].bytes)
        .unwrap()
        .to_rgb8();
    let (width, height) = png.dimensions();
    assert_eq!(width, 768);
    // Two title lines: one extra 28 px line at 2x.
    assert_eq!(height, 816 + 56);
}
