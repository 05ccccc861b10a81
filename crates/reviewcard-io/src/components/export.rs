//! PNG export button.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use reviewcard_core::{
    CardState, ExportCoordinator, ExportOutcome, ExportRequest, ExportSettings, LanguageState,
    QrSettings,
};

use crate::download;
use crate::snapshot;

/// Button that captures the card and downloads it as PNG.
///
/// Disabled while the destination is not a valid, encodable URL.
/// Marked busy while a capture runs; clicking again restarts the
/// export and only the newest capture is downloaded.
#[component]
pub fn ExportButton(mut card: Signal<CardState>) -> Element {
    let language: Signal<LanguageState> = use_context();
    let mut coordinator = use_signal(ExportCoordinator::new);
    let strings = language.read().current().strings();
    let enabled = card.read().is_exportable();
    let busy = coordinator.read().is_pending();

    let onclick = move |_| {
        let strings = language.read().current().strings();
        let begun = coordinator.write().begin(
            &mut card.write(),
            strings,
            QrSettings::default(),
            &ExportSettings::default(),
        );
        let request = match begun {
            Ok(request) => request,
            Err(e) => {
                tracing::info!("export refused: {e}");
                return;
            }
        };
        tracing::info!(generation = request.generation, "export started");

        spawn(export_preview(coordinator, request));
    };

    rsx! {
        button {
            class: if busy { "export-button busy" } else { "export-button" },
            r#type: "button",
            disabled: !enabled,
            aria_busy: busy,
            onclick: onclick,
            Icon { width: 18, height: 18, fill: "currentColor", icon: LdDownload }
            span { "{strings.download_button}" }
        }
    }
}

/// Capture `request` and download it if it is still the newest export.
///
/// Failures are logged and otherwise swallowed; the form is not told.
#[allow(clippy::future_not_send)] // WASM is single-threaded; DOM handles are !Send
async fn export_preview(mut coordinator: Signal<ExportCoordinator>, request: ExportRequest) {
    let captured = snapshot::capture_png(&request).await;
    let outcome = coordinator.write().finish(request.generation, captured);
    match outcome {
        ExportOutcome::Completed(bytes) => {
            match download::trigger_download(&bytes, &request.filename, reviewcard_export::PNG_MIME)
            {
                Ok(()) => tracing::info!(file = %request.filename, "export downloaded"),
                Err(e) => tracing::error!("download failed: {e}"),
            }
        }
        ExportOutcome::Failed(e) => tracing::error!("export failed: {e}"),
        ExportOutcome::Superseded => {
            tracing::debug!(generation = request.generation, "export superseded");
        }
    }
}
