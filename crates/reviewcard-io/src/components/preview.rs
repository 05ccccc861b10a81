//! Live card preview.

use dioxus::prelude::*;
use reviewcard_core::{CardState, LanguageState, QrSettings};

/// Inline SVG rendering of the current card.
///
/// The markup is the same document the export rasterizes, so what the
/// user sees is what gets downloaded.
#[component]
pub fn CardPreview(card: Signal<CardState>) -> Element {
    let language: Signal<LanguageState> = use_context();

    let svg = use_memo(move || {
        let strings = language.read().current().strings();
        let preview = reviewcard_core::render(&card.read(), strings, QrSettings::default());
        reviewcard_export::to_svg(&preview)
    });

    rsx! {
        div {
            class: "card-preview",
            dangerous_inner_html: "{svg}",
        }
    }
}
