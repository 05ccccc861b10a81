//! EN / DE language toggle.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdLanguages;
use reviewcard_core::{Language, LanguageState};

/// Two-state language toggle.
///
/// A click here is a manual choice; any later locale guess is ignored.
#[component]
pub fn LanguageSwitch() -> Element {
    let mut language: Signal<LanguageState> = use_context();
    let current = language.read().current();

    rsx! {
        div { class: "language-switch", role: "group",
            Icon { width: 16, height: 16, fill: "currentColor", icon: LdLanguages }
            for lang in Language::ALL {
                button {
                    key: "{lang.code()}",
                    r#type: "button",
                    class: if lang == current { "active" },
                    aria_pressed: lang == current,
                    onclick: move |_| {
                        language.write().set(lang);
                        tracing::info!(%lang, "language chosen");
                    },
                    "{lang}"
                }
            }
        }
    }
}
