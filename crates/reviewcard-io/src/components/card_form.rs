//! Card input form: title, destination URL, extra text, and toggles.

use dioxus::prelude::*;
use reviewcard_core::{CardState, LanguageState};

/// Form editing the shared [`CardState`].
///
/// Every keystroke in the URL field re-validates the destination; the
/// localized error message appears beneath the field while it is set.
#[component]
pub fn CardForm(mut card: Signal<CardState>) -> Element {
    let language: Signal<LanguageState> = use_context();
    let strings = language.read().current().strings();

    let title = card.read().title.clone();
    let url = card.read().url().to_owned();
    let extra_text = card.read().extra_text.clone();
    let show_nfc = card.read().show_nfc;
    let dark_mode = card.read().dark_mode;
    let url_error = card.read().url_error().map(|e| e.message(strings));

    rsx! {
        form {
            class: "card-form",
            onsubmit: move |e| e.prevent_default(),

            div { class: "field",
                label { r#for: "card-title", "{strings.title_input}" }
                input {
                    id: "card-title",
                    r#type: "text",
                    value: "{title}",
                    placeholder: "{strings.title_placeholder}",
                    oninput: move |e| card.write().title = e.value(),
                }
            }

            div { class: "field",
                label { r#for: "card-url", "{strings.url_input}" }
                input {
                    id: "card-url",
                    r#type: "url",
                    value: "{url}",
                    placeholder: "{strings.url_placeholder}",
                    class: if url_error.is_some() { "invalid" },
                    aria_invalid: url_error.is_some(),
                    oninput: move |e| card.write().set_url(e.value()),
                }
                if let Some(message) = url_error {
                    p { class: "url-error", role: "alert", "{message}" }
                }
            }

            div { class: "field",
                label { r#for: "card-extra", "{strings.extra_text_input}" }
                input {
                    id: "card-extra",
                    r#type: "text",
                    value: "{extra_text}",
                    placeholder: "{strings.extra_text_placeholder}",
                    oninput: move |e| card.write().extra_text = e.value(),
                }
            }

            {render_toggle("card-nfc", strings.show_nfc, show_nfc, move |checked| {
                card.write().show_nfc = checked;
            })}
            {render_toggle("card-dark", strings.dark_mode, dark_mode, move |checked| {
                card.write().dark_mode = checked;
            })}
        }
    }
}

/// Render a labeled checkbox.
fn render_toggle(
    id: &str,
    label: &str,
    checked: bool,
    mut on_change: impl FnMut(bool) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();

    rsx! {
        div { class: "toggle",
            input {
                r#type: "checkbox",
                id: "{id}",
                checked: checked,
                onchange: move |e| {
                    on_change(e.checked());
                },
            }
            label { r#for: "{id}", "{label}" }
        }
    }
}
