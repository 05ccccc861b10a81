use dioxus::prelude::*;
use reviewcard_core::{CardState, LanguageState, LocaleDetector, Strings};
use reviewcard_io::{CardForm, CardPreview, ExportButton, IpLocaleDetector, LanguageSwitch};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the card and language state, kicks off the one-shot locale
/// lookup after mount, and lays out the generator next to the use-case
/// and commercial sections.
fn app() -> Element {
    // --- Application state ---
    let mut language = use_context_provider(|| Signal::new(LanguageState::new()));
    let card = use_signal(CardState::new);

    // --- Locale detection ---
    // Runs once after the first render; the page is usable in the
    // default language until (and unless) a guess arrives.
    use_future(move || async move {
        let guess = IpLocaleDetector::default().detect_locale().await;
        if language.write().apply_guess(guess) {
            tracing::info!(language = %language.peek().current(), "applied locale guess");
        }
    });

    // --- Document language ---
    use_effect(move || {
        let tag = language.read().current().tag();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            && let Err(e) = root.set_attribute("lang", tag)
        {
            tracing::warn!("failed to set document language: {e:?}");
        }
    });

    let strings = language.read().current().strings();
    let theme = card.read().theme();
    let palette = theme.palette();
    let page_class = if theme.is_dark() { "page dark" } else { "page" };

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }
        document::Title { "{strings.app_title}" }
        document::Meta { name: "description", content: "{strings.meta_description}" }

        div {
            class: "{page_class}",
            style: "--page-bg: {palette.page_bg}; --page-text: {palette.page_text};",
            header { class: "page-header",
                div {
                    h1 { "{strings.app_title}" }
                    p { class: "subtitle", "{strings.subtitle}" }
                }
                LanguageSwitch {}
            }

            main {
                section { class: "generator",
                    h2 { "{strings.generator_heading}" }
                    div { class: "generator-body",
                        CardForm { card }
                        div { class: "generator-output",
                            CardPreview { card }
                            ExportButton { card }
                        }
                    }
                }

                {use_cases(strings)}
                {commercial(strings)}
            }
        }
    }
}

/// The three "who is this for" blurbs.
fn use_cases(strings: &'static Strings) -> Element {
    let cases = [
        (strings.for_restaurants, strings.for_restaurants_desc),
        (strings.for_shops, strings.for_shops_desc),
        (strings.for_services, strings.for_services_desc),
    ];

    rsx! {
        section { class: "use-cases",
            for (heading, description) in cases {
                article { key: "{heading}",
                    h3 { "{heading}" }
                    p { "{description}" }
                }
            }
        }
    }
}

/// Commercial call-out with the contact address.
fn commercial(strings: &'static Strings) -> Element {
    rsx! {
        section { class: "commercial",
            h2 { "{strings.commercial_title}" }
            p { "{strings.commercial_desc}" }
            a { href: "mailto:{strings.contact_email}", "{strings.contact_email}" }
        }
    }
}
