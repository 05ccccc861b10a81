//! Interface language and its translation tables.
//!
//! [`LanguageState`] is owned by the application root and handed to the
//! view layer explicitly.  It permits exactly three transitions:
//! initialize to the default, set manually, and apply a one-time
//! locale guess.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two supported interface languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// German.
    De,
}

impl Language {
    /// Both languages in switcher order.
    pub const ALL: [Self; 2] = [Self::En, Self::De];

    /// Short uppercase code shown on the language switch.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::De => "DE",
        }
    }

    /// BCP 47 tag for the document `lang` attribute.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Translation table for this language.
    #[must_use]
    pub const fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::De => &DE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Process-wide language selection.
///
/// A locale guess is honoured at most once, and only while the user
/// has not picked a language themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageState {
    current: Language,
    manually_chosen: bool,
    guess_applied: bool,
}

impl LanguageState {
    /// State initialized to the default language (English).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active language.
    #[must_use]
    pub const fn current(&self) -> Language {
        self.current
    }

    /// Explicit user selection.  Always takes effect.
    pub const fn set(&mut self, language: Language) {
        self.current = language;
        self.manually_chosen = true;
    }

    /// Apply the result of locale detection.
    ///
    /// `None` (no opinion, lookup failed) leaves the language untouched.
    /// Returns `true` if the language changed.
    pub fn apply_guess(&mut self, guess: Option<Language>) -> bool {
        if self.manually_chosen || self.guess_applied {
            return false;
        }
        let Some(language) = guess else {
            return false;
        };
        self.guess_applied = true;
        let changed = self.current != language;
        self.current = language;
        changed
    }
}

/// Every user-facing string of the page for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    pub app_title: &'static str,
    pub subtitle: &'static str,
    pub generator_heading: &'static str,
    pub title_input: &'static str,
    pub title_placeholder: &'static str,
    pub url_input: &'static str,
    pub url_placeholder: &'static str,
    /// Shown while typing an invalid URL.
    pub url_error: &'static str,
    /// Shown when an export is attempted without a valid URL.
    pub url_required: &'static str,
    /// Shown when a valid URL does not fit in a QR code.
    pub url_too_long: &'static str,
    pub extra_text_input: &'static str,
    pub extra_text_placeholder: &'static str,
    pub show_nfc: &'static str,
    pub dark_mode: &'static str,
    pub download_button: &'static str,
    pub default_title: &'static str,
    pub tap_phone: &'static str,
    pub scan_qr: &'static str,
    pub for_restaurants: &'static str,
    pub for_restaurants_desc: &'static str,
    pub for_shops: &'static str,
    pub for_shops_desc: &'static str,
    pub for_services: &'static str,
    pub for_services_desc: &'static str,
    pub commercial_title: &'static str,
    pub commercial_desc: &'static str,
    pub contact_email: &'static str,
    /// `<meta name="description">` content.
    pub meta_description: &'static str,
}

const CONTACT_EMAIL: &str = "aprin.farbod@digimenue.de";

/// English strings.
pub static EN: Strings = Strings {
    app_title: "Google Review QR Code Generator",
    subtitle: "Create professional QR codes for your Google reviews. Perfect for restaurants, shops, and businesses.",
    generator_heading: "Review Generator",
    title_input: "Title Text",
    title_placeholder: "Enter title text",
    url_input: "QR Code URL",
    url_placeholder: "https://example.com",
    url_error: "Please enter a valid URL (e.g., https://example.com)",
    url_required: "Please enter a valid URL before downloading",
    url_too_long: "This URL is too long to fit in a QR code",
    extra_text_input: "Extra Text (Optional)",
    extra_text_placeholder: "Enter additional text",
    show_nfc: "Show NFC Logo",
    dark_mode: "Dark Mode",
    download_button: "Download QR Code",
    default_title: "Rate us!",
    tap_phone: "Tap phone",
    scan_qr: "Scan QR Code",
    for_restaurants: "For Restaurants",
    for_restaurants_desc: "Perfect for table stands and menu displays. Encourage diners to leave reviews easily.",
    for_shops: "For Retail Shops",
    for_shops_desc: "Display at checkout counters and reception areas. Boost your local business visibility.",
    for_services: "For Service Businesses",
    for_services_desc: "Professional stands with NFC support. Make it easy for clients to share their experience.",
    commercial_title: "Get Your High-Quality Google Review Stands Starting from Just 7€! ✨",
    commercial_desc: "Upgrade your business with our shining, durable, hard plastic stands, perfect for restaurants, shops, and service businesses. We offer custom QR code generation and fast delivery at an unbeatable price!",
    contact_email: CONTACT_EMAIL,
    meta_description: "Generate custom QR codes for Google reviews. Perfect for restaurants, shops, and businesses. Create professional review stands with NFC support.",
};

/// German strings.
pub static DE: Strings = Strings {
    app_title: "Google Bewertung QR-Code Generator",
    subtitle: "Erstellen Sie professionelle QR-Codes für Ihre Google-Bewertungen. Perfekt für Restaurants, Geschäfte und Unternehmen.",
    generator_heading: "Bewertungs-Generator",
    title_input: "Titel Text",
    title_placeholder: "Titel eingeben",
    url_input: "QR-Code URL",
    url_placeholder: "https://example.com",
    url_error: "Bitte geben Sie eine gültige URL ein (z.B. https://example.com)",
    url_required: "Bitte geben Sie vor dem Herunterladen eine gültige URL ein",
    url_too_long: "Diese URL ist zu lang für einen QR-Code",
    extra_text_input: "Zusätzlicher Text (Optional)",
    extra_text_placeholder: "Zusätzlichen Text eingeben",
    show_nfc: "NFC-Logo anzeigen",
    dark_mode: "Dunkelmodus",
    download_button: "QR-Code herunterladen",
    default_title: "Bewerten Sie uns!",
    tap_phone: "Telefon antippen",
    scan_qr: "QR-Code scannen",
    for_restaurants: "Für Restaurants",
    for_restaurants_desc: "Perfekt für Tischaufsteller und Menüdisplays. Ermutigen Sie Gäste einfach Bewertungen abzugeben.",
    for_shops: "Für Einzelhandel",
    for_shops_desc: "Zeigen Sie den Code an Kassen und Empfangsbereichen. Steigern Sie Ihre lokale Geschäftspräsenz.",
    for_services: "Für Dienstleister",
    for_services_desc: "Professionelle Aufsteller mit NFC-Unterstützung. Erleichtern Sie Ihren Kunden das Teilen ihrer Erfahrungen.",
    commercial_title: "Sichern Sie sich Ihre hochwertigen Google-Bewertungsständer ab nur 7€! ✨",
    commercial_desc: "Werten Sie Ihr Unternehmen mit unseren glänzenden, langlebigen Hartplastikständern auf, perfekt für Restaurants, Geschäfte und Dienstleistungsunternehmen. Wir bieten individuelle QR-Code-Generierung und schnelle Lieferung zu einem unschlagbaren Preis!",
    contact_email: CONTACT_EMAIL,
    meta_description: "Erstellen Sie individuelle QR-Codes für Google-Bewertungen. Perfekt für Restaurants, Geschäfte und Unternehmen. Professionelle Bewertungsständer mit NFC-Unterstützung.",
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english() {
        assert_eq!(LanguageState::new().current(), Language::En);
    }

    #[test]
    fn guess_switches_once() {
        let mut state = LanguageState::new();
        assert!(state.apply_guess(Some(Language::De)));
        assert_eq!(state.current(), Language::De);

        // A second guess is ignored.
        assert!(!state.apply_guess(Some(Language::En)));
        assert_eq!(state.current(), Language::De);
    }

    #[test]
    fn no_guess_keeps_current() {
        let mut state = LanguageState::new();
        assert!(!state.apply_guess(None));
        assert_eq!(state.current(), Language::En);
    }

    #[test]
    fn manual_choice_beats_late_guess() {
        let mut state = LanguageState::new();
        state.set(Language::En);
        assert!(!state.apply_guess(Some(Language::De)));
        assert_eq!(state.current(), Language::En);
    }

    #[test]
    fn manual_choice_after_guess_wins() {
        let mut state = LanguageState::new();
        state.apply_guess(Some(Language::De));
        state.set(Language::En);
        assert_eq!(state.current(), Language::En);
    }

    #[test]
    fn default_titles_are_localized() {
        assert_eq!(Language::En.strings().default_title, "Rate us!");
        assert_eq!(Language::De.strings().default_title, "Bewerten Sie uns!");
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Language::De).unwrap();
        assert_eq!(json, "\"de\"");
    }
}
