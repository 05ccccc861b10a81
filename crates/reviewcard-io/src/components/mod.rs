//! Dioxus UI components for reviewcard.
//!
//! Components read the active language from a `Signal<LanguageState>`
//! context provided at the app root, and share the card through a
//! `Signal<CardState>` prop.

mod card_form;
mod export;
mod language_switch;
mod preview;

pub use card_form::CardForm;
pub use export::ExportButton;
pub use language_switch::LanguageSwitch;
pub use preview::CardPreview;
