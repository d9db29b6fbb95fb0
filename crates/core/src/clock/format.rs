//! Locale-sensitive time rendering for the public status badge

use chrono::NaiveDateTime;

/// The languages the public page ships. Tags are matched by prefix, so
/// `de-DE` and `de-AT` both select German; the platform default is German.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    De,
    En,
    Ar,
}

impl Language {
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.is_empty() || tag.starts_with("de") {
            Language::De
        } else if tag.starts_with("ar") {
            Language::Ar
        } else {
            Language::En
        }
    }
}

/// German renders 24-hour `HH:MM`; English and Arabic render zero-padded
/// 12-hour with an AM/PM marker.
pub fn format_time(at: NaiveDateTime, language: Language) -> String {
    match language {
        Language::De => at.format("%H:%M").to_string(),
        Language::En | Language::Ar => at.format("%I:%M %p").to_string(),
    }
}
