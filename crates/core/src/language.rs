//! Supported content languages.
//!
//! English is the base language stored in the plain `question` / `answer`
//! columns. Hindi and Bengali are optional per-record overrides. Any code not
//! found in [`LANGUAGE_TABLE`] resolves to the base fields.

use serde::{Deserialize, Serialize};

/// Language code used when a request does not specify one.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// A language the service stores content for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Bengali,
}

/// Code -> language lookup. Order is the order used for cache invalidation.
pub const LANGUAGE_TABLE: [(&str, Language); 3] = [
    ("en", Language::English),
    ("hi", Language::Hindi),
    ("bn", Language::Bengali),
];

/// Every language with a cache slot per record.
pub const SUPPORTED_LANGUAGES: [Language; 3] =
    [Language::English, Language::Hindi, Language::Bengali];

impl Language {
    /// Look up a language by its short code. Matching is exact (`"HI"` is
    /// not Hindi), so unknown or differently-cased codes return `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        LANGUAGE_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, lang)| *lang)
    }

    /// Short code used in query strings and cache keys.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Bengali => "bn",
        }
    }

    /// Human-readable name in the language itself, for the page switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिन्दी",
            Self::Bengali => "বাংলা",
        }
    }

    /// Whether this is the base language (stored without an override).
    pub fn is_base(self) -> bool {
        self == Self::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("hi"), Some(Language::Hindi));
        assert_eq!(Language::from_code("bn"), Some(Language::Bengali));
    }

    #[test]
    fn unknown_codes_return_none() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("HI"), None);
    }

    #[test]
    fn codes_round_trip_through_table() {
        for lang in SUPPORTED_LANGUAGES {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn only_english_is_base() {
        assert!(Language::English.is_base());
        assert!(!Language::Hindi.is_base());
        assert!(!Language::Bengali.is_base());
    }
}
