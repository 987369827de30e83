//! Shared query parameter types for API handlers.

use faqdesk_core::language::DEFAULT_LANGUAGE_CODE;
use serde::Deserialize;

/// Language selector (`?lang=`), defaulting to English.
///
/// Any string is accepted; unrecognised codes resolve to the base text.
#[derive(Debug, Default)]
pub struct LangParams {
    pub lang: Option<String>,
}

impl LangParams {
    /// Build from decoded query pairs. The last `lang` wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let lang = pairs
            .into_iter()
            .filter(|(key, _)| key == "lang")
            .map(|(_, value)| value)
            .last();
        Self { lang }
    }

    pub fn code(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANGUAGE_CODE)
    }
}

/// Free-text filter for the admin listing (`?search=`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

impl SearchParams {
    /// The trimmed search term, or `None` when absent or blank.
    pub fn term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
