//! Per-record translation resolution with memoization.
//!
//! [`resolve_fields`] picks the effective question/answer pair for a
//! language, falling back to the base text whenever an override is missing
//! or empty. [`TranslationCache`] memoizes that result in a shared
//! [`CacheStore`] under `faq_{id}_{code}` for one hour, and clears all
//! supported-language entries for a record when it changes.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::CacheStore;
use crate::language::{Language, SUPPORTED_LANGUAGES};
use crate::types::DbId;

/// How long a resolved field pair stays cached.
pub const TRANSLATION_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Effective question/answer pair for one record in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedFields {
    pub question: String,
    pub answer: String,
}

/// Override text stored for a non-base language. Either side may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantText<'a> {
    pub question: Option<&'a str>,
    pub answer: Option<&'a str>,
}

/// A record whose text can be resolved per language.
pub trait Translatable {
    /// Identifier used to build cache keys.
    fn translation_id(&self) -> DbId;

    fn base_question(&self) -> &str;

    fn base_answer(&self) -> &str;

    /// Stored overrides for `language`. The base language has none.
    fn variant(&self, language: Language) -> VariantText<'_>;
}

/// Resolve the effective text of `record` for the language `code`.
///
/// Recognised non-base codes use their override when it is non-empty and the
/// base text otherwise. `en` and every unrecognised code return the base text
/// verbatim.
pub fn resolve_fields<T: Translatable + ?Sized>(record: &T, code: &str) -> TranslatedFields {
    let base_question = record.base_question();
    let base_answer = record.base_answer();

    let (question, answer) = match Language::from_code(code).filter(|lang| !lang.is_base()) {
        Some(language) => {
            let variant = record.variant(language);
            (
                non_empty(variant.question).unwrap_or(base_question),
                non_empty(variant.answer).unwrap_or(base_answer),
            )
        }
        None => (base_question, base_answer),
    };

    TranslatedFields {
        question: question.to_owned(),
        answer: answer.to_owned(),
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// Memoizing front for [`resolve_fields`] backed by a shared [`CacheStore`].
///
/// Cache failures never reach the caller: reads fall through to direct
/// resolution and failed writes or deletes are logged.
#[derive(Clone)]
pub struct TranslationCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl TranslationCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self::with_ttl(store, TRANSLATION_CACHE_TTL)
    }

    pub fn with_ttl(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Cache key for one record/language pair.
    pub fn cache_key(id: DbId, code: &str) -> String {
        format!("faq_{id}_{code}")
    }

    /// Resolve `record` for `code`, serving a cached pair when present.
    ///
    /// On a miss the resolved pair is written back with the configured TTL.
    pub async fn get_translated_fields<T: Translatable + ?Sized + Sync>(
        &self,
        record: &T,
        code: &str,
    ) -> TranslatedFields {
        let id = record.translation_id();
        let key = Self::cache_key(id, code);

        match self.store.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<TranslatedFields>(&raw) {
                Ok(fields) => {
                    tracing::trace!(faq_id = id, lang = code, "Translation cache hit");
                    return fields;
                }
                Err(e) => {
                    tracing::warn!(faq_id = id, lang = code, error = %e, "Discarding undecodable cached translation");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(faq_id = id, lang = code, error = %e, "Translation cache read failed");
            }
        }

        let fields = resolve_fields(record, code);

        match serde_json::to_string(&fields) {
            Ok(raw) => {
                if let Err(e) = self.store.set(&key, raw, self.ttl).await {
                    tracing::warn!(faq_id = id, lang = code, error = %e, "Translation cache write failed");
                }
            }
            Err(e) => {
                tracing::warn!(faq_id = id, lang = code, error = %e, "Failed to encode translation for cache");
            }
        }

        tracing::trace!(faq_id = id, lang = code, "Translation cache miss");
        fields
    }

    /// Drop the cached pairs of record `id` for every supported language.
    pub async fn invalidate(&self, id: DbId) {
        for language in SUPPORTED_LANGUAGES {
            let key = Self::cache_key(id, language.code());
            if let Err(e) = self.store.delete(&key).await {
                tracing::warn!(faq_id = id, key = %key, error = %e, "Translation cache delete failed");
            }
        }
        tracing::debug!(faq_id = id, "Translation cache invalidated");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
