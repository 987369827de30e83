//! FAQ operations shared by the JSON API, the admin API and the HTML page.
//!
//! Every mutation of an existing record goes through [`FaqService`], which
//! clears the record's translation cache entries before the store commits
//! the change.

use std::sync::Arc;

use faqdesk_core::translation::TranslationCache;
use faqdesk_core::types::{DbId, Timestamp};
use faqdesk_db::models::faq::{CreateFaq, Faq, UpdateFaq};
use faqdesk_db::store::FaqStore;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// An FAQ with its text resolved for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedFaq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Clone)]
pub struct FaqService {
    store: Arc<dyn FaqStore>,
    translations: TranslationCache,
}

impl FaqService {
    pub fn new(store: Arc<dyn FaqStore>, translations: TranslationCache) -> Self {
        Self {
            store,
            translations,
        }
    }

    pub fn store(&self) -> &Arc<dyn FaqStore> {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub async fn get(&self, id: DbId) -> AppResult<Faq> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::faq_not_found(id))
    }

    /// All records, newest first, optionally filtered by a search term.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Faq>> {
        let rows = match search {
            Some(term) => self.store.search(term).await?,
            None => self.store.list().await?,
        };
        Ok(rows)
    }

    /// Resolve one record for `lang` through the translation cache.
    pub async fn translate(&self, faq: &Faq, lang: &str) -> TranslatedFaq {
        let fields = self.translations.get_translated_fields(faq, lang).await;
        TranslatedFaq {
            id: faq.id,
            question: fields.question,
            answer: fields.answer,
            created_at: faq.created_at,
            updated_at: faq.updated_at,
        }
    }

    pub async fn get_translated(&self, id: DbId, lang: &str) -> AppResult<TranslatedFaq> {
        let faq = self.get(id).await?;
        Ok(self.translate(&faq, lang).await)
    }

    /// Every record resolved for `lang`, newest first.
    pub async fn list_translated(&self, lang: &str) -> AppResult<Vec<TranslatedFaq>> {
        let rows = self.store.list().await?;
        let mut out = Vec::with_capacity(rows.len());
        for faq in &rows {
            out.push(self.translate(faq, lang).await);
        }
        Ok(out)
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    pub async fn create(&self, input: &CreateFaq) -> AppResult<Faq> {
        let faq = self.store.create(input).await?;
        tracing::info!(faq_id = faq.id, question = %faq, "FAQ created");
        Ok(faq)
    }

    /// Apply a partial update. Cache entries are cleared first.
    pub async fn update(&self, id: DbId, input: &UpdateFaq) -> AppResult<Faq> {
        self.translations.invalidate(id).await;
        let faq = self
            .store
            .update(id, input)
            .await?
            .ok_or_else(|| AppError::faq_not_found(id))?;
        tracing::info!(faq_id = id, "FAQ updated");
        Ok(faq)
    }

    /// Overwrite all editable fields. Cache entries are cleared first.
    pub async fn replace(&self, id: DbId, input: &CreateFaq) -> AppResult<Faq> {
        self.translations.invalidate(id).await;
        let faq = self
            .store
            .replace(id, input)
            .await?
            .ok_or_else(|| AppError::faq_not_found(id))?;
        tracing::info!(faq_id = id, "FAQ replaced");
        Ok(faq)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        self.translations.invalidate(id).await;
        if !self.store.delete(id).await? {
            return Err(AppError::faq_not_found(id));
        }
        tracing::info!(faq_id = id, "FAQ deleted");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
