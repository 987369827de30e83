//! FAQ storage capability.
//!
//! [`FaqStore`] is the object-safe interface the API layer holds. The
//! production implementation is [`PgFaqStore`], a thin wrapper over
//! [`FaqRepo`]. [`MemoryFaqStore`] keeps everything in process and is used for
//! local runs without a database and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use faqdesk_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::faq::{CreateFaq, Faq, UpdateFaq};
use crate::repositories::FaqRepo;
use crate::DbPool;

/// Persistent FAQ records.
///
/// Listing operations return records ordered by `created_at` descending,
/// then `id` descending.
#[async_trait]
pub trait FaqStore: Send + Sync {
    async fn create(&self, input: &CreateFaq) -> Result<Faq, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Faq>, sqlx::Error>;

    async fn list(&self) -> Result<Vec<Faq>, sqlx::Error>;

    /// Case-insensitive substring match over all question/answer fields.
    async fn search(&self, term: &str) -> Result<Vec<Faq>, sqlx::Error>;

    /// Apply the provided fields. `None` if the record does not exist.
    async fn update(&self, id: DbId, input: &UpdateFaq) -> Result<Option<Faq>, sqlx::Error>;

    /// Overwrite every editable field. `None` if the record does not exist.
    async fn replace(&self, id: DbId, input: &CreateFaq) -> Result<Option<Faq>, sqlx::Error>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Confirm the backing store is usable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

// ---------------------------------------------------------------------------
// Postgres
// ---------------------------------------------------------------------------

/// [`FaqStore`] backed by the `faqs` table.
#[derive(Clone)]
pub struct PgFaqStore {
    pool: DbPool,
}

impl PgFaqStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FaqStore for PgFaqStore {
    async fn create(&self, input: &CreateFaq) -> Result<Faq, sqlx::Error> {
        FaqRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        FaqRepo::find_by_id(&self.pool, id).await
    }

    async fn list(&self) -> Result<Vec<Faq>, sqlx::Error> {
        FaqRepo::list(&self.pool).await
    }

    async fn search(&self, term: &str) -> Result<Vec<Faq>, sqlx::Error> {
        FaqRepo::search(&self.pool, term).await
    }

    async fn update(&self, id: DbId, input: &UpdateFaq) -> Result<Option<Faq>, sqlx::Error> {
        FaqRepo::update(&self.pool, id, input).await
    }

    async fn replace(&self, id: DbId, input: &CreateFaq) -> Result<Option<Faq>, sqlx::Error> {
        FaqRepo::replace(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        FaqRepo::delete(&self.pool, id).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct MemoryState {
    last_id: DbId,
    rows: HashMap<DbId, Faq>,
}

/// Process-local [`FaqStore`]. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryFaqStore {
    state: RwLock<MemoryState>,
}

impl MemoryFaqStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_newest_first(rows: &mut [Faq]) {
    rows.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

fn matches_term(faq: &Faq, needle: &str) -> bool {
    let fields = [
        Some(faq.question.as_str()),
        Some(faq.answer.as_str()),
        faq.question_hi.as_deref(),
        faq.answer_hi.as_deref(),
        faq.question_bn.as_deref(),
        faq.answer_bn.as_deref(),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(needle))
}

#[async_trait]
impl FaqStore for MemoryFaqStore {
    async fn create(&self, input: &CreateFaq) -> Result<Faq, sqlx::Error> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let now = Utc::now();
        let faq = Faq {
            id: state.last_id,
            question: input.question.clone(),
            answer: input.answer.clone(),
            question_hi: input.question_hi.clone(),
            answer_hi: input.answer_hi.clone(),
            question_bn: input.question_bn.clone(),
            answer_bn: input.answer_bn.clone(),
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(faq.id, faq.clone());
        Ok(faq)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Faq>, sqlx::Error> {
        let mut rows: Vec<Faq> = self.state.read().await.rows.values().cloned().collect();
        sort_newest_first(&mut rows);
        Ok(rows)
    }

    async fn search(&self, term: &str) -> Result<Vec<Faq>, sqlx::Error> {
        let needle = term.to_lowercase();
        let mut rows: Vec<Faq> = self
            .state
            .read()
            .await
            .rows
            .values()
            .filter(|faq| matches_term(faq, &needle))
            .cloned()
            .collect();
        sort_newest_first(&mut rows);
        Ok(rows)
    }

    async fn update(&self, id: DbId, input: &UpdateFaq) -> Result<Option<Faq>, sqlx::Error> {
        let mut state = self.state.write().await;
        let Some(faq) = state.rows.get_mut(&id) else {
            return Ok(None);
        };
        input.apply_to(faq);
        faq.updated_at = Utc::now();
        Ok(Some(faq.clone()))
    }

    async fn replace(&self, id: DbId, input: &CreateFaq) -> Result<Option<Faq>, sqlx::Error> {
        let mut state = self.state.write().await;
        let Some(faq) = state.rows.get_mut(&id) else {
            return Ok(None);
        };
        faq.question = input.question.clone();
        faq.answer = input.answer.clone();
        faq.question_hi = input.question_hi.clone();
        faq.answer_hi = input.answer_hi.clone();
        faq.question_bn = input.question_bn.clone();
        faq.answer_bn = input.answer_bn.clone();
        faq.updated_at = Utc::now();
        Ok(Some(faq.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
