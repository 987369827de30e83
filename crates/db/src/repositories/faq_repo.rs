//! Repository for the `faqs` table.

use faqdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::faq::{CreateFaq, Faq, UpdateFaq};

/// Column list for `faqs` queries.
const COLUMNS: &str = "\
    id, question, answer, question_hi, answer_hi, \
    question_bn, answer_bn, created_at, updated_at";

/// Default listing order: newest first, insertion order within a timestamp.
const ORDER_BY: &str = "ORDER BY created_at DESC, id DESC";

/// Provides CRUD operations for FAQs.
pub struct FaqRepo;

impl FaqRepo {
    /// Insert a new FAQ, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFaq) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs \
                 (question, answer, question_hi, answer_hi, question_bn, answer_bn) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.question_hi)
            .bind(&input.answer_hi)
            .bind(&input.question_bn)
            .bind(&input.answer_bn)
            .fetch_one(pool)
            .await
    }

    /// Find an FAQ by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = $1");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all FAQs, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs {ORDER_BY}");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search across every question and answer
    /// column, in all languages. Newest first.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faqs \
             WHERE question ILIKE $1 OR answer ILIKE $1 \
                OR question_hi ILIKE $1 OR answer_hi ILIKE $1 \
                OR question_bn ILIKE $1 OR answer_bn ILIKE $1 \
             {ORDER_BY}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(like_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Partially update an FAQ. Only non-`None` fields in the DTO are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaq,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET \
                 question = COALESCE($2, question), \
                 answer = COALESCE($3, answer), \
                 question_hi = COALESCE($4, question_hi), \
                 answer_hi = COALESCE($5, answer_hi), \
                 question_bn = COALESCE($6, question_bn), \
                 answer_bn = COALESCE($7, answer_bn), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.question_hi)
            .bind(&input.answer_hi)
            .bind(&input.question_bn)
            .bind(&input.answer_bn)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every editable field. Omitted translations become `NULL`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateFaq,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET \
                 question = $2, answer = $3, \
                 question_hi = $4, answer_hi = $5, \
                 question_bn = $6, answer_bn = $7, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.question_hi)
            .bind(&input.answer_hi)
            .bind(&input.question_bn)
            .bind(&input.answer_bn)
            .fetch_optional(pool)
            .await
    }

    /// Delete an FAQ by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of FAQs.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM faqs")
            .fetch_one(pool)
            .await
    }
}

/// Build an `ILIKE` pattern matching `term` literally anywhere in a column.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
