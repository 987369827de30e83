//! Integration tests for the `faqs` repository and the Postgres cache store.
//!
//! These need a reachable Postgres (`DATABASE_URL`), so they are ignored by
//! default. Run with `cargo test -p faqdesk-db -- --ignored`.

use std::time::Duration;

use faqdesk_core::cache::CacheStore;
use faqdesk_db::models::faq::{CreateFaq, UpdateFaq};
use faqdesk_db::pg_cache::PgCacheStore;
use faqdesk_db::repositories::FaqRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_faq(question: &str) -> CreateFaq {
    CreateFaq {
        question: question.to_string(),
        answer: format!("<p>{question}</p>"),
        question_hi: None,
        answer_hi: None,
        question_bn: None,
        answer_bn: None,
    }
}

// ---------------------------------------------------------------------------
// FaqRepo
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn bootstrap_health_check(pool: PgPool) {
    faqdesk_db::health_check(&pool).await.unwrap();
    assert_eq!(FaqRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn create_and_find(pool: PgPool) {
    let created = FaqRepo::create(
        &pool,
        &CreateFaq {
            question_hi: Some("प्रश्न".into()),
            ..new_faq("Question")
        },
    )
    .await
    .unwrap();

    let found = FaqRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("row exists");
    assert_eq!(found, created);
    assert_eq!(found.question_hi.as_deref(), Some("प्रश्न"));
    assert_eq!(found.answer_bn, None);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn list_orders_newest_first(pool: PgPool) {
    for q in ["R1", "R2", "R3"] {
        FaqRepo::create(&pool, &new_faq(q)).await.unwrap();
    }

    let questions: Vec<String> = FaqRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.question)
        .collect();
    assert_eq!(questions, ["R3", "R2", "R1"]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn partial_update_keeps_unset_fields(pool: PgPool) {
    let created = FaqRepo::create(&pool, &new_faq("Original")).await.unwrap();

    let updated = FaqRepo::update(
        &pool,
        created.id,
        &UpdateFaq {
            question_hi: Some("नया".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("row exists");

    assert_eq!(updated.question, "Original");
    assert_eq!(updated.question_hi.as_deref(), Some("नया"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn replace_nulls_omitted_translations(pool: PgPool) {
    let created = FaqRepo::create(
        &pool,
        &CreateFaq {
            answer_bn: Some("উত্তর".into()),
            ..new_faq("Original")
        },
    )
    .await
    .unwrap();

    let replaced = FaqRepo::replace(&pool, created.id, &new_faq("Replaced"))
        .await
        .unwrap()
        .expect("row exists");
    assert_eq!(replaced.question, "Replaced");
    assert_eq!(replaced.answer_bn, None);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn update_missing_row_returns_none(pool: PgPool) {
    let result = FaqRepo::update(&pool, 999_999, &UpdateFaq::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn delete_reports_whether_row_existed(pool: PgPool) {
    let created = FaqRepo::create(&pool, &new_faq("Delete me")).await.unwrap();
    assert!(FaqRepo::delete(&pool, created.id).await.unwrap());
    assert!(!FaqRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn search_spans_languages_and_escapes_wildcards(pool: PgPool) {
    FaqRepo::create(&pool, &new_faq("What is Django?")).await.unwrap();
    FaqRepo::create(
        &pool,
        &CreateFaq {
            question_bn: Some("পাইথন কী?".into()),
            ..new_faq("100% Python")
        },
    )
    .await
    .unwrap();

    assert_eq!(FaqRepo::search(&pool, "DJANGO").await.unwrap().len(), 1);
    assert_eq!(FaqRepo::search(&pool, "পাইথন").await.unwrap().len(), 1);
    assert_eq!(FaqRepo::search(&pool, "100%").await.unwrap().len(), 1);
    assert_eq!(FaqRepo::search(&pool, "%").await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// PgCacheStore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn pg_cache_set_get_delete(pool: PgPool) {
    let cache = PgCacheStore::new(pool);

    cache
        .set("faq_1_en", "{}".into(), Duration::from_secs(3600))
        .await
        .unwrap();
    assert_eq!(cache.get("faq_1_en").await.unwrap().as_deref(), Some("{}"));

    cache.delete("faq_1_en").await.unwrap();
    assert_eq!(cache.get("faq_1_en").await.unwrap(), None);

    // Deleting a missing key is not an error.
    cache.delete("faq_1_en").await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn pg_cache_expired_entries_are_misses(pool: PgPool) {
    let cache = PgCacheStore::new(pool);

    cache
        .set("short", "v".into(), Duration::from_millis(1))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(cache.get("short").await.unwrap(), None);
    assert_eq!(cache.purge_expired().await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn pg_cache_set_overwrites(pool: PgPool) {
    let cache = PgCacheStore::new(pool);
    let hour = Duration::from_secs(3600);

    cache.set("k", "one".into(), hour).await.unwrap();
    cache.set("k", "two".into(), hour).await.unwrap();
    assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("two"));

    cache.clear().await.unwrap();
    assert_eq!(cache.get("k").await.unwrap(), None);
}
