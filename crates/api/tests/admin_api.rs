//! Integration tests for the bearer-token admin surface.

mod common;

use std::time::Duration;

use axum::http::{Method, StatusCode};
use faqdesk_core::cache::CacheStore;
use serde_json::json;

use common::{
    admin, authorized, body_json, build_test_app, build_test_app_with, create_faq, get, send,
    test_config,
};

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_token_returns_401() {
    let app = build_test_app();

    let response = get(app.app(), "/admin/faqs").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn wrong_token_returns_401() {
    let app = build_test_app();

    let request = authorized(Method::GET, "/admin/faqs", "nope", None);
    let response = send(app.app(), request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_disabled_without_token_returns_403() {
    let mut config = test_config();
    config.admin_token = None;
    let app = build_test_app_with(config);

    let request = authorized(Method::GET, "/admin/faqs", "anything", None);
    let response = send(app.app(), request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_get_return_raw_record() {
    let app = build_test_app();

    let request = admin(
        Method::POST,
        "/admin/faqs",
        Some(json!({"question": "Q", "answer": "A", "question_hi": "Q_hi"})),
    );
    let response = send(app.app(), request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["question_hi"], "Q_hi");
    assert!(created["data"]["answer_bn"].is_null());

    let request = admin(Method::GET, &format!("/admin/faqs/{id}"), None);
    let fetched = body_json(send(app.app(), request).await).await;
    assert_eq!(fetched["data"]["question"], "Q");
    assert_eq!(fetched["data"]["question_hi"], "Q_hi");
}

#[tokio::test]
async fn search_filters_across_languages() {
    let app = build_test_app();
    create_faq(&app, json!({"question": "Shipping times", "answer": "A"})).await;
    create_faq(
        &app,
        json!({"question": "Refunds", "answer": "B", "answer_hi": "Paisa vapasi niti"}),
    )
    .await;

    let request = admin(Method::GET, "/admin/faqs?search=SHIPPING", None);
    let json = body_json(send(app.app(), request).await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["question"], "Shipping times");

    let request = admin(Method::GET, "/admin/faqs?search=Vapasi", None);
    let json = body_json(send(app.app(), request).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let request = admin(Method::GET, "/admin/faqs?search=%20", None);
    let json = body_json(send(app.app(), request).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_invalidates_translation_cache() {
    let app = build_test_app();
    let id = create_faq(
        &app,
        json!({"question": "Q", "answer": "A", "question_hi": "Q_hi"}),
    )
    .await;
    get(app.app(), "/faqs/?lang=hi").await;
    let key = format!("faq_{id}_hi");
    assert!(app.cache.get(&key).await.unwrap().is_some());

    let request = admin(
        Method::PUT,
        &format!("/admin/faqs/{id}"),
        Some(json!({"question_hi": "Q_hi2"})),
    );
    let response = send(app.app(), request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["question_hi"], "Q_hi2");
    assert!(app.cache.get(&key).await.unwrap().is_none());

    let json = body_json(get(app.app(), "/faqs/?lang=hi").await).await;
    assert_eq!(json[0]["question"], "Q_hi2");
}

#[tokio::test]
async fn empty_update_returns_400() {
    let app = build_test_app();
    let id = create_faq(&app, json!({"question": "Q", "answer": "A"})).await;

    let request = admin(Method::PUT, &format!("/admin/faqs/{id}"), Some(json!({})));
    let response = send(app.app(), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = build_test_app();
    let id = create_faq(&app, json!({"question": "Q", "answer": "A"})).await;

    let request = admin(Method::DELETE, &format!("/admin/faqs/{id}"), None);
    assert_eq!(send(app.app(), request).await.status(), StatusCode::NO_CONTENT);

    let request = admin(Method::GET, &format!("/admin/faqs/{id}"), None);
    assert_eq!(send(app.app(), request).await.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

#[tokio::test]
async fn clear_cache_drops_translations_and_pages() {
    let app = build_test_app();
    let id = create_faq(&app, json!({"question": "Q", "answer": "A"})).await;
    get(app.app(), "/faqs/").await;
    get(app.app(), "/").await;
    assert!(!app.cache.is_empty().await);

    let request = admin(Method::POST, "/admin/cache/clear", None);
    let response = send(app.app(), request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["cleared"], true);

    assert!(app.cache.get(&format!("faq_{id}_en")).await.unwrap().is_none());
    assert!(app.cache.get("page:/").await.unwrap().is_none());
}

#[tokio::test]
async fn purge_drops_only_expired_entries() {
    let app = build_test_app();
    app.cache
        .set("stale", "v".into(), Duration::from_millis(5))
        .await
        .unwrap();
    app.cache
        .set("fresh", "v".into(), Duration::from_secs(3600))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;

    let request = admin(Method::POST, "/admin/cache/purge", None);
    let response = send(app.app(), request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["purged"], 1);

    assert_eq!(app.cache.len().await, 1);
    assert!(app.cache.get("fresh").await.unwrap().is_some());
}
