//! Unit tests for the RPC dispatch surface.
//!
//! Drives the same method calls the UI shell makes, end to end through an
//! in-memory `App`.

use serde_json::{json, Value};

use lendhand::app::App;
use lendhand::rpc_handler::handle_method;

async fn login(app: &App, id: &str, name: &str) {
    handle_method(
        app,
        "session.login",
        &json!({"id": id, "display_name": name}),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_bookmark_flow_through_rpc() {
    let app = App::open_in_memory();
    login(&app, "u42", "Maya").await;

    // Toggle a server-shaped listing straight from the catalog
    let items = handle_method(&app, "catalog.list", &json!({})).await.unwrap();
    let first = items.as_array().unwrap()[0].clone();
    let result = handle_method(&app, "bookmark.toggle", &json!({ "item": first }))
        .await
        .unwrap();
    assert_eq!(result, json!({"saved": true}));

    let id = first.get("item_id").and_then(Value::as_i64).unwrap();
    let saved = handle_method(&app, "bookmark.is_saved", &json!({ "id": id }))
        .await
        .unwrap();
    assert_eq!(saved, json!({"saved": true}));

    let list = handle_method(&app, "bookmark.list", &json!({})).await.unwrap();
    let records = list.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("id").and_then(Value::as_i64), Some(id));
    // The first seeded listing's photo is a bundled asset
    assert_eq!(
        records[0].get("imageReference").and_then(Value::as_str),
        Some("drill")
    );
    assert_eq!(records[0]["image"], json!({"asset": 1}));

    handle_method(&app, "bookmark.remove", &json!({ "id": id }))
        .await
        .unwrap();
    let list = handle_method(&app, "bookmark.list", &json!({})).await.unwrap();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_bookmark_toggle_with_unusable_input_is_ignored() {
    let app = App::open_in_memory();
    login(&app, "u42", "Maya").await;

    let result = handle_method(
        &app,
        "bookmark.toggle",
        &json!({"item": {"id": "abc", "title": "X"}}),
    )
    .await
    .unwrap();
    assert_eq!(result, json!({"saved": false, "ignored": true}));

    let list = handle_method(&app, "bookmark.list", &json!({})).await.unwrap();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_switch_isolates_bookmarks() {
    let app = App::open_in_memory();

    login(&app, "a", "Ann").await;
    handle_method(
        &app,
        "bookmark.toggle",
        &json!({"item": {"id": 7, "title": "Tent"}}),
    )
    .await
    .unwrap();
    app.bookmark_store.flush().await;

    login(&app, "b", "Ben").await;
    let saved = handle_method(&app, "bookmark.is_saved", &json!({"id": 7}))
        .await
        .unwrap();
    assert_eq!(saved, json!({"saved": false}));

    login(&app, "a", "Ann").await;
    let saved = handle_method(&app, "bookmark.is_saved", &json!({"id": 7}))
        .await
        .unwrap();
    assert_eq!(saved, json!({"saved": true}));
}

#[tokio::test]
async fn test_logout_empties_the_visible_set() {
    let app = App::open_in_memory();
    login(&app, "u42", "Maya").await;
    handle_method(
        &app,
        "bookmark.toggle",
        &json!({"item": {"id": 7, "title": "Tent"}}),
    )
    .await
    .unwrap();

    handle_method(&app, "session.logout", &json!({})).await.unwrap();

    let current = handle_method(&app, "session.current", &json!({})).await.unwrap();
    assert_eq!(current, Value::Null);
    let list = handle_method(&app, "bookmark.list", &json!({})).await.unwrap();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_catalog_request_requires_a_session() {
    let app = App::open_in_memory();

    let result = handle_method(&app, "catalog.request", &json!({"id": 1})).await;
    assert_eq!(result, Err("not signed in".to_string()));

    login(&app, "u42", "Maya").await;
    let request = handle_method(&app, "catalog.request", &json!({"id": 1}))
        .await
        .unwrap();
    assert_eq!(request.get("item_id").and_then(Value::as_i64), Some(1));
    assert_eq!(
        request.get("borrower").and_then(Value::as_str),
        Some("u42")
    );

    // A second request against the same listing fails
    assert!(handle_method(&app, "catalog.request", &json!({"id": 1}))
        .await
        .is_err());

    handle_method(&app, "catalog.return", &json!({"id": 1}))
        .await
        .unwrap();
    let item = handle_method(&app, "catalog.get", &json!({"id": 1}))
        .await
        .unwrap();
    assert_eq!(
        item.get("request_status").and_then(Value::as_str),
        Some("none")
    );
}

#[tokio::test]
async fn test_settings_roundtrip_through_rpc() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("lendhand.db");
    let settings_path = dir.path().join("settings.json");
    let app = App::open(
        db_path.to_str().unwrap(),
        Some(settings_path.to_string_lossy().to_string()),
    )
    .unwrap();

    let settings = handle_method(&app, "settings.get", &json!({})).await.unwrap();
    assert_eq!(
        settings["general"]["language"].as_str(),
        Some("en")
    );

    handle_method(
        &app,
        "settings.set",
        &json!({"key": "general.language", "value": "fr"}),
    )
    .await
    .unwrap();

    let settings = handle_method(&app, "settings.get", &json!({})).await.unwrap();
    assert_eq!(settings["general"]["language"].as_str(), Some("fr"));

    // Unknown keys are rejected
    assert!(handle_method(
        &app,
        "settings.set",
        &json!({"key": "general.nope", "value": 1}),
    )
    .await
    .is_err());
}

#[tokio::test]
async fn test_unknown_method_is_rejected() {
    let app = App::open_in_memory();
    let result = handle_method(&app, "bookmark.frobnicate", &json!({})).await;
    assert!(result.unwrap_err().contains("unknown method"));
}

#[tokio::test]
async fn test_startup_restores_session_and_bookmarks() {
    let app = App::open_in_memory();
    login(&app, "u42", "Maya").await;
    handle_method(
        &app,
        "bookmark.toggle",
        &json!({"item": {"id": 5, "title": "Drill"}}),
    )
    .await
    .unwrap();
    app.shutdown().await;

    // Simulated relaunch over the same storage handle
    let relaunched = App::with_store(app.kv.clone());
    relaunched.startup().await;

    assert_eq!(
        relaunched.session_manager.user_id().as_deref(),
        Some("u42")
    );
    assert!(relaunched.bookmark_store.is_saved(5));
}
