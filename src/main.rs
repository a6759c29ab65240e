//! LendHand — client core for a neighborhood item-lending service.
//!
//! Entry point: runs an interactive console demo of the core components.
//! The real UI shell drives the same `App` through `rpc_handler`.

use std::sync::Arc;

use serde_json::json;

use lendhand::app::App;
use lendhand::managers::bookmark_store::BookmarkStore;
use lendhand::rpc_handler::handle_method;
use lendhand::services::image_table::ImageTable;
use lendhand::storage::{KeyValueStore, MemoryKeyValueStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!();
    println!("LendHand v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!("Client core for the neighborhood item-lending service");
    println!();

    demo_catalog().await;
    demo_bookmarks().await;
    demo_restart().await;
    demo_rpc().await;

    println!("All components demonstrated.");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────");
}

async fn demo_catalog() {
    section("Item catalog");

    let app = App::open_in_memory();
    for item in app.catalog.list() {
        println!(
            "  #{} {} / {} ({}, {})",
            item.item_id, item.name, item.owner, item.category, item.request_status
        );
    }
    println!("  Live feed would come from {}", app.api.base_url());
    println!();
}

async fn demo_bookmarks() {
    section("Bookmark store");

    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
    let store = BookmarkStore::new(kv, Arc::new(ImageTable::builtin()));
    store.set_active_user(Some("u42".to_string())).await;

    // A UI-local candidate and a server-shaped listing both normalize.
    store.toggle(&json!({"id": 5, "title": "Drill"}));
    store.toggle(&json!({"item_id": 9, "name": "Ladder", "request_status": "lent", "image": "ladder"}));
    println!("  Saved {} items for u42", store.len());
    println!("  is_saved(5) = {}", store.is_saved(5));

    // Toggling again unsaves.
    store.toggle(&json!({"id": 5, "title": "Drill"}));
    println!("  After second toggle: is_saved(5) = {}", store.is_saved(5));

    // Malformed input is silently ignored.
    store.toggle(&json!({"id": "abc", "title": "X"}));
    println!("  Malformed toggle ignored, {} item(s) saved", store.len());
    println!();
}

async fn demo_restart() {
    section("Persist and reload");

    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryKeyValueStore::new());
    {
        let store = BookmarkStore::new(kv.clone(), Arc::new(ImageTable::builtin()));
        store.set_active_user(Some("u42".to_string())).await;
        store.toggle(&json!({"id": 5, "title": "Drill", "image": "drill"}));
        store.flush().await;
        println!("  Saved 1 item, flushed to storage");
    }

    // Fresh store over the same storage: the set survives.
    let store = BookmarkStore::new(kv, Arc::new(ImageTable::builtin()));
    store.set_active_user(Some("u42".to_string())).await;
    let record = store.get(5).expect("bookmark should survive reload");
    println!(
        "  Reloaded for u42: '{}' (status {}, image {:?})",
        record.title, record.status, record.image
    );

    // Another user sees an empty set.
    store.set_active_user(Some("u7".to_string())).await;
    println!("  Switched to u7: {} item(s)", store.len());
    println!();
}

async fn demo_rpc() {
    section("RPC surface");

    let app = App::open_in_memory();
    app.startup().await;

    handle_method(
        &app,
        "session.login",
        &json!({"id": "u42", "display_name": "Maya"}),
    )
    .await
    .unwrap();
    println!(
        "  Signed in as {:?}",
        app.session_manager
            .current_account()
            .map(|a| a.display_name)
    );

    let items = handle_method(&app, "catalog.list", &json!({})).await.unwrap();
    let first = items.get(0).cloned().unwrap_or_default();
    let toggled = handle_method(&app, "bookmark.toggle", &json!({ "item": first }))
        .await
        .unwrap();
    println!("  Toggled first listing: {}", toggled);

    let list = handle_method(&app, "bookmark.list", &json!({})).await.unwrap();
    println!(
        "  bookmark.list returned {} record(s)",
        list.as_array().map(Vec::len).unwrap_or(0)
    );

    let requested = handle_method(&app, "catalog.request", &json!({"id": 1}))
        .await
        .unwrap();
    println!("  Requested item 1: {}", requested);

    app.shutdown().await;
    println!();
}
