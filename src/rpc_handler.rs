//! RPC method handler for the LendHand UI shell.
//!
//! The `handle_method` function dispatches method calls from the UI layer
//! to the appropriate managers and services via the `App` struct. Params
//! arrive as loosely-shaped JSON — this is where raw listing records enter
//! the bookmark store.

use serde_json::{json, Value};

use crate::app::App;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::bookmark::{BookmarkRecord, ImageHandle};
use crate::types::session::UserAccount;

/// Dispatches a method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method(app: &App, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Bookmarks ───
        "bookmark.toggle" => {
            let item = params.get("item").ok_or("missing item")?;
            match app.bookmark_store.toggle(item) {
                Some(saved) => Ok(json!({"saved": saved})),
                // Unusable input is ignored, not an error: the screens
                // forward whatever record they were rendering.
                None => Ok(json!({"saved": false, "ignored": true})),
            }
        }
        "bookmark.is_saved" => {
            let id = params.get("id").and_then(Value::as_i64).ok_or("missing id")?;
            Ok(json!({"saved": app.bookmark_store.is_saved(id)}))
        }
        "bookmark.list" => {
            let mut records: Vec<BookmarkRecord> =
                app.bookmark_store.snapshot().into_values().collect();
            records.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
            let arr: Vec<Value> = records.iter().map(bookmark_to_json).collect();
            Ok(json!(arr))
        }
        "bookmark.remove" => {
            let id = params.get("id").and_then(Value::as_i64).ok_or("missing id")?;
            app.bookmark_store.remove(id);
            Ok(json!({"ok": true}))
        }
        "bookmark.clear" => {
            app.bookmark_store.clear();
            Ok(json!({"ok": true}))
        }

        // ─── Session ───
        "session.login" => {
            let id = params.get("id").and_then(Value::as_str).ok_or("missing id")?;
            let display_name = params
                .get("display_name")
                .and_then(Value::as_str)
                .ok_or("missing display_name")?;
            let mut account = UserAccount::new(id, display_name);
            account.neighborhood = params
                .get("neighborhood")
                .and_then(Value::as_str)
                .map(str::to_string);

            app.session_manager.login(account).await;
            app.bookmark_store
                .set_active_user(Some(id.to_string()))
                .await;
            Ok(json!({"ok": true}))
        }
        "session.logout" => {
            app.session_manager.logout().await;
            app.bookmark_store.set_active_user(None).await;
            Ok(json!({"ok": true}))
        }
        "session.current" => match app.session_manager.current_account() {
            Some(account) => serde_json::to_value(account).map_err(|e| e.to_string()),
            None => Ok(Value::Null),
        },

        // ─── Catalog ───
        "catalog.list" => serde_json::to_value(app.catalog.list()).map_err(|e| e.to_string()),
        "catalog.get" => {
            let id = params.get("id").and_then(Value::as_i64).ok_or("missing id")?;
            let item = app.catalog.get(id).ok_or(format!("item not found: {}", id))?;
            serde_json::to_value(item).map_err(|e| e.to_string())
        }
        "catalog.request" => {
            let id = params.get("id").and_then(Value::as_i64).ok_or("missing id")?;
            let borrower = app.session_manager.user_id().ok_or("not signed in")?;
            let request = app
                .catalog
                .request_item(id, &borrower)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(request).map_err(|e| e.to_string())
        }
        "catalog.return" => {
            let id = params.get("id").and_then(Value::as_i64).ok_or("missing id")?;
            app.catalog.return_item(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            let engine = app.settings_engine.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(Value::as_str).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut engine = app.settings_engine.lock().map_err(|e| e.to_string())?;
            engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

/// Serializes a bookmark record for the UI, including the resolved image
/// handle in a renderable shape.
fn bookmark_to_json(record: &BookmarkRecord) -> Value {
    let image = match &record.image {
        Some(ImageHandle::Asset(asset)) => json!({"asset": asset}),
        Some(ImageHandle::Remote(url)) => json!({"uri": url}),
        None => Value::Null,
    };
    json!({
        "id": record.id,
        "title": record.title,
        "status": record.status,
        "count": record.count,
        "category": record.category,
        "imageReference": record.image_ref,
        "image": image,
    })
}
