//! Hosting-page integration for the web build.

use eframe::wasm_bindgen::JsValue;
use log::{info, warn};
use useradmin_business::users::ViewerPermissions;
use web_sys::js_sys::{JSON, Reflect};

/// The viewer's permissions from the page's global `userPermissions` object.
///
/// Anything missing or malformed falls back to no permissions.
pub fn page_permissions() -> ViewerPermissions {
    let Some(window) = web_sys::window() else {
        return ViewerPermissions::default();
    };

    let value = match Reflect::get(&window, &JsValue::from_str("userPermissions")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => {
            info!("No userPermissions on the page, using read-only access");
            return ViewerPermissions::default();
        }
    };

    let Ok(json) = JSON::stringify(&value).map(String::from) else {
        warn!("userPermissions is not serializable");
        return ViewerPermissions::default();
    };

    serde_json::from_str(&json).unwrap_or_else(|err| {
        warn!("Ignoring malformed userPermissions {json}: {err}");
        ViewerPermissions::default()
    })
}
