//! WASM bindings for browser-based editing.
//!
//! This module exposes the renderer and the session snapshot operations to
//! JavaScript via wasm-bindgen. Everything crosses the boundary as strings;
//! the host owns localStorage (see [`crate::session::SESSION_KEY`]) and the
//! DOM.

use wasm_bindgen::prelude::*;

use crate::preview::render;
use crate::workspace::Workspace;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Render Markdown source to an HTML string.
///
/// Called on every edit of the active document; the host injects the result
/// into the preview pane. The output is not sanitized.
#[wasm_bindgen]
pub fn render_markdown(source: &str) -> String {
    render(source)
}

/// A fresh session snapshot (one welcome document), as JSON.
#[wasm_bindgen]
pub fn default_session() -> Result<String, JsValue> {
    Workspace::default()
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Normalize a stored session blob.
///
/// A missing or malformed blob degrades to the default session; a damaged
/// but parseable one is repaired. The host should write the returned blob
/// back to storage.
#[wasm_bindgen]
pub fn load_session(blob: Option<String>) -> Result<String, JsValue> {
    Workspace::from_json_or_default(blob.as_deref())
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render the active document of a session blob.
#[wasm_bindgen]
pub fn render_session(blob: &str) -> Result<String, JsValue> {
    let workspace = Workspace::from_json(blob).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(render(&workspace.current().content))
}
