//! Client-side file download for the chat history export.

use contracts::domain::a002_conversation::ChatMessage;
use contracts::shared::export::{export_filename, history_to_json};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Serialise `history` and save it as `chat-history-<timestamp>.json`.
pub fn download_chat_history(history: &[ChatMessage]) -> Result<(), String> {
    let json = history_to_json(history).map_err(|e| format!("Failed to serialize history: {e}"))?;
    let filename = export_filename(chrono::Utc::now());

    let blob = create_json_blob(&json)?;
    download_blob(&blob, &filename)?;

    log::info!("Exported {} messages to {}", history.len(), filename);
    Ok(())
}

fn create_json_blob(content: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let properties = BlobPropertyBag::new();
    properties.set_type("application/json");

    Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Object URL for a blob, revoked on drop.
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> Result<Self, String> {
        Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if Url::revoke_object_url(&self.0).is_err() {
            log::warn!("Failed to revoke object URL {}", self.0);
        }
    }
}

/// Save `blob` through a hidden anchor that lives in the DOM only for the click.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;
    let url = ObjectUrl::for_blob(blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .unchecked_into();
    anchor.set_href(&url.0);
    anchor.set_download(filename);
    anchor.set_hidden(true);

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    anchor.remove();

    Ok(())
}
