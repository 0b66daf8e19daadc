use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Clipboard, ClipboardItem};

/// Puts the signature on the clipboard as rich HTML with a plain-text
/// alternative, letting the paste target pick. Falls back to writing the
/// markup as text where `ClipboardItem` is unavailable.
pub async fn copy_signature(html: &str, text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let clipboard = window.navigator().clipboard();

    match write_rich(&clipboard, html, text).await {
        Ok(()) => Ok(()),
        Err(e) => {
            log::warn!("Rich clipboard write failed, falling back to text: {:?}", e);
            JsFuture::from(clipboard.write_text(html)).await?;
            Ok(())
        }
    }
}

async fn write_rich(clipboard: &Clipboard, html: &str, text: &str) -> Result<(), JsValue> {
    let items = Object::new();
    Reflect::set(&items, &JsValue::from_str("text/html"), &blob(html, "text/html")?.into())?;
    Reflect::set(&items, &JsValue::from_str("text/plain"), &blob(text, "text/plain")?.into())?;

    let item = ClipboardItem::new_with_record_from_str_to_blob_promise(&items)?;
    JsFuture::from(clipboard.write(&Array::of1(&item))).await?;
    Ok(())
}

fn blob(contents: &str, mime_type: &str) -> Result<Blob, JsValue> {
    let parts = Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    Blob::new_with_str_sequence_and_options(&parts, &options)
}
