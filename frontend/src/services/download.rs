use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Hand a fetched byte blob to the browser as a file download. The object
/// URL is revoked before returning; the download itself is all-or-nothing.
pub fn trigger_download(bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "No document available".to_string())?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes).buffer());
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "Failed to build download blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create download URL".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create download link".to_string())?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or_else(|| "No document body".to_string())?;
    body.append_child(&anchor)
        .map_err(|_| "Failed to attach download link".to_string())?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = Url::revoke_object_url(&url);

    Ok(())
}
