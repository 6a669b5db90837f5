// Background image loader: one GET, decoded into an ImageBitmap.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, ImageBitmap, Response};

use crate::model::ResourceFetchError;
use crate::util::js_error_message;

/// Fetches `url` and decodes the body into a bitmap. Settles exactly once;
/// there is no timeout beyond whatever the browser applies.
pub async fn fetch_overview(url: &str) -> Result<ImageBitmap, ResourceFetchError> {
    let window = web_sys::window()
        .ok_or_else(|| ResourceFetchError::Network("no window available".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ResourceFetchError::Network(js_error_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ResourceFetchError::Network(js_error_message(&e)))?;
    if !response.ok() {
        return Err(ResourceFetchError::Status(response.status()));
    }

    let body = response
        .blob()
        .map_err(|e| ResourceFetchError::Decode(js_error_message(&e)))?;
    let blob: Blob = JsFuture::from(body)
        .await
        .and_then(|v| v.dyn_into())
        .map_err(|e| ResourceFetchError::Network(js_error_message(&e)))?;

    let decode = window
        .create_image_bitmap_with_blob(&blob)
        .map_err(|e| ResourceFetchError::Decode(js_error_message(&e)))?;
    let bitmap = JsFuture::from(decode)
        .await
        .and_then(|v| v.dyn_into::<ImageBitmap>())
        .map_err(|e| ResourceFetchError::Decode(js_error_message(&e)))?;
    log::info!("decoded overview {}x{}", bitmap.width(), bitmap.height());
    Ok(bitmap)
}
