//! Browser clipboard and window helpers.
//!
//! All functions are no-ops outside a browser so components compile and test
//! natively.

/// Copy text to the system clipboard (fire-and-forget).
pub fn copy_text(text: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
    }
}

/// Open an HTML document in a new tab via a Blob URL.
///
/// The document gets its own browsing context; nothing from the host page
/// leaks into it.
pub fn open_html(html: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };

        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(html));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/html");

        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        let _ = window.open_with_url_and_target(&url, "_blank");
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = html;
    }
}
