//! AI Studio host bridge.
//!
//! When the page is hosted inside AI Studio, `window.aistudio` exposes the
//! credential-selection dialog. In a plain browser the capability is absent
//! and [`is_aistudio`] reports false.

use async_trait::async_trait;
use logogen::CredentialHost;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "aistudio"], js_name = hasSelectedApiKey, catch)]
    async fn has_selected_api_key() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "aistudio"], js_name = openSelectKey, catch)]
    async fn open_select_key() -> Result<JsValue, JsValue>;
}

/// Check if the page is hosted inside AI Studio.
pub fn is_aistudio() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &"aistudio".into()).ok())
        .map(|v| !v.is_undefined())
        .unwrap_or(false)
}

/// Credential host backed by the `window.aistudio` dialog.
pub struct AiStudioHost;

#[async_trait(?Send)]
impl CredentialHost for AiStudioHost {
    async fn has_credential(&self) -> bool {
        match has_selected_api_key().await {
            Ok(value) => value.as_bool().unwrap_or(false),
            Err(_) => false,
        }
    }

    async fn request_credential(&self) {
        let _ = open_select_key().await;
    }
}
