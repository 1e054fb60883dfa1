//! Browser download of data-URI images via a synthesized anchor click.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Trigger a file save of `href` under `filename`. No network round-trip;
/// the data URI already embeds the image bytes.
pub fn save_data_uri(href: &str, filename: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let anchor: HtmlAnchorElement = element.unchecked_into();
    anchor.set_href(href);
    anchor.set_download(filename);
    anchor.click();
}
