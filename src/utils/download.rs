use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlAnchorElement};

/// Save `href` as `file_name` by clicking a transient anchor, so the caller
/// stays on the page. The anchor also targets a new tab for hosts that
/// ignore the download attribute and render the file instead.
pub fn save_file(href: &str, file_name: &str) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.set_target("_blank");

    // The anchor must be attached for the synthetic click to work
    // everywhere.
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
