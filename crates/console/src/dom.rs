//! Thin helpers over `web-sys`.
//!
//! Components receive their scope as a parameter instead of reaching into the
//! global document, so panel toggles and filters never touch elements they do
//! not own.

use iamview_core::Visibility;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node};

/// The page document.
pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// All elements under `scope` matching `selector`.
pub fn query_all(scope: &Element, selector: &str) -> Vec<Element> {
    match scope.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// All elements in the whole document matching `selector`.
pub fn query_all_in_document(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Map a filter visibility flag onto the element's display style. Shown
/// clears the inline override so the stylesheet decides, mirroring the `''`
/// the console has always written for filtered list items. Elements that are
/// also class-hidden must use [`show_block`] instead.
pub fn set_visible(element: &Element, visibility: Visibility) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let display = if visibility.is_shown() { "" } else { "none" };
        let _ = html.style().set_property("display", display);
    }
}

/// Reveal an element the stylesheet may also hide by class (policy-document
/// blocks carry `hidden`; detail panels start closed). The inline `block`
/// outranks the class rule, where clearing the declaration would let it
/// re-apply.
pub fn show_block(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html
            .style()
            .set_property("display", iamview_core::document::display_value(true));
    }
}

pub fn hide(element: &Element) {
    set_visible(element, Visibility::Hidden);
}

/// Rendered text of an element, empty when detached.
pub fn element_text(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

/// Whether `ancestor` contains the target node of `event`.
pub fn event_inside(event: &web_sys::Event, ancestor: &Element) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Node>().ok())
        .is_some_and(|node| ancestor.contains(Some(&node)))
}
