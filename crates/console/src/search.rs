//! Search box bindings.
//!
//! Each box filters one class of elements; visibility is recomputed by
//! `iamview-core` on every input event and written straight back to the
//! elements' display flags.

use iamview_core::{Visibility, group_visibility, list_visibility};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlInputElement};

use crate::dom;

/// Where a filtered element's haystack text comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// The element's rendered text content.
    Text,
    /// A named attribute (the account list matches on `data-account-name`).
    Attribute(&'static str),
}

impl MatchSource {
    fn haystack(self, element: &Element) -> String {
        match self {
            Self::Text => dom::element_text(element),
            Self::Attribute(name) => element.get_attribute(name).unwrap_or_default(),
        }
    }
}

/// Flat list filter bound to one search input.
///
/// Returns quietly when the input is not on the current page; the same
/// bundle serves every page of the console.
pub fn bind_search_box(
    document: &Document,
    input_id: &str,
    item_class: &'static str,
    source: MatchSource,
) {
    let Some(input) = input_element(document, input_id) else {
        return;
    };

    let document = document.clone();
    let query_input = input.clone();
    let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let query = query_input.value();
        let items = dom::query_all_in_document(&document, &format!(".{item_class}"));
        let texts: Vec<String> = items.iter().map(|item| source.haystack(item)).collect();
        let flags = list_visibility(&query, texts.iter().map(String::as_str));
        apply(&items, &flags);
    });
    let _ = input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
    on_input.forget();
}

/// Two-level trusted-users filter: roles stay visible while any of their
/// trusted users matches, and a matching role label reveals all its users.
pub fn bind_trusted_user_filter(document: &Document, input_id: &str) {
    let Some(input) = input_element(document, input_id) else {
        return;
    };

    let document = document.clone();
    let query_input = input.clone();
    let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let query = query_input.value();
        for group in dom::query_all_in_document(&document, ".trusted-user-role") {
            let label = group
                .query_selector("strong")
                .ok()
                .flatten()
                .map(|el| dom::element_text(&el))
                .unwrap_or_default();
            let items = dom::query_all(&group, ".trusted-user-item");
            let texts: Vec<String> = items.iter().map(dom::element_text).collect();

            let outcome = group_visibility(&query, &label, texts.iter().map(String::as_str));
            apply(&items, &outcome.items);
            dom::set_visible(&group, outcome.group);
        }
    });
    let _ = input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
    on_input.forget();
}

fn apply(elements: &[Element], flags: &[Visibility]) {
    for (element, flag) in elements.iter().zip(flags) {
        dom::set_visible(element, *flag);
    }
}

fn input_element(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}
