//! Role tag input on the analyze form.
//!
//! Enter commits the trimmed input as a removable chip; each chip carries its
//! hidden `roles_to_analyze[]` field inside the same badge element, so
//! removing the badge removes both in one DOM operation and the form never
//! submits a dangling field.

use std::cell::RefCell;
use std::rc::Rc;

use iamview_core::{TAG_FIELD_NAME, TagList};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent};

const INPUT_ID: &str = "roles_input";
const CONTAINER_ID: &str = "roles_container";

/// Bind the tag input if the analyze form is on this page.
pub fn bind_tag_input(document: &Document) {
    let Some(input) = document
        .get_element_by_id(INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        return;
    };

    let tags = Rc::new(RefCell::new(TagList::new()));
    let document = document.clone();
    let key_input = input.clone();
    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.key() != "Enter" {
            return;
        }
        // Enter must add a tag, not submit the surrounding form.
        event.prevent_default();

        let raw = key_input.value();
        let Some(value) = TagList::normalize(&raw) else {
            return;
        };
        // Commit only once the badge exists, so a failed append cannot
        // leave a phantom tag shifting later index-based removals.
        match append_badge(&document, &container, &value, &tags) {
            Ok(()) => {
                tags.borrow_mut().commit(&raw);
                key_input.set_value("");
            }
            Err(err) => web_sys::console::error_1(&err),
        }
    });
    let _ = input.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

fn append_badge(
    document: &Document,
    container: &Element,
    value: &str,
    tags: &Rc<RefCell<TagList>>,
) -> Result<(), JsValue> {
    let badge = document.create_element("div")?;
    badge.set_class_name(
        "bg-white text-orange-600 border border-orange-600 rounded-full px-3 py-1 flex items-center space-x-2",
    );

    let label = document.create_element("span")?;
    label.set_text_content(Some(value));

    let remove = document.create_element("button")?;
    remove.set_attribute("type", "button")?;
    remove.set_class_name("text-orange-600 focus:outline-none");
    remove.set_text_content(Some("\u{d7}"));

    let hidden: HtmlInputElement = document.create_element("input")?.unchecked_into();
    hidden.set_type("hidden");
    hidden.set_name(TAG_FIELD_NAME);
    hidden.set_value(value);

    badge.append_with_node_1(&label)?;
    badge.append_with_node_1(&remove)?;
    badge.append_with_node_1(&hidden)?;
    container.append_with_node_1(&badge)?;

    let tags = Rc::clone(tags);
    let badge_for_remove = badge.clone();
    let on_remove = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        tags.borrow_mut().remove(badge_index(&badge_for_remove));
        badge_for_remove.remove();
    });
    let _ = remove.add_event_listener_with_callback("click", on_remove.as_ref().unchecked_ref());
    on_remove.forget();

    Ok(())
}

/// Position of a badge among its siblings; chips are appended in commit
/// order and removals preserve it, so this is also the tag's index.
fn badge_index(badge: &Element) -> usize {
    let mut index = 0;
    let mut current = badge.previous_element_sibling();
    while let Some(sibling) = current {
        index += 1;
        current = sibling.previous_element_sibling();
    }
    index
}
