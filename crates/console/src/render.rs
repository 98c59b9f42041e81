//! DOM rendering of policy view-models.
//!
//! The view-model is computed in `iamview-core`; this module only turns it
//! into nodes. Everything is built with `create_element` rather than HTML
//! strings, so policy names and documents can never be interpreted as markup.

use std::cell::RefCell;
use std::rc::Rc;

use iamview_core::{DocumentAccordion, PolicySectionView};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::dom;

const DOCUMENT_CLASS: &str = "policy-document";

/// Replace `panel`'s content with the rendered sections.
///
/// Every document block starts hidden; clicking a policy name drives the
/// page-global [`DocumentAccordion`]. The accordion is reset first because
/// re-rendering recreates the blocks in their hidden state.
pub fn render_detail(
    document: &Document,
    panel: &Element,
    sections: &[PolicySectionView],
    docs: &Rc<RefCell<DocumentAccordion>>,
) -> Result<(), JsValue> {
    docs.borrow_mut().reset();
    panel.set_text_content(None);

    for section in sections {
        panel.append_with_node_1(&render_section(document, section, docs)?)?;
    }
    Ok(())
}

fn render_section(
    document: &Document,
    section: &PolicySectionView,
    docs: &Rc<RefCell<DocumentAccordion>>,
) -> Result<Element, JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("card mt-3");
    let body = document.create_element("div")?;
    body.set_class_name("card-body");
    card.append_with_node_1(&body)?;

    let heading = document.create_element("h5")?;
    heading.set_text_content(Some(&format!("{}:", section.title)));
    body.append_with_node_1(&heading)?;

    let list = document.create_element("ul")?;
    list.set_class_name("list-group mb-3");
    body.append_with_node_1(&list)?;

    for entry in &section.entries {
        let item = document.create_element("li")?;
        item.set_class_name("list-group-item");

        let name = document.create_element("span")?;
        name.set_class_name("policy-name");
        name.set_attribute("style", "cursor: pointer")?;
        let caret = document.create_element("i")?;
        caret.set_class_name("fas fa-caret-down");
        name.append_with_node_1(&caret)?;
        name.append_with_str_1(&format!(" {}", entry.name))?;

        let block = document.create_element("pre")?;
        block.set_id(&entry.toggle_id);
        block.set_class_name(&format!(
            "{DOCUMENT_CLASS} hidden p-2 mt-2 bg-white border border-gray-300 rounded-md"
        ));
        block.set_text_content(Some(&entry.document_pretty));
        dom::hide(&block);

        wire_document_toggle(document, &name, entry.toggle_id.clone(), docs);

        item.append_with_node_1(&name)?;
        item.append_with_node_1(&block)?;
        list.append_with_node_1(&item)?;
    }

    Ok(card)
}

/// Clicking a policy name hides every other document block on the page and
/// flips the block it owns. Also used for blocks the server rendered
/// statically (the trusted-users page).
pub fn wire_document_toggle(
    document: &Document,
    name: &Element,
    toggle_id: String,
    docs: &Rc<RefCell<DocumentAccordion>>,
) {
    let document = document.clone();
    let docs = Rc::clone(docs);
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let now_open = docs.borrow_mut().toggle(&toggle_id);
        for block in dom::query_all_in_document(&document, &format!(".{DOCUMENT_CLASS}")) {
            if block.id() != toggle_id {
                dom::hide(&block);
            }
        }
        if let Some(block) = document.get_element_by_id(&toggle_id) {
            if now_open {
                dom::show_block(&block);
            } else {
                dom::hide(&block);
            }
        }
    });
    let _ = name.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    // The listener lives as long as the node it is attached to.
    on_click.forget();
}
