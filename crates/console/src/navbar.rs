//! Navbar action dropdown.

use std::cell::Cell;
use std::rc::Rc;

use iamview_core::DropdownState;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

const TRIGGER_ID: &str = "actionButton";
const MENU_ID: &str = "actionDropdown";

/// Bind the action dropdown if the navbar carries one.
///
/// The menu is shown by removing the `hidden` class. Dismissal is decided by
/// containment checks on a document-wide click listener, never by stopping
/// propagation, so the click that opens the menu cannot also close it.
pub fn bind_action_dropdown(document: &Document) {
    let Some(trigger) = document.get_element_by_id(TRIGGER_ID) else {
        return;
    };
    let Some(menu) = document.get_element_by_id(MENU_ID) else {
        return;
    };

    let state = Rc::new(Cell::new(DropdownState::new()));

    {
        let state = Rc::clone(&state);
        let menu = menu.clone();
        let on_trigger = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let mut dd = state.get();
            dd.toggle();
            state.set(dd);
            apply(&menu, dd);
        });
        let _ =
            trigger.add_event_listener_with_callback("click", on_trigger.as_ref().unchecked_ref());
        on_trigger.forget();
    }

    let on_document = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let inside_trigger = crate::dom::event_inside(&event, &trigger);
        let inside_menu = crate::dom::event_inside(&event, &menu);
        let mut dd = state.get();
        dd.document_click(inside_trigger, inside_menu);
        state.set(dd);
        apply(&menu, dd);
    });
    let _ =
        document.add_event_listener_with_callback("click", on_document.as_ref().unchecked_ref());
    on_document.forget();
}

fn apply(menu: &Element, state: DropdownState) {
    let result = if state.is_open() {
        menu.class_list().remove_1("hidden")
    } else {
        menu.class_list().add_1("hidden")
    };
    let _ = result;
}
