//! Role and user detail panels.
//!
//! Each trigger element names its entity (`data-role-name` / `data-user-name`)
//! and account (`data-account-id`); the matching panel is the element with id
//! `details-{entityName}`. Panels of one kind form an accordion driven by
//! [`PanelAccordion`]; opening one fetches the entity's policies and renders
//! them from the structured view-model.

use std::cell::RefCell;
use std::rc::Rc;

use iamview_core::{DocumentAccordion, PanelAccordion, ToggleOutcome, detail_sections};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::api::{self, EntityKind};
use crate::dom;
use crate::render;

/// Bind every detail trigger of `kind` on the page. No-op when the page has
/// none. All triggers of a kind share one accordion.
pub fn bind_detail_panels(
    document: &Document,
    kind: EntityKind,
    docs: &Rc<RefCell<DocumentAccordion>>,
) {
    let triggers = dom::query_all_in_document(document, &format!("[{}]", kind.name_attribute()));
    if triggers.is_empty() {
        return;
    }

    let accordion = Rc::new(RefCell::new(PanelAccordion::<String>::new()));
    for trigger in triggers {
        let Some(name) = trigger.get_attribute(kind.name_attribute()) else {
            continue;
        };
        let Some(account_id) = trigger.get_attribute("data-account-id") else {
            continue;
        };
        wire_trigger(document, &trigger, kind, name, account_id, &accordion, docs);
    }
}

fn wire_trigger(
    document: &Document,
    trigger: &Element,
    kind: EntityKind,
    name: String,
    account_id: String,
    accordion: &Rc<RefCell<PanelAccordion<String>>>,
    docs: &Rc<RefCell<DocumentAccordion>>,
) {
    let document = document.clone();
    let accordion = Rc::clone(accordion);
    let docs = Rc::clone(docs);

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let outcome = accordion.borrow_mut().toggle(&name);
        match outcome {
            ToggleOutcome::Closed => {
                if let Some(panel) = panel_element(&document, &name) {
                    dom::hide(&panel);
                }
            }
            ToggleOutcome::AlreadyLoading => {}
            ToggleOutcome::StartFetch { seq } => {
                // Accordion: every sibling panel of this kind closes first.
                for panel in dom::query_all_in_document(
                    &document,
                    &format!(".{}", kind.panel_class()),
                ) {
                    dom::hide(&panel);
                }

                let Some(panel) = panel_element(&document, &name) else {
                    accordion.borrow_mut().resolve_failure(&name, seq);
                    return;
                };
                panel.set_text_content(Some("Loading..."));
                dom::show_block(&panel);

                start_fetch(
                    &document,
                    panel,
                    kind,
                    name.clone(),
                    account_id.clone(),
                    seq,
                    &accordion,
                    &docs,
                );
            }
        }
    });
    let _ = trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

#[allow(clippy::too_many_arguments)]
fn start_fetch(
    document: &Document,
    panel: Element,
    kind: EntityKind,
    name: String,
    account_id: String,
    seq: u64,
    accordion: &Rc<RefCell<PanelAccordion<String>>>,
    docs: &Rc<RefCell<DocumentAccordion>>,
) {
    let document = document.clone();
    let accordion = Rc::clone(accordion);
    let docs = Rc::clone(docs);

    spawn_local(async move {
        match api::fetch_entity_detail(kind, &account_id, &name).await {
            Ok(detail) => {
                // A stale resolution must not render over a later toggle.
                if !accordion.borrow_mut().resolve_success(&name, seq) {
                    return;
                }
                let sections = detail_sections(&detail, &name);
                if let Err(err) = render::render_detail(&document, &panel, &sections, &docs) {
                    web_sys::console::error_1(&err);
                }
                dom::show_block(&panel);
            }
            Err(err) => {
                if !accordion.borrow_mut().resolve_failure(&name, seq) {
                    return;
                }
                // Drop the loading placeholder; the panel reads as closed.
                panel.set_text_content(None);
                dom::hide(&panel);
                web_sys::console::error_1(
                    &format!("Error fetching {} details: {err}", kind.label()).into(),
                );
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&format!(
                        "Failed to fetch {} details. Please try again.",
                        kind.label()
                    ));
                }
            }
        }
    });
}

fn panel_element(document: &Document, entity_name: &str) -> Option<Element> {
    document.get_element_by_id(&format!("details-{entity_name}"))
}
