//! Page wiring.
//!
//! One bundle serves every console page; each binder quietly does nothing
//! when its elements are absent. The policy-document accordion is shared
//! page-wide because toggling any document block closes every other one,
//! whichever panel rendered it.

use std::cell::RefCell;
use std::rc::Rc;

use iamview_core::DocumentAccordion;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::api::EntityKind;
use crate::dom;
use crate::render;
use crate::search::{self, MatchSource};
use crate::{forms, navbar, panels, tags};

/// Bind every component present on the current page.
pub fn wire() -> Result<(), JsValue> {
    let document = dom::document()?;
    let docs = Rc::new(RefCell::new(DocumentAccordion::new()));

    // Search boxes. The account list matches on its name attribute, the
    // role/user lists on rendered text, the trusted-users section on both
    // levels of its hierarchy.
    search::bind_search_box(
        &document,
        "accountSearchInput",
        "account-card",
        MatchSource::Attribute("data-account-name"),
    );
    search::bind_search_box(&document, "roleSearchInput", "role-item", MatchSource::Text);
    search::bind_search_box(&document, "userSearchInput", "user-item", MatchSource::Text);
    search::bind_trusted_user_filter(&document, "trustedUserSearchInput");

    panels::bind_detail_panels(&document, EntityKind::Role, &docs);
    panels::bind_detail_panels(&document, EntityKind::User, &docs);
    bind_static_document_toggles(&document, &docs);

    tags::bind_tag_input(&document);
    navbar::bind_action_dropdown(&document);
    forms::bind_form_guards(&document);

    Ok(())
}

/// The trusted-users page renders policy-document blocks server-side; their
/// toggles name the block id directly via `data-policy-target`.
fn bind_static_document_toggles(document: &Document, docs: &Rc<RefCell<DocumentAccordion>>) {
    for trigger in dom::query_all_in_document(document, "[data-policy-target]") {
        let Some(target_id) = trigger.get_attribute("data-policy-target") else {
            continue;
        };
        render::wire_document_toggle(document, &trigger, target_id, docs);
    }
}
