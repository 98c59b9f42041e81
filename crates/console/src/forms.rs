//! Submit guard for `.needs-validation` forms.

use iamview_core::{SubmitDecision, VALIDATED_CLASS, submit_decision};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

use crate::dom;

/// Guard every flagged form on the page. Submission is blocked until the
/// native constraints pass; either way the form gets the validated marker so
/// CSS reveals field-level feedback, and a later submit re-runs the check.
pub fn bind_form_guards(document: &Document) {
    for element in dom::query_all_in_document(document, ".needs-validation") {
        let Ok(form) = element.dyn_into::<web_sys::HtmlFormElement>() else {
            continue;
        };

        let guarded = form.clone();
        let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if submit_decision(guarded.check_validity()) == SubmitDecision::Block {
                event.prevent_default();
                event.stop_propagation();
            }
            let _ = guarded.class_list().add_1(VALIDATED_CLASS);
        });
        let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
        on_submit.forget();
    }
}
