//! `iamview-core` — headless UI semantics for the account review console.
//!
//! This crate contains **pure view logic** (no DOM, no network). Every decision
//! the browser layer makes (which list entries a search query hides, which
//! detail panel an accordion keeps open, what a fetched policy response
//! renders as) is computed here so it can be tested without a browser.

pub mod document;
pub mod error;
pub mod filter;
pub mod form;
pub mod nav;
pub mod panel;
pub mod policy;
pub mod tags;

pub use document::DocumentAccordion;
pub use error::{FetchError, FetchResult};
pub use filter::{GroupVisibility, Visibility, group_visibility, list_visibility, matches};
pub use form::{SubmitDecision, VALIDATED_CLASS, submit_decision};
pub use nav::DropdownState;
pub use panel::{PanelAccordion, PanelState, ToggleOutcome};
pub use policy::{
    EntityDetail, PolicyEntryView, PolicyRecord, PolicySectionView, detail_sections,
    document_toggle_id,
};
pub use tags::{TAG_FIELD_NAME, TagList};
