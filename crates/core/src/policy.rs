//! Policy detail wire types and view-models.
//!
//! The detail endpoints answer with attached and inline policy lists; the
//! console renders them as titled cards of individually togglable documents.
//! Rendering is split into a structured view-model (this module) and a
//! DOM-building step (the console crate), so the shape of what gets rendered
//! is testable without markup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One policy as served by the detail endpoints. The document is an opaque
/// JSON object; the console pretty-prints it and never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub name: String,
    pub document: Value,
}

/// Response body of `GET /role/{accountId}/{roleName}` and
/// `GET /user/{accountId}/{userName}`.
///
/// The server also sends the entity name; it is not needed here. Missing
/// lists deserialize as empty rather than failing the whole panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDetail {
    #[serde(default)]
    pub attached_policies: Vec<PolicyRecord>,
    #[serde(default)]
    pub inline_policies: Vec<PolicyRecord>,
}

/// One policy entry ready to render: clickable name plus an initially hidden
/// pretty-printed document block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyEntryView {
    pub name: String,
    /// Element id of the document block, unique across parents.
    pub toggle_id: String,
    /// Document serialized with 2-space indentation.
    pub document_pretty: String,
}

/// A titled card of policy entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySectionView {
    pub title: String,
    pub entries: Vec<PolicyEntryView>,
}

/// Id of a policy-document block, derived from its parent entity and the
/// policy name. Two parents can carry same-named policies; keying the id on
/// both keeps the ids distinct, otherwise toggling breaks.
pub fn document_toggle_id(parent_key: &str, policy_name: &str) -> String {
    format!("{parent_key}-{policy_name}")
}

fn section(title: &str, records: &[PolicyRecord], parent_key: &str) -> PolicySectionView {
    let entries = records
        .iter()
        .map(|record| PolicyEntryView {
            name: record.name.clone(),
            toggle_id: document_toggle_id(parent_key, &record.name),
            document_pretty: serde_json::to_string_pretty(&record.document)
                .unwrap_or_else(|_| record.document.to_string()),
        })
        .collect();
    PolicySectionView {
        title: title.to_string(),
        entries,
    }
}

/// View-model for one entity's detail panel: the attached-policies card
/// followed by the inline-policies card, each present only when non-empty.
pub fn detail_sections(detail: &EntityDetail, parent_key: &str) -> Vec<PolicySectionView> {
    let mut sections = Vec::new();
    if !detail.attached_policies.is_empty() {
        sections.push(section("Attached Policies", &detail.attached_policies, parent_key));
    }
    if !detail.inline_policies.is_empty() {
        sections.push(section("Inline Policies", &detail.inline_policies, parent_key));
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str) -> PolicyRecord {
        PolicyRecord {
            name: name.to_string(),
            document: json!({"Version": "2012-10-17", "Statement": []}),
        }
    }

    #[test]
    fn empty_lists_produce_no_sections() {
        let detail = EntityDetail {
            attached_policies: vec![],
            inline_policies: vec![],
        };
        assert!(detail_sections(&detail, "Reader").is_empty());
    }

    #[test]
    fn only_inline_yields_single_inline_section() {
        let detail = EntityDetail {
            attached_policies: vec![],
            inline_policies: vec![record("ReadAll")],
        };
        let sections = detail_sections(&detail, "Reader");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Inline Policies");
        assert_eq!(sections[0].entries.len(), 1);
        assert_eq!(sections[0].entries[0].toggle_id, "Reader-ReadAll");
    }

    #[test]
    fn attached_section_precedes_inline() {
        let detail = EntityDetail {
            attached_policies: vec![record("A")],
            inline_policies: vec![record("B")],
        };
        let sections = detail_sections(&detail, "Reader");
        let titles: Vec<&str> = sections
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, ["Attached Policies", "Inline Policies"]);
    }

    #[test]
    fn same_policy_name_under_different_parents_gets_distinct_ids() {
        assert_ne!(
            document_toggle_id("RoleA", "ReadAll"),
            document_toggle_id("RoleB", "ReadAll")
        );
    }

    #[test]
    fn document_is_pretty_printed_with_two_space_indent() {
        let detail = EntityDetail {
            attached_policies: vec![PolicyRecord {
                name: "P".to_string(),
                document: json!({"Effect": "Allow"}),
            }],
            inline_policies: vec![],
        };
        let sections = detail_sections(&detail, "Reader");
        assert_eq!(
            sections[0].entries[0].document_pretty,
            "{\n  \"Effect\": \"Allow\"\n}"
        );
    }

    #[test]
    fn missing_lists_deserialize_as_empty() {
        let detail: EntityDetail =
            serde_json::from_value(json!({"role_name": "Reader"})).unwrap();
        assert!(detail.attached_policies.is_empty());
        assert!(detail.inline_policies.is_empty());
    }
}
