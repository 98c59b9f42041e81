//! Role tag list for the analyze form.
//!
//! Committed values become removable chips plus hidden form fields named
//! [`TAG_FIELD_NAME`]; the browser layer keeps chip and field inside one
//! container element so removal drops both atomically.

use tracing::debug;

/// Name of the hidden form field carrying each committed role.
pub const TAG_FIELD_NAME: &str = "roles_to_analyze[]";

/// Ordered list of committed role tags. Duplicates are allowed; the form has
/// always submitted whatever was typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim a raw input value down to what [`commit`] would store; `None`
    /// when nothing committable remains. Callers that must render a chip
    /// before committing use this to decide without touching the list.
    ///
    /// [`commit`]: TagList::commit
    pub fn normalize(raw: &str) -> Option<String> {
        let value = raw.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Commit a raw input value. Whitespace is trimmed; an empty result is
    /// rejected and the caller must leave the input untouched. On success the
    /// trimmed value is appended and returned so the caller can render the
    /// chip and clear the input.
    pub fn commit(&mut self, raw: &str) -> Option<String> {
        let value = Self::normalize(raw)?;
        debug!(value = %value, "role tag added");
        self.tags.push(value.clone());
        Some(value)
    }

    /// Remove the tag at `index`. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.tags.len() {
            let removed = self.tags.remove(index);
            debug!(value = %removed, "role tag removed");
            Some(removed)
        } else {
            None
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_trims_and_appends() {
        let mut tags = TagList::new();
        assert_eq!(tags.commit("  Admin  ").as_deref(), Some("Admin"));
        assert_eq!(tags.tags(), ["Admin"]);
    }

    #[test]
    fn whitespace_only_is_rejected() {
        let mut tags = TagList::new();
        assert_eq!(tags.commit("   "), None);
        assert!(tags.is_empty());
    }

    // Normalize must agree with commit and never mutate, so a caller can
    // build the chip first and commit only once that succeeded.
    #[test]
    fn normalize_agrees_with_commit_without_mutating() {
        assert_eq!(TagList::normalize("  Admin  ").as_deref(), Some("Admin"));
        assert_eq!(TagList::normalize(" \t "), None);

        let mut tags = TagList::new();
        let normalized = TagList::normalize("  Admin  ");
        assert!(tags.is_empty());
        assert_eq!(tags.commit("  Admin  "), normalized);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut tags = TagList::new();
        tags.commit("Admin");
        tags.commit("Admin");
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn remove_drops_exactly_one_entry() {
        let mut tags = TagList::new();
        tags.commit("Admin");
        tags.commit("Reader");
        assert_eq!(tags.remove(0).as_deref(), Some("Admin"));
        assert_eq!(tags.tags(), ["Reader"]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut tags = TagList::new();
        tags.commit("Admin");
        assert_eq!(tags.remove(5), None);
        assert_eq!(tags.len(), 1);
    }
}
