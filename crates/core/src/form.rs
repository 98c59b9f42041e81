//! Submit guard for forms using native constraint validation.

/// Class added to a guarded form after any submit attempt so CSS can reveal
/// field-level feedback.
pub const VALIDATED_CLASS: &str = "was-validated";

/// What to do with a submit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Constraints satisfied: let the submission proceed.
    Allow,
    /// Constraints unmet: prevent the default action and stop propagation.
    Block,
}

/// Decide from the form's native `checkValidity()` result. The validated
/// marker is applied in both cases; re-submission re-runs the check.
pub fn submit_decision(constraints_satisfied: bool) -> SubmitDecision {
    if constraints_satisfied {
        SubmitDecision::Allow
    } else {
        SubmitDecision::Block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form_is_allowed() {
        assert_eq!(submit_decision(true), SubmitDecision::Allow);
    }

    #[test]
    fn invalid_form_is_blocked() {
        assert_eq!(submit_decision(false), SubmitDecision::Block);
    }
}
