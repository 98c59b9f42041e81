//! Detail panel accordion.
//!
//! Role and user detail panels open one-at-a-time. The legacy console tracked
//! a bare display flag, which made an in-flight fetch look identical to a
//! closed panel; here the panel lifecycle is an explicit state machine so the
//! browser layer can render a pending indicator and so a hung fetch is
//! distinguishable from "never opened".

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, warn};

/// Lifecycle of one detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Not shown; no request outstanding.
    Closed,
    /// A detail fetch is in flight for this panel.
    Loading,
    /// Shown, populated with fetched detail.
    Open,
    /// Last fetch failed; visually closed, retriable.
    Failed,
}

/// What the caller must do after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Panel was open and is now closed. No fetch.
    Closed,
    /// Start exactly one detail fetch and report back with this sequence
    /// number via [`PanelAccordion::resolve_success`] / [`resolve_failure`].
    ///
    /// [`resolve_failure`]: PanelAccordion::resolve_failure
    StartFetch { seq: u64 },
    /// A fetch for this panel is already pending; do nothing.
    AlreadyLoading,
}

/// Accordion over one class of detail panels (all role panels, or all user
/// panels), keyed by entity name.
///
/// Invariants:
/// - at most one panel is `Open` at any time;
/// - at most one fetch is pending at any time (starting a new one supersedes
///   the old, whose resolution is then ignored);
/// - only the resolution carrying the currently pending sequence number may
///   transition a panel, so the winner is the last *resolved* request and the
///   outcome is deterministic even under double-clicks.
#[derive(Debug, Default)]
pub struct PanelAccordion<K> {
    open: Option<K>,
    loading: Option<(K, u64)>,
    failed: HashSet<K>,
    next_seq: u64,
}

impl<K> PanelAccordion<K>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            open: None,
            loading: None,
            failed: HashSet::new(),
            next_seq: 0,
        }
    }

    /// Handle a click on the toggle for `key`.
    pub fn toggle(&mut self, key: &K) -> ToggleOutcome {
        if self.open.as_ref() == Some(key) {
            debug!(?key, "panel closed");
            self.open = None;
            return ToggleOutcome::Closed;
        }

        if let Some((pending, _)) = &self.loading {
            if pending == key {
                debug!(?key, "fetch already pending, toggle ignored");
                return ToggleOutcome::AlreadyLoading;
            }
        }

        // Accordion: close whatever else is open before loading this one.
        self.open = None;
        self.failed.remove(key);
        let seq = self.next_seq;
        self.next_seq += 1;
        if let Some((superseded, old_seq)) = self.loading.replace((key.clone(), seq)) {
            debug!(key = ?superseded, seq = old_seq, "pending fetch superseded");
        }
        debug!(?key, seq, "panel loading");
        ToggleOutcome::StartFetch { seq }
    }

    /// Report a successful fetch. Returns `true` if this resolution won (the
    /// panel is now open); `false` if it was superseded and must be dropped
    /// without rendering.
    pub fn resolve_success(&mut self, key: &K, seq: u64) -> bool {
        if !self.is_pending(key, seq) {
            debug!(?key, seq, "stale fetch resolution ignored");
            return false;
        }
        self.loading = None;
        self.failed.remove(key);
        self.open = Some(key.clone());
        debug!(?key, seq, "panel open");
        true
    }

    /// Report a failed fetch. Returns `true` if this resolution won (the
    /// panel is now marked failed); `false` if it was superseded.
    pub fn resolve_failure(&mut self, key: &K, seq: u64) -> bool {
        if !self.is_pending(key, seq) {
            debug!(?key, seq, "stale fetch failure ignored");
            return false;
        }
        self.loading = None;
        self.failed.insert(key.clone());
        warn!(?key, seq, "detail fetch failed, panel stays closed");
        true
    }

    fn is_pending(&self, key: &K, seq: u64) -> bool {
        matches!(&self.loading, Some((pending, s)) if pending == key && *s == seq)
    }

    pub fn state(&self, key: &K) -> PanelState {
        if self.open.as_ref() == Some(key) {
            PanelState::Open
        } else if matches!(&self.loading, Some((pending, _)) if pending == key) {
            PanelState::Loading
        } else if self.failed.contains(key) {
            PanelState::Failed
        } else {
            PanelState::Closed
        }
    }

    /// Key of the currently open panel, if any.
    pub fn open_key(&self) -> Option<&K> {
        self.open.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accordion() -> PanelAccordion<String> {
        PanelAccordion::new()
    }

    fn key(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn toggle_open_panel_closes_without_fetch() {
        let mut acc = accordion();
        let reader = key("Reader");

        let ToggleOutcome::StartFetch { seq } = acc.toggle(&reader) else {
            panic!("first toggle must start a fetch");
        };
        assert!(acc.resolve_success(&reader, seq));
        assert_eq!(acc.state(&reader), PanelState::Open);

        assert_eq!(acc.toggle(&reader), ToggleOutcome::Closed);
        assert_eq!(acc.state(&reader), PanelState::Closed);
    }

    #[test]
    fn opening_second_panel_closes_first() {
        let mut acc = accordion();
        let a = key("Alpha");
        let b = key("Beta");

        let ToggleOutcome::StartFetch { seq } = acc.toggle(&a) else {
            panic!("expected fetch");
        };
        assert!(acc.resolve_success(&a, seq));

        let ToggleOutcome::StartFetch { seq } = acc.toggle(&b) else {
            panic!("expected fetch");
        };
        // First panel is already closed while the second loads.
        assert_eq!(acc.state(&a), PanelState::Closed);
        assert!(acc.resolve_success(&b, seq));

        assert_eq!(acc.state(&b), PanelState::Open);
        assert_eq!(acc.open_key(), Some(&b));
    }

    #[test]
    fn double_click_issues_a_single_fetch() {
        let mut acc = accordion();
        let reader = key("Reader");

        assert!(matches!(
            acc.toggle(&reader),
            ToggleOutcome::StartFetch { .. }
        ));
        assert_eq!(acc.toggle(&reader), ToggleOutcome::AlreadyLoading);
        assert_eq!(acc.state(&reader), PanelState::Loading);
    }

    #[test]
    fn superseded_resolution_is_ignored() {
        let mut acc = accordion();
        let a = key("Alpha");
        let b = key("Beta");

        let ToggleOutcome::StartFetch { seq: seq_a } = acc.toggle(&a) else {
            panic!("expected fetch");
        };
        let ToggleOutcome::StartFetch { seq: seq_b } = acc.toggle(&b) else {
            panic!("expected fetch");
        };

        // The first request resolves after being superseded: dropped.
        assert!(!acc.resolve_success(&a, seq_a));
        assert_eq!(acc.state(&a), PanelState::Closed);

        assert!(acc.resolve_success(&b, seq_b));
        assert_eq!(acc.state(&b), PanelState::Open);
    }

    #[test]
    fn failure_leaves_panel_closed_and_retriable() {
        let mut acc = accordion();
        let reader = key("Reader");

        let ToggleOutcome::StartFetch { seq } = acc.toggle(&reader) else {
            panic!("expected fetch");
        };
        assert!(acc.resolve_failure(&reader, seq));
        assert_eq!(acc.state(&reader), PanelState::Failed);
        assert_eq!(acc.open_key(), None);

        // Retry issues a fresh fetch and clears the failed marker.
        let ToggleOutcome::StartFetch { seq } = acc.toggle(&reader) else {
            panic!("retry must start a fetch");
        };
        assert_eq!(acc.state(&reader), PanelState::Loading);
        assert!(acc.resolve_success(&reader, seq));
        assert_eq!(acc.state(&reader), PanelState::Open);
    }

    #[test]
    fn at_most_one_panel_open() {
        let mut acc = accordion();
        let names: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();

        for name in &names {
            if let ToggleOutcome::StartFetch { seq } = acc.toggle(name) {
                assert!(acc.resolve_success(name, seq));
            }
            let open = names
                .iter()
                .filter(|n| acc.state(n) == PanelState::Open)
                .count();
            assert_eq!(open, 1);
        }
    }
}
