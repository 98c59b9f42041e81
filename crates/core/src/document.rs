//! Policy-document accordion.
//!
//! Unlike the detail-panel accordion this one is page-global: toggling any
//! document block hides every other open block on the page, whichever panel
//! rendered it. That matches how the console has always behaved.

use tracing::debug;

/// Inline display value for a document block. Revealing writes an explicit
/// `block` rather than clearing the inline declaration: the blocks also carry
/// the stylesheet's `hidden` class, and without an inline override that rule
/// keeps them invisible.
pub fn display_value(now_open: bool) -> &'static str {
    if now_open { "block" } else { "none" }
}

/// Tracks which policy-document block is open, by element id.
#[derive(Debug, Default)]
pub struct DocumentAccordion {
    open: Option<String>,
}

impl DocumentAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the block with `id`. Returns `true` if the block is now open.
    /// Any previously open block is closed either way.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.open.as_deref() == Some(id) {
            debug!(id, "policy document closed");
            self.open = None;
            false
        } else {
            debug!(id, "policy document open");
            self.open = Some(id.to_string());
            true
        }
    }

    /// Id of the open block, if any.
    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }

    /// Forget any open block, e.g. when its panel is re-rendered.
    pub fn reset(&mut self) {
        self.open = None;
    }
}
