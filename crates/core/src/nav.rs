//! Navbar action dropdown.

/// Open/closed state of one dropdown menu.
///
/// The trigger click toggles; a document-wide click closes the menu only when
/// the click landed outside both the trigger and the menu body. Containment
/// is what keeps the opening click from immediately closing the menu again
/// (the document listener sees a click inside the trigger and leaves the
/// state alone), so callers must not rely on stopping propagation instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger clicked.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Document-wide click observed; `inside_trigger` / `inside_body` say
    /// whether the click target is contained by the respective element.
    pub fn document_click(&mut self, inside_trigger: bool, inside_body: bool) {
        if !inside_trigger && !inside_body {
            self.open = false;
        }
    }

    pub fn is_open(self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_click_toggles() {
        let mut dd = DropdownState::new();
        dd.toggle();
        assert!(dd.is_open());
        dd.toggle();
        assert!(!dd.is_open());
    }

    #[test]
    fn opening_click_does_not_self_close() {
        let mut dd = DropdownState::new();
        // One physical click: trigger handler fires, then the document
        // handler sees a target inside the trigger.
        dd.toggle();
        dd.document_click(true, false);
        assert!(dd.is_open());
    }

    #[test]
    fn click_inside_body_keeps_menu_open() {
        let mut dd = DropdownState::new();
        dd.toggle();
        dd.document_click(false, true);
        assert!(dd.is_open());
    }

    #[test]
    fn outside_click_closes() {
        let mut dd = DropdownState::new();
        dd.toggle();
        dd.document_click(false, false);
        assert!(!dd.is_open());
    }

    #[test]
    fn outside_click_on_closed_menu_is_noop() {
        let mut dd = DropdownState::new();
        dd.document_click(false, false);
        assert!(!dd.is_open());
    }
}
