pub const MENU_OPEN_CLASS: &str = "active";

/// Open state shared by the nav toggle and the menu panel. Both elements are
/// always rendered from this one flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns whether the menu was open before closing.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Document-level click. Clicks on the toggle itself are left to the toggle handler.
    pub fn document_click(&mut self, inside_toggle: bool, inside_menu: bool) -> bool {
        if inside_toggle || inside_menu {
            return false;
        }
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes_but_inside_click_does_not() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.document_click(true, false));
        assert!(!menu.document_click(false, true));
        assert!(menu.is_open());
        assert!(menu.document_click(false, false));
        assert!(!menu.is_open());
        assert!(!menu.document_click(false, false));
    }
}
