/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Accessible label for the menu button.
    pub fn button_label(&self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().open);
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.open);
        assert_eq!(menu.button_label(), "Close menu");
        menu.toggle();
        assert!(!menu.open);
        assert_eq!(menu.button_label(), "Open menu");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState { open: true };
        menu.close();
        assert!(!menu.open);
        menu.close();
        assert!(!menu.open);
    }
}
