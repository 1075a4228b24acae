/// Mobile menu visibility. Closed on mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Following any in-page link always collapses the menu.
    pub fn after_navigation(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_flips() {
        let menu = MenuState::default().toggled();
        assert!(menu.is_open());
        assert!(!menu.toggled().is_open());
    }

    #[test]
    fn navigation_always_closes() {
        for toggles in 0..6 {
            let mut menu = MenuState::default();
            for _ in 0..toggles {
                menu = menu.toggled();
            }
            assert!(!menu.after_navigation().is_open());
        }
        let open = MenuState::default().toggled();
        assert!(open.is_open());
        assert!(!open.after_navigation().is_open());
    }
}
