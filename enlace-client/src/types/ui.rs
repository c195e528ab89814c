//! Transient UI state

/// Visibility toggles that are not part of the dashboard core
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// Notifications dropdown is open
    pub notifications_open: bool,
}

impl UiState {
    /// Notifications button pressed
    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }

    /// A click landed anywhere outside the notifications button
    ///
    /// Returns true if the dropdown was open and is now closed.
    pub fn dismiss_notifications(&mut self) -> bool {
        std::mem::take(&mut self.notifications_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_notifications() {
        let mut ui = UiState::default();
        ui.toggle_notifications();
        assert!(ui.notifications_open);
        ui.toggle_notifications();
        assert!(!ui.notifications_open);
    }

    #[test]
    fn test_outside_click_closes() {
        let mut ui = UiState::default();
        assert!(!ui.dismiss_notifications());
        ui.toggle_notifications();
        assert!(ui.dismiss_notifications());
        assert!(!ui.notifications_open);
    }
}
