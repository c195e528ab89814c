//! Notifications dropdown
//!
//! Closing on outside clicks happens in the dispatcher; see
//! `Message::is_outside_click`.

use iced::Task;

use crate::EnlaceApp;
use crate::types::Message;

impl EnlaceApp {
    pub fn handle_notifications_toggled(&mut self) -> Task<Message> {
        self.ui_state.toggle_notifications();
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::app_with;
    use crate::types::Message;
    use enlace_common::ViewId;

    #[test]
    fn test_any_other_click_closes_dropdown() {
        let mut app = app_with(Ok(String::new()));
        let _ = app.update(Message::NotificationsToggled);
        assert!(app.ui_state.notifications_open);

        let _ = app.update(Message::VacancyTitleChanged("a".to_string()));
        assert!(app.ui_state.notifications_open);

        let _ = app.update(Message::SwitchView(ViewId::Docs));
        assert!(!app.ui_state.notifications_open);

        let _ = app.update(Message::NotificationsToggled);
        let _ = app.update(Message::ContentClicked);
        assert!(!app.ui_state.notifications_open);
    }
}
