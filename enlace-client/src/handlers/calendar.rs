//! Calendar month navigation

use iced::Task;

use crate::EnlaceApp;
use crate::types::Message;

impl EnlaceApp {
    pub fn handle_calendar_next(&mut self) -> Task<Message> {
        self.calendar = self.calendar.next();
        Task::none()
    }

    pub fn handle_calendar_previous(&mut self) -> Task<Message> {
        self.calendar = self.calendar.previous();
        Task::none()
    }
}
