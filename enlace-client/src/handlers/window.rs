//! Window close handling

use iced::Task;

use crate::EnlaceApp;
use crate::types::Message;

impl EnlaceApp {
    /// Query window size and position, then save and close
    pub fn handle_window_close_requested(&mut self, id: iced::window::Id) -> Task<Message> {
        iced::window::size(id).then(move |size| {
            iced::window::position(id).map(move |point| Message::WindowSaveAndClose {
                id,
                width: size.width,
                height: size.height,
                x: point.map(|p| p.x as i32),
                y: point.map(|p| p.y as i32),
            })
        })
    }

    /// Persist window geometry and close
    pub fn handle_window_save_and_close(
        &mut self,
        id: iced::window::Id,
        width: f32,
        height: f32,
        x: Option<i32>,
        y: Option<i32>,
    ) -> Task<Message> {
        self.config.settings.window_width = width;
        self.config.settings.window_height = height;
        self.config.settings.window_x = x;
        self.config.settings.window_y = y;
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to save config");
        }

        iced::window::close(id)
    }
}
