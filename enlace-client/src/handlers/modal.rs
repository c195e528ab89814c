//! Global modal dialog

use iced::Task;

use enlace_common::i18n::t;
use enlace_common::modal::OverlayClick;

use crate::EnlaceApp;
use crate::constants::GALLERY_COUNT;
use crate::types::Message;

impl EnlaceApp {
    /// Close control pressed
    pub fn handle_close_modal(&mut self) -> Task<Message> {
        self.modal.hide();
        Task::none()
    }

    /// Click on the backdrop (clicks inside the dialog never reach here)
    pub fn handle_modal_backdrop_clicked(&mut self) -> Task<Message> {
        self.modal.click(OverlayClick::Backdrop);
        Task::none()
    }

    /// Open a gallery picture in the modal
    pub fn handle_show_gallery_item(&mut self, index: usize) -> Task<Message> {
        if index < GALLERY_COUNT {
            self.modal.show_picture(gallery_alt(index));
        }
        Task::none()
    }

    /// Start a team evaluation (only offered to roles that may evaluate)
    pub fn handle_evaluate_team_pressed(&mut self) -> Task<Message> {
        if self.dashboard.decisions().team_evaluation_visible {
            self.modal.show_message(
                t("modal-title-team-evaluation"),
                t("modal-team-evaluation-started"),
            );
        }
        Task::none()
    }
}

/// Alternative text of gallery picture `index`
pub fn gallery_alt(index: usize) -> String {
    t(&format!("gallery-{}-alt", index + 1))
}
