//! Termination form and clearance certificate

use iced::Task;

use enlace_common::i18n::t;
use enlace_common::modal::ModalBody;

use crate::EnlaceApp;
use crate::types::Message;

impl EnlaceApp {
    pub fn handle_termination_employee_changed(&mut self, name: String) -> Task<Message> {
        self.termination_form.employee_name = name;
        Task::none()
    }

    pub fn handle_termination_last_day_changed(&mut self, day: String) -> Task<Message> {
        self.termination_form.last_day = day;
        Task::none()
    }

    pub fn handle_asset_toggled(&mut self, index: usize, returned: bool) -> Task<Message> {
        self.termination_form.set_returned(index, returned);
        Task::none()
    }

    /// Generate the clearance certificate and show it in the modal
    pub fn handle_generate_clearance_pressed(&mut self) -> Task<Message> {
        if !self.dashboard.decisions().termination_visible {
            return Task::none();
        }
        let document = self.termination_form.clearance();
        tracing::info!(clear = document.is_clear(), "clearance generated");
        self.modal
            .show(t("modal-title-clearance"), ModalBody::Clearance(document));
        Task::none()
    }
}
