//! Vacancy request form and the AI description assistant

use std::sync::Arc;

use iced::Task;
use iced::widget::text_editor;

use enlace_common::assist::{AssistError, format_generated_text, vacancy_description_prompt};
use enlace_common::i18n::{t, t_args};
use enlace_common::modal::ModalBody;
use enlace_common::validators::{
    MAX_VACANCY_TITLE_LENGTH, VacancyTitleError, validate_vacancy_title,
};

use crate::EnlaceApp;
use crate::types::{AssistTrigger, Message};

impl EnlaceApp {
    pub fn handle_vacancy_title_changed(&mut self, title: String) -> Task<Message> {
        self.vacancy_form.title = title;
        Task::none()
    }

    pub fn handle_vacancy_description_action(
        &mut self,
        action: text_editor::Action,
    ) -> Task<Message> {
        self.vacancy_description.perform(action);
        Task::none()
    }

    /// Submit the vacancy request
    pub fn handle_vacancy_submit_pressed(&mut self) -> Task<Message> {
        if let Some(notice) = self.dashboard.decisions().vacancy_request_action.notice() {
            self.modal
                .show_message(t("modal-title-permission-denied"), notice.to_string());
            return Task::none();
        }
        if let Err(e) = validate_vacancy_title(&self.vacancy_form.title) {
            self.show_title_error(e);
            return Task::none();
        }

        let title = self.vacancy_form.title.trim().to_string();
        tracing::info!(%title, "vacancy request submitted");
        self.modal.show_message(
            t("modal-title-vacancy-submitted"),
            t_args("modal-vacancy-submitted", &[("title", &title)]),
        );
        self.vacancy_form = Default::default();
        self.vacancy_description = text_editor::Content::new();
        Task::none()
    }

    /// Ask the text generator for a job description
    ///
    /// A missing title opens the required-input modal without any call.
    pub fn handle_generate_description_pressed(&mut self) -> Task<Message> {
        let trigger = AssistTrigger::VacancyDescription;
        match self.begin_description_request() {
            Some(request) => Task::perform(request, move |result| Message::AssistCompleted {
                trigger,
                result,
            }),
            None => Task::none(),
        }
    }

    /// Validate the form and mark the trigger busy
    ///
    /// Returns the pending generator call, or `None` when nothing was sent.
    fn begin_description_request(
        &mut self,
    ) -> Option<impl Future<Output = Result<String, AssistError>> + Send + use<>> {
        let trigger = AssistTrigger::VacancyDescription;
        if self.assist.is_loading(trigger) {
            return None;
        }
        if let Err(e) = validate_vacancy_title(&self.vacancy_form.title) {
            self.show_title_error(e);
            return None;
        }

        let prompt = vacancy_description_prompt(&self.vacancy_form.title);
        self.assist.begin(trigger);

        let generator = Arc::clone(&self.generator);
        Some(async move { generator.generate(prompt).await })
    }

    /// Generator answered; the trigger is re-enabled on both paths
    pub fn handle_assist_completed(
        &mut self,
        trigger: AssistTrigger,
        result: Result<String, AssistError>,
    ) -> Task<Message> {
        self.assist.finish(trigger);

        match (trigger, result) {
            (AssistTrigger::VacancyDescription, Ok(text)) => {
                self.vacancy_description =
                    text_editor::Content::with_text(&format_generated_text(&text));
            }
            (_, Err(e)) => {
                tracing::warn!(?trigger, error = %e, "AI assist call failed");
                self.modal.show(
                    t("modal-title-assist-error"),
                    ModalBody::Error {
                        summary: t("modal-assist-error"),
                        detail: e.to_string(),
                    },
                );
            }
        }
        Task::none()
    }

    fn show_title_error(&mut self, error: VacancyTitleError) {
        let message = match error {
            VacancyTitleError::Empty => t("modal-required-vacancy-title"),
            VacancyTitleError::TooLong => t_args(
                "modal-vacancy-title-too-long",
                &[("max", &MAX_VACANCY_TITLE_LENGTH.to_string())],
            ),
        };
        self.modal.show_message(t("modal-title-required"), message);
    }
}
