//! Message types for the Elm-style architecture

use iced::widget::text_editor;

use enlace_common::assist::AssistError;
use enlace_common::carousel::TimerToken;
use enlace_common::{HrSubView, Role, ViewId};

use super::AssistTrigger;

/// Messages that drive the application state machine
#[derive(Debug, Clone)]
pub enum Message {
    /// AI-assist: call finished
    AssistCompleted {
        trigger: AssistTrigger,
        result: Result<String, AssistError>,
    },
    /// Termination form: asset checkbox toggled
    AssetToggled(usize, bool),
    /// Calendar: next month pressed
    CalendarNext,
    /// Calendar: previous month pressed
    CalendarPrevious,
    /// Carousel: dot pressed
    CarouselGoTo(usize),
    /// Carousel: next arrow pressed
    CarouselNext,
    /// Carousel: previous arrow pressed
    CarouselPrevious,
    /// Carousel: scheduled auto-advance fired
    CarouselTick(TimerToken),
    /// Modal: close control pressed
    CloseModal,
    /// Main content: click not captured by any control
    ContentClicked,
    /// Evaluation: "evaluate team" pressed
    EvaluateTeamPressed,
    /// Termination form: generate clearance pressed
    GenerateClearancePressed,
    /// Vacancy form: generate description pressed
    GenerateDescriptionPressed,
    /// Modal: click on the backdrop around the dialog
    ModalBackdropClicked,
    /// Header: notifications button pressed
    NotificationsToggled,
    /// Dashboard: quick-access button pressed (carries the target element id)
    QuickAccess(&'static str),
    /// Sidebar: role selector changed
    RoleSelected(Role),
    /// Gallery: thumbnail pressed (opens the picture in the modal)
    ShowGalleryItem(usize),
    /// HR: sub-navigation link pressed
    SwitchHrSubView(HrSubView),
    /// Sidebar: navigation link pressed
    SwitchView(ViewId),
    /// Termination form: employee name changed
    TerminationEmployeeChanged(String),
    /// Termination form: last day changed
    TerminationLastDayChanged(String),
    /// Vacancy form: description editor action
    VacancyDescriptionAction(text_editor::Action),
    /// Vacancy form: submit pressed
    VacancySubmitPressed,
    /// Vacancy form: title changed
    VacancyTitleChanged(String),
    /// Window: close requested (query geometry before closing)
    WindowCloseRequested(iced::window::Id),
    /// Window: geometry queried, save and close
    WindowSaveAndClose {
        id: iced::window::Id,
        width: f32,
        height: f32,
        x: Option<i32>,
        y: Option<i32>,
    },
}

impl Message {
    /// Whether this message comes from a click on some control other than
    /// the notifications button
    ///
    /// Such clicks close the notifications dropdown.
    pub fn is_outside_click(&self) -> bool {
        matches!(
            self,
            Self::AssetToggled(..)
                | Self::CalendarNext
                | Self::CalendarPrevious
                | Self::CarouselGoTo(_)
                | Self::CarouselNext
                | Self::CarouselPrevious
                | Self::CloseModal
                | Self::ContentClicked
                | Self::EvaluateTeamPressed
                | Self::GenerateClearancePressed
                | Self::GenerateDescriptionPressed
                | Self::ModalBackdropClicked
                | Self::QuickAccess(_)
                | Self::RoleSelected(_)
                | Self::ShowGalleryItem(_)
                | Self::SwitchHrSubView(_)
                | Self::SwitchView(_)
                | Self::VacancySubmitPressed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_clicks() {
        assert!(Message::ContentClicked.is_outside_click());
        assert!(Message::SwitchView(ViewId::Docs).is_outside_click());
        assert!(!Message::NotificationsToggled.is_outside_click());
        assert!(!Message::VacancyTitleChanged("a".to_string()).is_outside_click());
        assert!(Message::CalendarNext.is_outside_click());
        assert!(Message::ShowGalleryItem(0).is_outside_click());
    }
}
