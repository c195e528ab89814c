//! View configuration struct for passing state to view rendering

use chrono::NaiveDate;
use iced::widget::text_editor;

use enlace_common::Dashboard;
use enlace_common::calendar::MonthCursor;
use enlace_common::carousel::Carousel;
use enlace_common::modal::ModalState;

use crate::types::{AssistState, TerminationFormState, UiState, VacancyFormState};

/// Configuration struct for view rendering
///
/// Holds all the state needed to render the main layout.
pub struct ViewConfig<'a> {
    /// Session, router and permission decisions
    pub dashboard: &'a Dashboard,

    /// Month shown by the calendar widget
    pub calendar: MonthCursor,

    /// Today's date (for highlighting)
    pub today: NaiveDate,

    /// Announcement carousel (None when there are no slides)
    pub carousel: Option<&'a Carousel>,

    /// Global modal
    pub modal: &'a ModalState,

    /// Vacancy request form
    pub vacancy_form: &'a VacancyFormState,

    /// Vacancy description editor content
    pub vacancy_description: &'a text_editor::Content,

    /// Termination form
    pub termination_form: &'a TerminationFormState,

    /// AI-assist triggers in flight
    pub assist: &'a AssistState,

    /// Transient UI toggles
    pub ui_state: &'a UiState,
}
