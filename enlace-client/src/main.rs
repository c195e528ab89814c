//! Enlace RB - HR intranet dashboard
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod config;
mod constants;
mod handlers;
mod network;
mod style;
mod types;
mod views;

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use iced::widget::text_editor;
use iced::{Element, Subscription, Task, Theme};
use tracing_subscriber::EnvFilter;

use enlace_common::calendar::MonthCursor;
use enlace_common::carousel::Carousel;
use enlace_common::modal::ModalState;
use enlace_common::{Dashboard, Session};

use constants::ANNOUNCEMENT_COUNT;
use network::{GeminiClient, TextGenerator};
use style::{WINDOW_HEIGHT_MIN, WINDOW_TITLE, WINDOW_WIDTH_MIN};
use types::{AssistState, Message, TerminationFormState, UiState, VacancyFormState, ViewConfig};

/// Application entry point
///
/// Sets up logging, restores the saved window geometry and starts the
/// event loop.
pub fn main() -> iced::Result {
    init_tracing();

    // Load config early to get saved window position/size
    let config = config::Config::load();
    let window_size = iced::Size::new(config.settings.window_width, config.settings.window_height);
    let window_position = match (config.settings.window_x, config.settings.window_y) {
        (Some(x), Some(y)) => {
            iced::window::Position::Specific(iced::Point::new(x as f32, y as f32))
        }
        _ => iced::window::Position::default(),
    };

    iced::application(EnlaceApp::new, EnlaceApp::update, EnlaceApp::view)
        .title(WINDOW_TITLE)
        .theme(EnlaceApp::theme)
        .subscription(EnlaceApp::subscription)
        .window(iced::window::Settings {
            size: window_size,
            min_size: Some(iced::Size::new(WINDOW_WIDTH_MIN, WINDOW_HEIGHT_MIN)),
            position: window_position,
            exit_on_close_request: false,
            ..Default::default()
        })
        .run()
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Main application state for the dashboard
struct EnlaceApp {
    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------
    /// Application configuration
    config: config::Config,

    // -------------------------------------------------------------------------
    // Dashboard Core
    // -------------------------------------------------------------------------
    /// Session, view router and permission decisions
    dashboard: Dashboard,

    // -------------------------------------------------------------------------
    // Widgets
    // -------------------------------------------------------------------------
    /// Month shown by the calendar
    calendar: MonthCursor,
    /// Announcement carousel (None when there are no slides)
    carousel: Option<Carousel>,
    /// Global modal dialog
    modal: ModalState,

    // -------------------------------------------------------------------------
    // Forms
    // -------------------------------------------------------------------------
    /// Vacancy request form
    vacancy_form: VacancyFormState,
    /// Vacancy description editor (not Clone, stored outside the form)
    vacancy_description: text_editor::Content,
    /// Termination / clearance form
    termination_form: TerminationFormState,

    // -------------------------------------------------------------------------
    // AI Assist
    // -------------------------------------------------------------------------
    /// Triggers with a call in flight
    assist: AssistState,
    /// Text-generation backend
    generator: Arc<dyn TextGenerator>,

    // -------------------------------------------------------------------------
    // UI State
    // -------------------------------------------------------------------------
    /// Transient toggles (notifications dropdown)
    ui_state: UiState,
}

impl EnlaceApp {
    /// Initialize the application and schedule the first carousel advance
    fn new() -> (Self, Task<Message>) {
        let config = config::Config::load();
        let generator: Arc<dyn TextGenerator> =
            Arc::new(GeminiClient::from_settings(&config.settings.assist));
        let mut app = Self::with_generator(config, generator, today());
        let task = app.start_carousel();
        (app, task)
    }

    /// Build the application state around a given generator and date
    fn with_generator(
        config: config::Config,
        generator: Arc<dyn TextGenerator>,
        today: NaiveDate,
    ) -> Self {
        let session = match config.settings.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => Session::new(name.trim()),
            _ => Session::default(),
        };
        tracing::info!(name = %session.name, role = session.role.label(), "session started");

        Self {
            config,
            dashboard: Dashboard::new(session),
            calendar: MonthCursor::containing(today),
            carousel: Carousel::new(ANNOUNCEMENT_COUNT),
            modal: ModalState::default(),
            vacancy_form: VacancyFormState::default(),
            vacancy_description: text_editor::Content::new(),
            termination_form: TerminationFormState::default(),
            assist: AssistState::default(),
            generator,
            ui_state: UiState::default(),
        }
    }

    /// Process a message and update application state
    ///
    /// Central message dispatcher that routes messages to their handlers.
    fn update(&mut self, message: Message) -> Task<Message> {
        if message.is_outside_click() {
            self.ui_state.dismiss_notifications();
        }

        match message {
            // Navigation and permissions
            Message::SwitchView(view) => self.handle_switch_view(view),
            Message::SwitchHrSubView(sub_view) => self.handle_switch_hr_sub_view(sub_view),
            Message::QuickAccess(target) => self.handle_quick_access(target),
            Message::RoleSelected(role) => self.handle_role_selected(role),

            // Calendar
            Message::CalendarNext => self.handle_calendar_next(),
            Message::CalendarPrevious => self.handle_calendar_previous(),

            // Carousel
            Message::CarouselGoTo(index) => self.handle_carousel_go_to(index),
            Message::CarouselNext => self.handle_carousel_next(),
            Message::CarouselPrevious => self.handle_carousel_previous(),
            Message::CarouselTick(token) => self.handle_carousel_tick(token),

            // Modal
            Message::CloseModal => self.handle_close_modal(),
            Message::ModalBackdropClicked => self.handle_modal_backdrop_clicked(),
            Message::ShowGalleryItem(index) => self.handle_show_gallery_item(index),
            Message::EvaluateTeamPressed => self.handle_evaluate_team_pressed(),

            // Notifications
            Message::NotificationsToggled => self.handle_notifications_toggled(),
            Message::ContentClicked => Task::none(),

            // Vacancy request and AI assist
            Message::VacancyTitleChanged(title) => self.handle_vacancy_title_changed(title),
            Message::VacancyDescriptionAction(action) => {
                self.handle_vacancy_description_action(action)
            }
            Message::VacancySubmitPressed => self.handle_vacancy_submit_pressed(),
            Message::GenerateDescriptionPressed => self.handle_generate_description_pressed(),
            Message::AssistCompleted { trigger, result } => {
                self.handle_assist_completed(trigger, result)
            }

            // Termination
            Message::TerminationEmployeeChanged(name) => {
                self.handle_termination_employee_changed(name)
            }
            Message::TerminationLastDayChanged(day) => self.handle_termination_last_day_changed(day),
            Message::AssetToggled(index, returned) => self.handle_asset_toggled(index, returned),
            Message::GenerateClearancePressed => self.handle_generate_clearance_pressed(),

            // Window
            Message::WindowCloseRequested(id) => self.handle_window_close_requested(id),
            Message::WindowSaveAndClose {
                id,
                width,
                height,
                x,
                y,
            } => self.handle_window_save_and_close(id, width, height, x, y),
        }
    }

    /// Set up subscriptions for window events
    fn subscription(&self) -> Subscription<Message> {
        // Window close requests (we save geometry before exit)
        iced::window::close_requests().map(Message::WindowCloseRequested)
    }

    /// Render the current application state
    fn view(&self) -> Element<'_, Message> {
        let config = ViewConfig {
            dashboard: &self.dashboard,
            calendar: self.calendar,
            today: today(),
            carousel: self.carousel.as_ref(),
            modal: &self.modal,
            vacancy_form: &self.vacancy_form,
            vacancy_description: &self.vacancy_description,
            termination_form: &self.termination_form,
            assist: &self.assist,
            ui_state: &self.ui_state,
        };

        views::main_layout(config)
    }

    /// Get the current theme based on configuration
    fn theme(&self) -> Theme {
        self.config.settings.theme.to_iced_theme()
    }
}

/// Current local date
fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod test_support {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use enlace_common::assist::AssistError;

    /// Generator that answers every prompt with a fixed result
    pub struct FixedGenerator {
        pub result: Result<String, AssistError>,
        pub calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: String) -> Result<String, AssistError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    /// App with default config, a fixed generator and a fixed date
    pub fn app_with(result: Result<String, AssistError>) -> EnlaceApp {
        app_with_counter(result).0
    }

    /// Like [`app_with`], also returning the generator's call counter
    pub fn app_with_counter(result: Result<String, AssistError>) -> (EnlaceApp, Arc<AtomicUsize>) {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = FixedGenerator {
            result,
            calls: Arc::clone(&calls),
        };
        let app = EnlaceApp::with_generator(config::Config::default(), Arc::new(generator), today);
        (app, calls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::app_with;
    use enlace_common::{HrSubView, Role, ViewId};

    #[test]
    fn test_every_view_renders() {
        let mut app = app_with(Ok(String::new()));
        let _ = app.handle_role_selected(Role::Socio);
        let _ = app.handle_notifications_toggled();
        let _ = app.handle_show_gallery_item(0);

        for view in ViewId::ALL {
            let _ = app.handle_switch_view(view);
            let _ = app.view();
        }
        let _ = app.handle_switch_view(ViewId::Hr);
        for sub_view in HrSubView::ALL {
            let _ = app.handle_switch_hr_sub_view(sub_view);
            let _ = app.view();
        }
        assert!(app.modal.is_visible());
    }
}
