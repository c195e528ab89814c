//! Type definitions for the Enlace client

mod assist;
mod form;
mod message;
mod ui;
mod view_config;

// Re-export types for convenience
pub use assist::{AssistState, AssistTrigger};
pub use form::{TerminationFormState, VacancyFormState};
pub use message::Message;
pub use ui::UiState;
pub use view_config::ViewConfig;
