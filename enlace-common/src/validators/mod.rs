//! Input validation functions
//!
//! Checks run on form input before any action that depends on it.

mod vacancy_title;

pub use vacancy_title::{MAX_VACANCY_TITLE_LENGTH, VacancyTitleError, validate_vacancy_title};
