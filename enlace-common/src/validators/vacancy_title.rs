//! Vacancy title validation
//!
//! The job title is required before a description can be generated for it,
//! and is capped at [`MAX_VACANCY_TITLE_LENGTH`] characters.

/// Maximum length for vacancy titles in characters
pub const MAX_VACANCY_TITLE_LENGTH: usize = 120;

/// Validation error for vacancy titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VacancyTitleError {
    /// Title is empty or only whitespace
    Empty,
    /// Title exceeds maximum length
    TooLong,
}

/// Validate a vacancy title
///
/// Checks:
/// - Not empty after trimming whitespace
/// - Does not exceed maximum length (120 characters)
///
/// # Errors
///
/// Returns a `VacancyTitleError` variant describing the validation failure.
pub fn validate_vacancy_title(title: &str) -> Result<(), VacancyTitleError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(VacancyTitleError::Empty);
    }
    if title.chars().count() > MAX_VACANCY_TITLE_LENGTH {
        return Err(VacancyTitleError::TooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_titles() {
        assert!(validate_vacancy_title("Analista de Nómina").is_ok());
        assert!(validate_vacancy_title("  Contador  ").is_ok());
        assert!(validate_vacancy_title(&"a".repeat(MAX_VACANCY_TITLE_LENGTH)).is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_vacancy_title(""), Err(VacancyTitleError::Empty));
        assert_eq!(validate_vacancy_title(" \t\n"), Err(VacancyTitleError::Empty));
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate_vacancy_title(&"a".repeat(MAX_VACANCY_TITLE_LENGTH + 1)),
            Err(VacancyTitleError::TooLong)
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // Multi-byte characters count once each
        assert!(validate_vacancy_title(&"ñ".repeat(MAX_VACANCY_TITLE_LENGTH)).is_ok());
    }
}
