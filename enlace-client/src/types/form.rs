//! HR form state

use enlace_common::clearance::{AssetStatus, ClearanceDocument, DEFAULT_ASSETS};

// =============================================================================
// Vacancy Request
// =============================================================================

/// Vacancy request form
///
/// The description lives in a `text_editor::Content` held by the app, since
/// editor content is not `Clone`.
#[derive(Debug, Clone, Default)]
pub struct VacancyFormState {
    /// Job title ("Nombre del Puesto")
    pub title: String,
}

// =============================================================================
// Termination
// =============================================================================

/// Termination form feeding the clearance certificate
#[derive(Debug, Clone)]
pub struct TerminationFormState {
    /// Departing employee
    pub employee_name: String,
    /// Last working day as typed (YYYY-MM-DD)
    pub last_day: String,
    /// Company asset checklist
    pub assets: Vec<AssetStatus>,
}

impl Default for TerminationFormState {
    fn default() -> Self {
        Self {
            employee_name: String::new(),
            last_day: String::new(),
            assets: DEFAULT_ASSETS
                .iter()
                .map(|name| AssetStatus {
                    name: (*name).to_string(),
                    returned: false,
                })
                .collect(),
        }
    }
}

impl TerminationFormState {
    /// Set the returned flag of asset `index`; out-of-range indices are ignored
    pub fn set_returned(&mut self, index: usize, returned: bool) {
        if let Some(asset) = self.assets.get_mut(index) {
            asset.returned = returned;
        }
    }

    /// Certificate for the current form contents
    pub fn clearance(&self) -> ClearanceDocument {
        ClearanceDocument::new(&self.employee_name, &self.last_day, self.assets.clone())
    }
}
