//! Clearance certificate ("paz y salvo")
//!
//! Built from the termination form: employee name, last working day and the
//! company asset checklist. Blank fields render as bracketed placeholders.

use crate::i18n::{t, t_args};

/// Assets listed on a fresh termination checklist
pub const DEFAULT_ASSETS: &[&str] = &[
    "Computador portátil",
    "Carné corporativo",
    "Llaves de oficina",
    "Celular corporativo",
];

/// Return status of one company asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetStatus {
    pub name: String,
    pub returned: bool,
}

impl AssetStatus {
    /// Status label ("Devuelto" or "Pendiente")
    pub fn status_label(&self) -> String {
        if self.returned {
            t("clearance-asset-returned")
        } else {
            t("clearance-asset-pending")
        }
    }
}

/// A generated clearance certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearanceDocument {
    pub employee_name: String,
    pub last_day: String,
    pub assets: Vec<AssetStatus>,
}

impl ClearanceDocument {
    /// Build a certificate, substituting placeholders for blank fields
    pub fn new(employee_name: &str, last_day: &str, assets: Vec<AssetStatus>) -> Self {
        let employee_name = non_blank(employee_name)
            .map(str::to_string)
            .unwrap_or_else(|| t("clearance-employee-placeholder"));
        let last_day = non_blank(last_day)
            .map(str::to_string)
            .unwrap_or_else(|| t("clearance-last-day-placeholder"));
        Self {
            employee_name,
            last_day,
            assets,
        }
    }

    /// Whether every asset has been returned
    pub fn is_clear(&self) -> bool {
        self.assets.iter().all(|asset| asset.returned)
    }

    /// Certification sentence preceding the asset list
    pub fn statement(&self) -> String {
        t_args(
            "clearance-statement",
            &[("name", &self.employee_name), ("last_day", &self.last_day)],
        )
    }

    /// Closing line
    pub fn closing(&self) -> String {
        t("clearance-closing")
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
