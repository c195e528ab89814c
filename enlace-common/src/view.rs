//! View identifiers
//!
//! Top-level views and HR sub-views. Top-level views have a key (`dashboard`,
//! `hr`, ...) used in logs. HR sub-views have a stable surface id
//! (`hr-update-data-view`, ...) that dashboard quick-access targets carry.

/// A top-level dashboard view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewId {
    /// Home view with quick access, calendar and announcements
    #[default]
    Dashboard,
    /// Human resources
    Hr,
    /// Document center
    Docs,
    /// Indicators
    Indicators,
    /// Administration
    Admin,
}

impl ViewId {
    /// All top-level views in sidebar order
    pub const ALL: [ViewId; 5] = [
        ViewId::Dashboard,
        ViewId::Hr,
        ViewId::Docs,
        ViewId::Indicators,
        ViewId::Admin,
    ];

    /// Short key used in logs
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Hr => "hr",
            Self::Docs => "docs",
            Self::Indicators => "indicators",
            Self::Admin => "admin",
        }
    }
}

/// A panel nested inside the HR view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HrSubView {
    /// Personal data update form (default on entering HR)
    #[default]
    UpdateData,
    /// Vacancy request form with AI-assisted description
    VacancyRequest,
    /// Recruitment pipeline
    Recruitment,
    /// Payroll
    Payroll,
    /// Performance evaluation
    Evaluation,
    /// Termination and clearance
    Termination,
    /// Employment certificates
    Certificates,
}

impl HrSubView {
    /// All HR sub-views in sub-navigation order
    pub const ALL: [HrSubView; 7] = [
        HrSubView::UpdateData,
        HrSubView::VacancyRequest,
        HrSubView::Recruitment,
        HrSubView::Payroll,
        HrSubView::Evaluation,
        HrSubView::Termination,
        HrSubView::Certificates,
    ];

    /// Surface element id
    #[must_use]
    pub fn element_id(&self) -> &'static str {
        match self {
            Self::UpdateData => "hr-update-data-view",
            Self::VacancyRequest => "hr-vacancy-request-view",
            Self::Recruitment => "hr-recruitment-view",
            Self::Payroll => "hr-payroll-view",
            Self::Evaluation => "hr-evaluation-view",
            Self::Termination => "hr-termination-view",
            Self::Certificates => "hr-certificates-view",
        }
    }

    /// Parse a surface element id
    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sub| sub.element_id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_keys_are_unique() {
        let keys: std::collections::HashSet<_> = ViewId::ALL.iter().map(ViewId::key).collect();
        assert_eq!(keys.len(), ViewId::ALL.len());
    }

    #[test]
    fn test_sub_view_ids_are_hr_prefixed() {
        for sub in HrSubView::ALL {
            assert!(sub.element_id().starts_with("hr-"));
            assert_eq!(HrSubView::from_element_id(sub.element_id()), Some(sub));
        }
        assert_eq!(HrSubView::from_element_id("hr-view"), None);
    }
}
