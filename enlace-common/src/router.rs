//! View router
//!
//! Tracks which top-level view is visible and which HR sub-view is visible
//! inside the HR view. Exactly one of each is active at any time; the HR
//! sub-view is only rendered while the HR view is active.
//!
//! Quick-access triggers carry surface ids as strings. Ids that do not name
//! a view are ignored.

use crate::view::{HrSubView, ViewId};

/// Prefix of quick-access targets that open an HR sub-view
const HR_TARGET_PREFIX: &str = "hr-";

/// Prefix of quick-access targets that open the document center
const DOCS_TARGET_PREFIX: &str = "docs-";

/// Two-axis view state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewRouter {
    active_view: ViewId,
    hr_sub_view: HrSubView,
}

impl ViewRouter {
    /// Router on the dashboard with the default HR sub-view
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently visible top-level view
    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    /// Currently selected HR sub-view
    pub fn hr_sub_view(&self) -> HrSubView {
        self.hr_sub_view
    }

    /// Whether a navigation affordance bound to `view` should be highlighted
    pub fn is_active(&self, view: ViewId) -> bool {
        self.active_view == view
    }

    /// Whether an HR sub-navigation link bound to `sub_view` should be highlighted
    pub fn is_sub_view_active(&self, sub_view: HrSubView) -> bool {
        self.hr_sub_view == sub_view
    }

    /// Activate a top-level view
    ///
    /// Entering the HR view always resets the sub-view to its default.
    pub fn switch_view(&mut self, view: ViewId) {
        self.active_view = view;
        if view == ViewId::Hr {
            self.hr_sub_view = HrSubView::default();
        }
    }

    /// Activate an HR sub-view, independent of the top-level view
    pub fn switch_hr_sub_view(&mut self, sub_view: HrSubView) {
        self.hr_sub_view = sub_view;
    }

    /// Activate an HR sub-view by surface id
    ///
    /// Returns `false` and leaves the state untouched when the id is unknown.
    pub fn navigate_hr_sub_view(&mut self, element_id: &str) -> bool {
        match HrSubView::from_element_id(element_id) {
            Some(sub_view) => {
                self.switch_hr_sub_view(sub_view);
                true
            }
            None => {
                tracing::debug!(
                    sub_view = element_id,
                    "ignoring navigation to unknown HR sub-view"
                );
                false
            }
        }
    }

    /// Follow a dashboard quick-access target
    ///
    /// `hr-*` targets open the HR view on that sub-view, `docs-*` targets open
    /// the document center. Anything else is ignored.
    pub fn quick_access(&mut self, target: &str) -> bool {
        if target.starts_with(HR_TARGET_PREFIX) {
            self.switch_view(ViewId::Hr);
            self.navigate_hr_sub_view(target);
            true
        } else if target.starts_with(DOCS_TARGET_PREFIX) {
            self.switch_view(ViewId::Docs);
            true
        } else {
            tracing::debug!(target, "ignoring unknown quick-access target");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let router = ViewRouter::new();
        assert_eq!(router.active_view(), ViewId::Dashboard);
        assert_eq!(router.hr_sub_view(), HrSubView::UpdateData);
        assert!(router.is_active(ViewId::Dashboard));
        assert!(!router.is_active(ViewId::Hr));
    }

    #[test]
    fn test_switch_view_is_exclusive() {
        let mut router = ViewRouter::new();
        router.switch_view(ViewId::Docs);
        for view in ViewId::ALL {
            assert_eq!(router.is_active(view), view == ViewId::Docs);
        }
    }

    #[test]
    fn test_entering_hr_resets_sub_view() {
        let mut router = ViewRouter::new();
        router.switch_hr_sub_view(HrSubView::Payroll);
        router.switch_view(ViewId::Hr);
        assert_eq!(router.hr_sub_view(), HrSubView::UpdateData);
    }

    #[test]
    fn test_other_views_keep_sub_view() {
        let mut router = ViewRouter::new();
        router.switch_hr_sub_view(HrSubView::Evaluation);
        router.switch_view(ViewId::Indicators);
        assert_eq!(router.hr_sub_view(), HrSubView::Evaluation);
    }

    #[test]
    fn test_switch_view_idempotent() {
        for view in ViewId::ALL {
            let mut once = ViewRouter::new();
            once.switch_view(view);
            let mut twice = once.clone();
            twice.switch_view(view);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_switch_hr_sub_view_idempotent() {
        for sub in HrSubView::ALL {
            let mut once = ViewRouter::new();
            once.switch_view(ViewId::Hr);
            once.switch_hr_sub_view(sub);
            let mut twice = once.clone();
            twice.switch_hr_sub_view(sub);
            assert_eq!(once, twice);
            for other in HrSubView::ALL {
                assert_eq!(twice.is_sub_view_active(other), other == sub);
            }
        }
    }

    #[test]
    fn test_unknown_sub_view_is_ignored() {
        let mut router = ViewRouter::new();
        router.switch_view(ViewId::Hr);
        router.switch_hr_sub_view(HrSubView::Recruitment);
        let before = router.clone();
        assert!(!router.navigate_hr_sub_view("hr-benefits-view"));
        assert_eq!(router, before);
    }

    #[test]
    fn test_navigate_hr_sub_view_by_element_id() {
        let mut router = ViewRouter::new();
        router.switch_view(ViewId::Admin);
        assert!(router.navigate_hr_sub_view("hr-payroll-view"));
        assert_eq!(router.hr_sub_view(), HrSubView::Payroll);
        assert_eq!(router.active_view(), ViewId::Admin);
    }

    #[test]
    fn test_quick_access_hr_target() {
        let mut router = ViewRouter::new();
        assert!(router.quick_access("hr-vacancy-request-view"));
        assert_eq!(router.active_view(), ViewId::Hr);
        assert_eq!(router.hr_sub_view(), HrSubView::VacancyRequest);
    }

    #[test]
    fn test_quick_access_unknown_hr_target_lands_on_default() {
        let mut router = ViewRouter::new();
        router.switch_hr_sub_view(HrSubView::Payroll);
        assert!(router.quick_access("hr-benefits-view"));
        assert_eq!(router.active_view(), ViewId::Hr);
        assert_eq!(router.hr_sub_view(), HrSubView::UpdateData);
    }

    #[test]
    fn test_quick_access_docs_target() {
        let mut router = ViewRouter::new();
        assert!(router.quick_access("docs-policies-view"));
        assert_eq!(router.active_view(), ViewId::Docs);
    }

    #[test]
    fn test_quick_access_unknown_prefix() {
        let mut router = ViewRouter::new();
        assert!(!router.quick_access("news-latest"));
        assert_eq!(router, ViewRouter::new());
    }
}
