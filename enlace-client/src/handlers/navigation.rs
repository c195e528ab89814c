//! View switching and role changes

use iced::Task;

use enlace_common::{HrSubView, Role, ViewId};

use crate::EnlaceApp;
use crate::types::Message;

impl EnlaceApp {
    /// Sidebar link pressed
    pub fn handle_switch_view(&mut self, view: ViewId) -> Task<Message> {
        self.dashboard.switch_view(view);
        Task::none()
    }

    /// HR sub-navigation link pressed
    pub fn handle_switch_hr_sub_view(&mut self, sub_view: HrSubView) -> Task<Message> {
        self.dashboard.switch_hr_sub_view(sub_view);
        Task::none()
    }

    /// Dashboard quick-access button pressed
    ///
    /// The vacancy shortcut is disabled in the view when the role lacks the
    /// permission; the check is repeated here so a stale press does nothing.
    pub fn handle_quick_access(&mut self, target: &'static str) -> Task<Message> {
        if target == crate::constants::VACANCY_QUICK_ACCESS_TARGET
            && !self
                .dashboard
                .decisions()
                .vacancy_request_action
                .is_enabled()
        {
            return Task::none();
        }
        self.dashboard.quick_access(target);
        Task::none()
    }

    /// Role selector changed
    pub fn handle_role_selected(&mut self, role: Role) -> Task<Message> {
        self.dashboard.change_role(role);
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::app_with;
    use enlace_common::{HrSubView, Role, ViewId};

    #[test]
    fn test_role_downgrade_leaves_admin() {
        let mut app = app_with(Ok(String::new()));
        let _ = app.handle_role_selected(Role::Gerente);
        let _ = app.handle_switch_view(ViewId::Admin);
        assert!(app.dashboard.router().is_active(ViewId::Admin));

        let _ = app.handle_role_selected(Role::Analista);
        assert!(app.dashboard.router().is_active(ViewId::Dashboard));
        assert!(!app.dashboard.decisions().admin_menu_visible);
    }

    #[test]
    fn test_vacancy_shortcut_gated_for_auxiliar() {
        let mut app = app_with(Ok(String::new()));
        let _ = app.handle_quick_access("hr-vacancy-request-view");
        assert!(app.dashboard.router().is_active(ViewId::Dashboard));

        let _ = app.handle_role_selected(Role::Coordinador);
        let _ = app.handle_quick_access("hr-vacancy-request-view");
        assert!(app.dashboard.router().is_active(ViewId::Hr));
        assert!(
            app.dashboard
                .router()
                .is_sub_view_active(HrSubView::VacancyRequest)
        );
    }

    #[test]
    fn test_docs_shortcut() {
        let mut app = app_with(Ok(String::new()));
        let _ = app.handle_quick_access("docs-policies");
        assert!(app.dashboard.router().is_active(ViewId::Docs));
    }
}
