//! Permission applier
//!
//! Derives every permission-dependent visibility and enablement decision from
//! the session and the permission table. The derivation is pure; rendering
//! the decisions is left to the UI layer.

use crate::i18n::{t, t_args};
use crate::permissions::{Capability, lookup};
use crate::session::Session;
use crate::view::ViewId;

/// Enablement of an action that a role may not be allowed to take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionGate {
    /// The action is available
    Enabled,
    /// The action is shown disabled with an explanation
    Denied { notice: String },
}

impl ActionGate {
    fn from_permission(allowed: bool) -> Self {
        if allowed {
            Self::Enabled
        } else {
            Self::Denied {
                notice: t("permission-denied"),
            }
        }
    }

    /// Whether the action can be triggered
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }

    /// Explanation shown alongside a disabled action
    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Enabled => None,
            Self::Denied { notice } => Some(notice),
        }
    }
}

/// Visibility and enablement decisions for the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decisions {
    /// User name shown in the sidebar
    pub display_name: String,
    /// Role label shown under the name
    pub role_label: String,
    /// Header greeting
    pub welcome_message: String,
    /// Character shown in the avatar placeholder
    pub avatar_initial: String,
    /// Admin section of the sidebar
    pub admin_menu_visible: bool,
    /// Vacancy request entry of the HR sub-navigation
    pub vacancy_request_link_visible: bool,
    /// Team evaluation button
    pub team_evaluation_visible: bool,
    /// Employee management section of the HR view
    pub employee_management_visible: bool,
    /// Payroll entry of the HR sub-navigation
    pub payroll_link_visible: bool,
    /// HR analytics section
    pub hr_analytics_visible: bool,
    /// Termination entry of the HR sub-navigation
    pub termination_visible: bool,
    /// Vacancy request quick-access action
    pub vacancy_request_action: ActionGate,
}

/// Compute decisions for a session
pub fn apply(session: &Session) -> Decisions {
    let caps = lookup(session.role);
    let avatar_initial = session
        .name
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_default();

    Decisions {
        display_name: session.name.clone(),
        role_label: session.role.label().to_string(),
        welcome_message: t_args("welcome-message", &[("name", &session.name)]),
        avatar_initial,
        admin_menu_visible: caps.allows_view(ViewId::Admin),
        vacancy_request_link_visible: caps.allows(Capability::RequestVacancy),
        team_evaluation_visible: caps.allows(Capability::EvaluateTeam),
        employee_management_visible: caps.allows(Capability::ManageEmployees),
        payroll_link_visible: caps.allows(Capability::AccessPayroll),
        hr_analytics_visible: caps.allows(Capability::AccessHrAnalytics),
        termination_visible: caps.allows(Capability::Terminate),
        vacancy_request_action: ActionGate::from_permission(
            caps.allows(Capability::RequestVacancy),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    fn session_with(role: Role) -> Session {
        Session {
            role,
            ..Session::default()
        }
    }

    #[test]
    fn test_auxiliar_vacancy_request_denied() {
        let decisions = apply(&session_with(Role::Auxiliar));
        assert!(!decisions.vacancy_request_action.is_enabled());
        assert_eq!(
            decisions.vacancy_request_action.notice(),
            Some("No tiene permiso para esta acción")
        );
        assert!(!decisions.vacancy_request_link_visible);
        assert!(!decisions.admin_menu_visible);
    }

    #[test]
    fn test_gerente_sees_everything() {
        let decisions = apply(&session_with(Role::Gerente));
        assert!(decisions.admin_menu_visible);
        assert!(decisions.vacancy_request_link_visible);
        assert!(decisions.team_evaluation_visible);
        assert!(decisions.employee_management_visible);
        assert!(decisions.payroll_link_visible);
        assert!(decisions.hr_analytics_visible);
        assert!(decisions.termination_visible);
        assert_eq!(decisions.vacancy_request_action, ActionGate::Enabled);
        assert_eq!(decisions.vacancy_request_action.notice(), None);
    }

    #[test]
    fn test_coordinator_without_payroll_or_analytics() {
        let decisions = apply(&session_with(Role::Coordinador));
        assert!(!decisions.admin_menu_visible);
        assert!(decisions.vacancy_request_action.is_enabled());
        assert!(decisions.team_evaluation_visible);
        assert!(!decisions.payroll_link_visible);
        assert!(!decisions.hr_analytics_visible);
    }

    #[test]
    fn test_identity_fields() {
        let session = Session {
            name: "Lucía Pérez".to_string(),
            role: Role::Socio,
        };
        let decisions = apply(&session);
        assert_eq!(decisions.display_name, "Lucía Pérez");
        assert_eq!(decisions.role_label, "Socio");
        assert_eq!(decisions.welcome_message, "Bienvenido, Lucía Pérez");
        assert_eq!(decisions.avatar_initial, "L");
    }

    #[test]
    fn test_empty_name_has_no_initial() {
        let decisions = apply(&Session::new(""));
        assert_eq!(decisions.avatar_initial, "");
    }

    #[test]
    fn test_flags_follow_capability_table() {
        for role in Role::ALL {
            let caps = lookup(role);
            let decisions = apply(&session_with(role));
            assert_eq!(decisions.admin_menu_visible, caps.allows_view(ViewId::Admin));
            assert_eq!(
                decisions.vacancy_request_link_visible,
                caps.allows(Capability::RequestVacancy)
            );
            assert_eq!(
                decisions.team_evaluation_visible,
                caps.allows(Capability::EvaluateTeam)
            );
            assert_eq!(
                decisions.employee_management_visible,
                caps.allows(Capability::ManageEmployees)
            );
            assert_eq!(
                decisions.payroll_link_visible,
                caps.allows(Capability::AccessPayroll)
            );
            assert_eq!(
                decisions.hr_analytics_visible,
                caps.allows(Capability::AccessHrAnalytics)
            );
            assert_eq!(decisions.termination_visible, caps.allows(Capability::Terminate));
            assert_eq!(
                decisions.vacancy_request_action.is_enabled(),
                caps.allows(Capability::RequestVacancy)
            );
        }
    }

    #[test]
    fn test_apply_is_deterministic() {
        for role in Role::ALL {
            let session = session_with(role);
            assert_eq!(apply(&session), apply(&session));
        }
    }
}
