//! Role permission table
//!
//! Static mapping from [`Role`] to the views it may navigate to and the
//! capabilities it holds. The table is total over the closed role set and is
//! never mutated at runtime. Every view set contains the dashboard, which is
//! what makes the dashboard a safe fallback after a role downgrade.

use crate::role::Role;
use crate::view::ViewId;

/// A boolean permission attached to a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Request a new vacancy
    RequestVacancy,
    /// Evaluate team members
    EvaluateTeam,
    /// Manage employee records
    ManageEmployees,
    /// Access payroll
    AccessPayroll,
    /// Access HR analytics
    AccessHrAnalytics,
    /// Process terminations
    Terminate,
}

impl Capability {
    /// All capabilities
    pub const ALL: [Capability; 6] = [
        Capability::RequestVacancy,
        Capability::EvaluateTeam,
        Capability::ManageEmployees,
        Capability::AccessPayroll,
        Capability::AccessHrAnalytics,
        Capability::Terminate,
    ];
}

/// The views and capabilities granted to a role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    /// Views this role may navigate to (order irrelevant)
    pub views: &'static [ViewId],
    pub can_request_vacancy: bool,
    pub can_evaluate_team: bool,
    pub can_manage_employees: bool,
    pub can_access_payroll: bool,
    pub can_access_hr_analytics: bool,
    pub can_terminate: bool,
}

impl CapabilitySet {
    /// Check whether the role may navigate to a view
    #[must_use]
    pub fn allows_view(&self, view: ViewId) -> bool {
        self.views.contains(&view)
    }

    /// Check a single capability flag
    #[must_use]
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::RequestVacancy => self.can_request_vacancy,
            Capability::EvaluateTeam => self.can_evaluate_team,
            Capability::ManageEmployees => self.can_manage_employees,
            Capability::AccessPayroll => self.can_access_payroll,
            Capability::AccessHrAnalytics => self.can_access_hr_analytics,
            Capability::Terminate => self.can_terminate,
        }
    }
}

const STAFF_VIEWS: &[ViewId] = &[
    ViewId::Dashboard,
    ViewId::Hr,
    ViewId::Docs,
    ViewId::Indicators,
];

const ADMIN_VIEWS: &[ViewId] = &[
    ViewId::Dashboard,
    ViewId::Hr,
    ViewId::Docs,
    ViewId::Indicators,
    ViewId::Admin,
];

/// Staff roles see the standard views and hold no capabilities
const STAFF: CapabilitySet = CapabilitySet {
    views: STAFF_VIEWS,
    can_request_vacancy: false,
    can_evaluate_team: false,
    can_manage_employees: false,
    can_access_payroll: false,
    can_access_hr_analytics: false,
    can_terminate: false,
};

const COORDINATOR: CapabilitySet = CapabilitySet {
    views: STAFF_VIEWS,
    can_request_vacancy: true,
    can_evaluate_team: true,
    can_manage_employees: true,
    can_access_payroll: false,
    can_access_hr_analytics: false,
    can_terminate: true,
};

/// Management roles see the admin view and hold every capability
const MANAGEMENT: CapabilitySet = CapabilitySet {
    views: ADMIN_VIEWS,
    can_request_vacancy: true,
    can_evaluate_team: true,
    can_manage_employees: true,
    can_access_payroll: true,
    can_access_hr_analytics: true,
    can_terminate: true,
};

/// Look up the capability set for a role
#[must_use]
pub fn lookup(role: Role) -> &'static CapabilitySet {
    match role {
        Role::Auxiliar | Role::Analista | Role::Senior => &STAFF,
        Role::Coordinador => &COORDINATOR,
        Role::Gerente | Role::Socio => &MANAGEMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_sees_dashboard() {
        for role in Role::ALL {
            assert!(
                lookup(role).allows_view(ViewId::Dashboard),
                "{role} cannot see the dashboard"
            );
        }
    }

    #[test]
    fn test_view_sets_have_no_duplicates() {
        for role in Role::ALL {
            let views = lookup(role).views;
            let unique: std::collections::HashSet<_> = views.iter().collect();
            assert_eq!(unique.len(), views.len(), "{role} has duplicate views");
        }
    }

    #[test]
    fn test_staff_roles_have_no_capabilities() {
        for role in [Role::Auxiliar, Role::Analista, Role::Senior] {
            let caps = lookup(role);
            for capability in Capability::ALL {
                assert!(!caps.allows(capability), "{role} has {capability:?}");
            }
            assert!(!caps.allows_view(ViewId::Admin));
        }
    }

    #[test]
    fn test_coordinator_capabilities() {
        let caps = lookup(Role::Coordinador);
        assert!(caps.can_request_vacancy);
        assert!(caps.can_evaluate_team);
        assert!(caps.can_manage_employees);
        assert!(!caps.can_access_payroll);
        assert!(!caps.can_access_hr_analytics);
        assert!(caps.can_terminate);
        assert!(!caps.allows_view(ViewId::Admin));
    }

    #[test]
    fn test_management_roles_have_everything() {
        for role in [Role::Gerente, Role::Socio] {
            let caps = lookup(role);
            for capability in Capability::ALL {
                assert!(caps.allows(capability), "{role} lacks {capability:?}");
            }
            for view in ViewId::ALL {
                assert!(caps.allows_view(view), "{role} cannot see {view:?}");
            }
        }
    }
}
