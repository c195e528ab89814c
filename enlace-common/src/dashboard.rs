//! Dashboard application state
//!
//! Owns the session, the view router and the decisions derived from them.
//! All mutation goes through these methods so that a role change always runs
//! the same sequence: update the session, re-derive decisions, then move the
//! router off any view the new role can no longer see.

use crate::applier::{Decisions, apply};
use crate::permissions::lookup;
use crate::role::Role;
use crate::router::ViewRouter;
use crate::session::Session;
use crate::view::{HrSubView, ViewId};

/// Permission and navigation state of one dashboard
#[derive(Debug, Clone)]
pub struct Dashboard {
    session: Session,
    router: ViewRouter,
    decisions: Decisions,
}

impl Dashboard {
    /// Start a dashboard on the home view with decisions already applied
    pub fn new(session: Session) -> Self {
        let decisions = apply(&session);
        Self {
            session,
            router: ViewRouter::new(),
            decisions,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn decisions(&self) -> &Decisions {
        &self.decisions
    }

    /// Change the session role
    ///
    /// Returns `true` when the active view was no longer permitted and the
    /// router was sent back to the dashboard.
    pub fn change_role(&mut self, role: Role) -> bool {
        self.session.role = role;
        self.decisions = apply(&self.session);

        let active = self.router.active_view();
        let redirected = !lookup(role).allows_view(active);
        if redirected {
            self.router.switch_view(ViewId::Dashboard);
        }

        tracing::info!(
            role = role.label(),
            view = active.key(),
            redirected,
            "role changed"
        );
        redirected
    }

    pub fn switch_view(&mut self, view: ViewId) {
        self.router.switch_view(view);
    }

    pub fn switch_hr_sub_view(&mut self, sub_view: HrSubView) {
        self.router.switch_hr_sub_view(sub_view);
    }

    /// Follow a quick-access target
    pub fn quick_access(&mut self, target: &str) -> bool {
        self.router.quick_access(target)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Session::default())
    }
}
