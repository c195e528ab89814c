//! In-memory session of the logged-in user

use crate::role::Role;

/// Display name used when no name is configured
pub const DEFAULT_USER_NAME: &str = "Usuario de Prueba";

/// The current user's display name and role
///
/// Exactly one session exists per running dashboard. It is never persisted;
/// restarting the application resets it to the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub role: Role,
}

impl Session {
    /// Create a session with the default role
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::default(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_USER_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let session = Session::default();
        assert_eq!(session.name, DEFAULT_USER_NAME);
        assert_eq!(session.role, Role::Auxiliar);
    }

    #[test]
    fn test_named_session_starts_with_default_role() {
        let session = Session::new("Ana Gómez");
        assert_eq!(session.name, "Ana Gómez");
        assert_eq!(session.role, Role::Auxiliar);
    }
}
