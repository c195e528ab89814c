//! User roles
//!
//! The closed set of roles a dashboard user can hold. Role labels are the
//! Spanish names shown in the role selector.

use std::fmt;

/// A named category of user that determines permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Role {
    /// Entry-level assistant (default at startup)
    #[default]
    Auxiliar,
    /// Analyst
    Analista,
    /// Senior staff
    Senior,
    /// Team coordinator
    Coordinador,
    /// Manager
    Gerente,
    /// Partner
    Socio,
}

impl Role {
    /// All roles in selector order
    pub const ALL: [Role; 6] = [
        Role::Auxiliar,
        Role::Analista,
        Role::Senior,
        Role::Coordinador,
        Role::Gerente,
        Role::Socio,
    ];

    /// Label shown in the UI and used as the selector value
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auxiliar => "Auxiliar",
            Self::Analista => "Analista",
            Self::Senior => "Senior",
            Self::Coordinador => "Coordinador",
            Self::Gerente => "Gerente",
            Self::Socio => "Socio",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
