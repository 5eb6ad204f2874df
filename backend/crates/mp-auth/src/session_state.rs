use std::fmt;

use mp_core::Role;
use serde::Serialize;

/// Where the session gate currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "role", rename_all = "snake_case")]
pub enum SessionState {
    Loading,
    Unauthenticated,
    Authenticated(Role),
}

impl SessionState {
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Authenticated(role) => Some(*role),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("loading"),
            Self::Unauthenticated => f.write_str("unauthenticated"),
            Self::Authenticated(role) => write!(f, "authenticated as {role}"),
        }
    }
}
