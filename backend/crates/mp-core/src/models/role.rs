use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Portal role. Every persisted identity carries exactly one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Technician,
    Admin,
}

impl Role {
    /// Sidebar order.
    pub const ALL: [Role; 3] = [Role::User, Role::Technician, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Technician => "technician",
            Self::Admin => "admin",
        }
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User Portal",
            Self::Technician => "Technician",
            Self::Admin => "Admin Panel",
        }
    }

    /// Sidebar caption under the label.
    pub fn description(&self) -> &'static str {
        match self {
            Self::User => "Report issues",
            Self::Technician => "Manage tasks",
            Self::Admin => "System overview",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "user" => Ok(Self::User),
            "technician" => Ok(Self::Technician),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
