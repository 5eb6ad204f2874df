use crate::DEFAULT_DEMO_PASSWORD;

use mp_core::Role;
use serde::Deserialize;

/// One row of the demo login table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DemoCredential {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

impl DemoCredential {
    pub fn new(email: &str, password: &str, role: Role, name: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            role,
            name: name.to_string(),
        }
    }

    /// One demo account per role.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("user@demo.com", DEFAULT_DEMO_PASSWORD, Role::User, "Demo User"),
            Self::new(
                "tech@demo.com",
                DEFAULT_DEMO_PASSWORD,
                Role::Technician,
                "Demo Technician",
            ),
            Self::new("admin@demo.com", DEFAULT_DEMO_PASSWORD, Role::Admin, "Demo Admin"),
        ]
    }

    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
