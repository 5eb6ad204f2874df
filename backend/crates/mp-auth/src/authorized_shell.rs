use crate::{AuthResult, SessionGate};

use mp_core::{Identity, Role, View};
use serde::Serialize;

/// One sidebar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub role: Role,
    pub label: &'static str,
    pub description: &'static str,
    pub active: bool,
}

/// Signed-in surface: renders one view per role and owns the sidebar and
/// logout affordances. Borrowed from an authenticated [`SessionGate`].
pub struct AuthorizedShell<'a> {
    gate: &'a mut SessionGate,
    role: Role,
}

impl<'a> AuthorizedShell<'a> {
    pub(crate) fn new(gate: &'a mut SessionGate) -> Self {
        let role = gate.state().role().unwrap_or_default();
        Self { gate, role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.gate.identity()
    }

    pub fn view(&self) -> View {
        View::for_role(self.role)
    }

    pub fn navigation(&self) -> Vec<NavEntry> {
        Role::ALL
            .iter()
            .map(|&role| NavEntry {
                role,
                label: role.label(),
                description: role.description(),
                active: role == self.role,
            })
            .collect()
    }

    /// Sidebar click. The stored identity keeps its original role.
    pub fn switch_role(&mut self, role: Role) -> AuthResult<View> {
        self.gate.switch_role(role)?;
        self.role = role;
        Ok(self.view())
    }

    /// Clears the store and hands control back to the gate.
    pub fn logout(self) -> AuthResult<()> {
        self.gate.logout()?;
        Ok(())
    }
}
