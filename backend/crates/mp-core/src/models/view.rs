use crate::Role;

use std::str::FromStr;

use serde::Serialize;

/// The single role-specific view the authorized shell renders.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum View {
    IssueSubmission,
    TechnicianTasks,
    AdminOverview,
}

impl View {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::User => Self::IssueSubmission,
            Role::Technician => Self::TechnicianTasks,
            Role::Admin => Self::AdminOverview,
        }
    }

    /// Unknown role names land on the issue submission view.
    pub fn from_role_name(name: &str) -> Self {
        Role::from_str(name)
            .map(Self::for_role)
            .unwrap_or(Self::IssueSubmission)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::IssueSubmission => "Report Issue",
            Self::TechnicianTasks => "Technician Dashboard",
            Self::AdminOverview => "Admin Panel",
        }
    }
}
