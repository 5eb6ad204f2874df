use crate::{Issue, PortalUser, Technician};

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct SystemStats {
    pub total_users: usize,
    pub total_technicians: usize,
    pub total_issues: usize,
    pub available_technicians: usize,
}

/// Everything the admin panel shows: headline stats plus the three lists.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AdminOverview {
    pub stats: SystemStats,
    pub issues: Vec<Issue>,
    pub technicians: Vec<Technician>,
    pub users: Vec<PortalUser>,
}

impl AdminOverview {
    pub fn build(users: Vec<PortalUser>, technicians: Vec<Technician>, issues: Vec<Issue>) -> Self {
        let stats = SystemStats {
            total_users: users.len(),
            total_technicians: technicians.len(),
            total_issues: issues.len(),
            available_technicians: technicians.iter().filter(|t| t.is_available()).count(),
        };

        Self {
            stats,
            issues,
            technicians,
            users,
        }
    }
}
