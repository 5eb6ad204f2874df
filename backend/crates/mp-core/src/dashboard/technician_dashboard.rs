use crate::{Issue, IssueAction, IssueStatus, Technician};

use serde::Serialize;

/// An assigned issue together with the action the technician can take next.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TechnicianTask {
    #[serde(flatten)]
    pub issue: Issue,
    pub action: Option<IssueAction>,
}

impl TechnicianTask {
    fn new(issue: Issue) -> Self {
        let action = issue.status.next_action();
        Self { issue, action }
    }
}

/// Task list for the current technician.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TechnicianDashboard {
    pub technician: Option<Technician>,
    pub tasks: Vec<TechnicianTask>,
}

impl TechnicianDashboard {
    /// The first technician returned by the backend is the current one.
    /// With no technicians at all the dashboard is empty.
    pub fn build(issues: Vec<Issue>, technicians: Vec<Technician>) -> Self {
        let Some(technician) = technicians.into_iter().next() else {
            return Self {
                technician: None,
                tasks: Vec::new(),
            };
        };

        let tasks = issues
            .into_iter()
            .filter(|issue| issue.assigned_technician.as_deref() == Some(technician.name.as_str()))
            .map(TechnicianTask::new)
            .collect();

        Self {
            technician: Some(technician),
            tasks,
        }
    }

    pub fn task(&self, issue_id: &str) -> Option<&TechnicianTask> {
        self.tasks.iter().find(|task| task.issue.id == issue_id)
    }

    /// Mirrors a confirmed status update into the local task list.
    /// Returns false when the issue is not on this dashboard.
    pub fn apply_status(&mut self, issue_id: &str, status: IssueStatus) -> bool {
        match self.tasks.iter_mut().find(|task| task.issue.id == issue_id) {
            Some(task) => {
                task.issue.status = status;
                task.action = status.next_action();
                true
            }
            None => false,
        }
    }
}
