use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Pending,
    Assigned,
    InProgress,
    Resolved,
}

/// Action a technician can take on an issue in a given status.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueAction {
    StartWork,
    MarkResolved,
}

impl IssueAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StartWork => "Start Work",
            Self::MarkResolved => "Mark Resolved",
        }
    }

    pub fn target(&self) -> IssueStatus {
        match self {
            Self::StartWork => IssueStatus::InProgress,
            Self::MarkResolved => IssueStatus::Resolved,
        }
    }
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }

    /// Human form used in notifications ("in progress").
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn next_action(&self) -> Option<IssueAction> {
        match self {
            Self::Assigned => Some(IssueAction::StartWork),
            Self::InProgress => Some(IssueAction::MarkResolved),
            Self::Pending | Self::Resolved => None,
        }
    }

    /// Checks a technician status update against the task workflow.
    #[track_caller]
    pub fn transition_to(&self, target: IssueStatus) -> CoreResult<IssueStatus> {
        match self.next_action() {
            Some(action) if action.target() == target => Ok(target),
            _ => Err(CoreError::InvalidTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "assigned" => Ok(Self::Assigned),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(CoreError::InvalidIssueStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
