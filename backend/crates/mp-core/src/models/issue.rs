use crate::IssueStatus;

use serde::{Deserialize, Serialize};

/// Maintenance issue as listed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub id: String,
    pub description: String,
    pub status: IssueStatus,
    #[serde(default)]
    pub category: String,
    pub user_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_technician: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
