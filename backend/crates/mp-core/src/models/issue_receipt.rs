use serde::{Deserialize, Serialize};

/// Response body of a successful issue submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IssueReceipt {
    pub issue_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_technician: Option<String>,
}
