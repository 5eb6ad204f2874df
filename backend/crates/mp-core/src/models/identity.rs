use crate::Role;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in identity, persisted as the single credential record.
///
/// Only `role` is required when reading a stored record; the other fields
/// fall back to empty values so older or hand-edited records still load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// ISO-8601 timestamp
    #[serde(default)]
    pub created_at: String,
}

impl Identity {
    /// New identity with a generated id and the current timestamp.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        password: Option<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            role,
            password,
            phone,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Exact email and password match. Identities without a stored
    /// password never match.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password.as_deref() == Some(password)
    }
}
