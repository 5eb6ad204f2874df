use serde::{Deserialize, Serialize};

/// Portal user record owned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub created_at: String,
}
