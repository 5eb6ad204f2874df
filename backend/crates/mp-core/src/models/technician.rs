use crate::TechnicianStatus;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Technician {
    pub id: String,
    pub name: String,
    pub status: TechnicianStatus,
    #[serde(default)]
    pub specialty: String,
}

impl Technician {
    pub fn is_available(&self) -> bool {
        self.status == TechnicianStatus::Available
    }
}
