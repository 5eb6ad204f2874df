use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid issue status: {value} {location}")]
    InvalidIssueStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid technician status: {value} {location}")]
    InvalidTechnicianStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Issue cannot move from {from} to {to} {location}")]
    InvalidTransition {
        from: String,
        to: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates a Validation error for a named form field.
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
