use crate::SessionStoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Validation error: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication failed: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot {action} while session is {state} {location}")]
    InvalidTransition {
        state: String,
        action: &'static str,
        location: ErrorLocation,
    },

    #[error("Session store error: {source} {location}")]
    Store {
        #[source]
        source: SessionStoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Credentials matched neither the stored identity nor the demo table.
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::Authentication {
            message: "invalid email or password".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_transition(state: impl ToString, action: &'static str) -> Self {
        Self::InvalidTransition {
            state: state.to_string(),
            action,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Authentication { .. } => "AUTHENTICATION_ERROR",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::Store { .. } => "SESSION_STORE_ERROR",
        }
    }
}

impl From<SessionStoreError> for AuthError {
    #[track_caller]
    fn from(source: SessionStoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
