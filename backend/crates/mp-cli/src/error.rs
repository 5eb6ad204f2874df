use crate::ClientError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] mp_config::ConfigError),

    #[error("{0}")]
    Auth(#[from] mp_auth::AuthError),

    #[error("{0}")]
    Core(#[from] mp_core::CoreError),

    #[error("{0}")]
    Client(#[from] ClientError),

    #[error("Not signed in. Run `mp login --email <email> --password <password>` first")]
    NotSignedIn,

    #[error("Issue {id} is not one of the current technician's tasks")]
    IssueNotFound { id: String },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Error serializing response: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
