use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILENAME};

use std::path::Path;

use serde::Deserialize;

/// Location of the persisted credential record, relative to the config dir
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_SESSION_FILENAME),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.trim().is_empty() {
            return Err(ConfigError::session("session.file cannot be empty"));
        }

        if Path::new(&self.file).is_absolute() || self.file.contains("..") {
            return Err(ConfigError::session(
                "session.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
