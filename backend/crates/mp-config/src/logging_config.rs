use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub dir: String,
    /// Log file name inside `dir`. None = stderr
    pub file: Option<String>,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: true,
        }
    }
}

impl LoggingConfig {
    /// Both `dir` and `file` stay under the config directory.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::logging("logging.dir cannot be empty"));
        }

        if is_escaping(&self.dir) {
            return Err(ConfigError::logging(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        if let Some(ref file) = self.file
            && (file.trim().is_empty() || is_escaping(file))
        {
            return Err(ConfigError::logging(
                "logging.file must be a relative file name without '..'",
            ));
        }

        Ok(())
    }
}

fn is_escaping(path: &str) -> bool {
    Path::new(path).is_absolute() || path.contains("..")
}
