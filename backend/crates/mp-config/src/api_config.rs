use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL};

use serde::Deserialize;

/// Where the maintenance backend lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        let host = url.split_once("://").map(|(_, rest)| rest).unwrap_or("");
        if host.trim_matches('/').is_empty() {
            return Err(ConfigError::api("api.base_url must include a host"));
        }

        Ok(())
    }
}
