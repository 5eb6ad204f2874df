use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_DELAY_MS, DEFAULT_PLACEHOLDER_PHONE,
    DemoCredential, MAX_LOGIN_DELAY_MS,
};

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated round trip before credentials are checked
    pub login_delay_ms: u64,
    /// Phone number stamped on identities created from the demo table
    pub placeholder_phone: String,
    pub demo_credentials: Vec<DemoCredential>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            placeholder_phone: String::from(DEFAULT_PLACEHOLDER_PHONE),
            demo_credentials: DemoCredential::defaults(),
        }
    }
}

impl AuthConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.login_delay_ms > MAX_LOGIN_DELAY_MS {
            return Err(ConfigError::auth(format!(
                "auth.login_delay_ms must be <= {}, got {}",
                MAX_LOGIN_DELAY_MS, self.login_delay_ms
            )));
        }

        let mut seen = HashSet::new();
        for (index, credential) in self.demo_credentials.iter().enumerate() {
            if credential.email.trim().is_empty() || credential.password.trim().is_empty() {
                return Err(ConfigError::auth(format!(
                    "auth.demo_credentials[{index}] needs a non-empty email and password"
                )));
            }

            if !seen.insert(credential.email.as_str()) {
                return Err(ConfigError::auth(format!(
                    "auth.demo_credentials has duplicate email '{}'",
                    credential.email
                )));
            }
        }

        Ok(())
    }
}
