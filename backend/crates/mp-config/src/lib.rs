mod api_config;
mod auth_config;
mod config;
mod demo_credential;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use demo_credential::DemoCredential;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "MP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".mp";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
const MAX_LOGIN_DELAY_MS: u64 = 30_000;
const DEFAULT_PLACEHOLDER_PHONE: &str = "123-456-7890";
const DEFAULT_DEMO_PASSWORD: &str = "123456";

const DEFAULT_SESSION_FILENAME: &str = "session.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
