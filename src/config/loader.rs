//! Load database parameters from the environment (after `.env` has been read).

use crate::config::types::PostgresConfig;
use crate::error::ConfigError;

pub const ENV_DATABASE_HOST: &str = "DATABASE_HOST";
pub const ENV_DATABASE_PORT: &str = "DATABASE_PORT";
pub const ENV_DATABASE_USERNAME: &str = "DATABASE_USERNAME";
pub const ENV_DATABASE_PASSWORD: &str = "DATABASE_PASSWORD";
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

impl PostgresConfig {
    /// Read `DATABASE_*` variables from the process environment; unset variables keep defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PostgresConfig::default();
        if let Some(host) = lookup(ENV_DATABASE_HOST) {
            config.host = host;
        }
        if let Some(port) = lookup(ENV_DATABASE_PORT) {
            config.port = parse_port(&port)?;
        }
        if let Some(username) = lookup(ENV_DATABASE_USERNAME) {
            config.username = username;
        }
        if let Some(password) = lookup(ENV_DATABASE_PASSWORD) {
            config.password = password;
        }
        if let Some(database) = lookup(ENV_DATABASE_NAME) {
            config.database = database;
        }
        Ok(config)
    }
}

pub fn parse_port(s: &str) -> Result<u16, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(s.to_string()))
}

/// Accept a bare level name or a full `EnvFilter` directive list.
pub fn validate_log_level(level: &str) -> Result<(), ConfigError> {
    let level = level.trim();
    if level.is_empty() {
        return Err(ConfigError::InvalidLogLevel(level.to_string()));
    }
    if level.contains('=') || level.contains(',') {
        return Ok(());
    }
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidLogLevel(level.to_string()))
    }
}
