//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 7001;
pub const DEFAULT_ENVIRONMENT: &str = "local_dev";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Deployment name, lowercased (`local_dev`, `staging`, ...).
    pub environment: String,
    /// Postgres connection string. `None` runs the server on the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 7001
    /// - `ENVIRONMENT`: default `local_dev`
    /// - `DATABASE_URL`: in-memory store when absent or blank
    /// - `DB_MAX_CONNECTIONS`: default 5; unparseable values fall back to the default
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let environment =
            non_blank(lookup("ENVIRONMENT")).map_or_else(|| DEFAULT_ENVIRONMENT.to_owned(), |v| v.to_lowercase());
        let database_url = non_blank(lookup("DATABASE_URL"));
        let db_max_connections = non_blank(lookup("DB_MAX_CONNECTIONS"))
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);

        Ok(Self { port, environment, database_url, db_max_connections })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
