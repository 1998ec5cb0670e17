//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TAILOR_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `TAILOR_HOST` - Bind address (default: 127.0.0.1)
//! - `TAILOR_PORT` - Listen port (default: 3001)
//! - `TAILOR_INIT_ON_STARTUP` - Create tables and seed the catalog before serving (default: true)
//! - `TAILOR_SIMULATION_DELAY_MS` - Artificial scan delay for simulated captures (default: 2000)
//! - `TAILOR_LOG_JSON` - Emit JSON logs instead of text (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Run store initialization before accepting requests
    pub init_on_startup: bool,
    /// How long a simulated measurement capture takes
    pub simulation_delay: Duration,
    /// Use the JSON log formatter
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Fallback to generic DATABASE_URL (set by most hosted Postgres attachments)
        let database_url = var("TAILOR_DATABASE_URL")
            .or_else(|| var("DATABASE_URL"))
            .map(SecretString::from)
            .ok_or_else(|| ConfigError::MissingEnvVar("TAILOR_DATABASE_URL".to_string()))?;

        let host = parse_var(&var, "TAILOR_HOST", "127.0.0.1", |v| {
            v.parse::<IpAddr>().map_err(|e| e.to_string())
        })?;
        let port = parse_var(&var, "TAILOR_PORT", "3001", |v| {
            v.parse::<u16>().map_err(|e| e.to_string())
        })?;
        let init_on_startup = parse_var(&var, "TAILOR_INIT_ON_STARTUP", "true", parse_bool)?;
        let simulation_delay = parse_var(&var, "TAILOR_SIMULATION_DELAY_MS", "2000", |v| {
            v.parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| e.to_string())
        })?;
        let log_json = parse_var(&var, "TAILOR_LOG_JSON", "false", parse_bool)?;

        Ok(Self {
            database_url,
            host,
            port,
            init_on_startup,
            simulation_delay,
            log_json,
            sentry_dsn: var("SENTRY_DSN").filter(|v| !v.is_empty()),
            sentry_environment: var("SENTRY_ENVIRONMENT").filter(|v| !v.is_empty()),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read a variable (or its default) and parse it, naming the variable on failure.
fn parse_var<F, T>(
    var: &F,
    key: &str,
    default: &str,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = var(key).unwrap_or_else(|| default.to_string());
    parse(raw.trim()).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e))
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean, got '{other}'")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("TAILOR_DATABASE_URL", "postgres://localhost/tailor")]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
        assert!(config.init_on_startup);
        assert_eq!(config.simulation_delay, Duration::from_secs(2));
        assert!(!config.log_json);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_missing_database_url() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "TAILOR_DATABASE_URL"));
    }

    #[test]
    fn test_database_url_fallback() {
        let config = load(&[("DATABASE_URL", "postgres://fallback/db")]).unwrap();
        assert_eq!(config.database_url.expose_secret(), "postgres://fallback/db");

        let config = load(&[
            ("TAILOR_DATABASE_URL", "postgres://primary/db"),
            ("DATABASE_URL", "postgres://fallback/db"),
        ])
        .unwrap();
        assert_eq!(config.database_url.expose_secret(), "postgres://primary/db");
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[
            ("TAILOR_DATABASE_URL", "postgres://localhost/tailor"),
            ("TAILOR_PORT", "not-a-port"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "TAILOR_PORT"));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("TAILOR_DATABASE_URL", "postgres://localhost/tailor"),
            ("TAILOR_HOST", "0.0.0.0"),
            ("TAILOR_PORT", "8080"),
            ("TAILOR_INIT_ON_STARTUP", "no"),
            ("TAILOR_SIMULATION_DELAY_MS", "0"),
            ("TAILOR_LOG_JSON", "TRUE"),
            ("SENTRY_DSN", ""),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(!config.init_on_startup);
        assert_eq!(config.simulation_delay, Duration::ZERO);
        assert!(config.log_json);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_bool() {
        let err = load(&[
            ("TAILOR_DATABASE_URL", "postgres://localhost/tailor"),
            ("TAILOR_LOG_JSON", "maybe"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "TAILOR_LOG_JSON"));
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = load(&[("TAILOR_DATABASE_URL", "postgres://user:hunter2@db/tailor")]).unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
