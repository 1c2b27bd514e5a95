//! Configuration loading and constants.
//!
//! The only runtime-configurable value is the listening port, read once from
//! the `PORT` environment variable at startup. Everything else the service
//! serves is a process-lifetime constant defined here.

// =============================================================================
// Service Identity
// =============================================================================

/// Service name reported by the health check endpoint
pub const SERVICE_NAME: &str = "jurassic-spark-backend";

/// Greeting returned by the root route
pub const GREETING: &str = "🦖 Jurassic Spark backend is running!";

// =============================================================================
// HTTP Server
// =============================================================================

/// Environment variable holding the listening port
pub const PORT_ENV_VAR: &str = "PORT";

/// Listening port used when `PORT` is absent or empty
pub const DEFAULT_PORT: u16 = 3000;

/// Maximum accepted size for JSON request bodies (100 KiB)
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "jurassic_spark_backend=debug,tower_http=debug";

/// Application configuration, read once at process start and immutable after.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP listener binds to
    pub port: u16,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var(PORT_ENV_VAR).ok())?;
        Ok(Self { port })
    }
}

/// Resolve the listening port from the raw `PORT` value.
///
/// An absent, empty, or whitespace-only value falls back to
/// [`DEFAULT_PORT`]. A present, non-numeric value is a startup error rather
/// than a silent fallback.
fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) if value.trim().is_empty() => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value)),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0:?} (expected an integer between 0 and 65535)")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_port_falls_back_to_default() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        assert_eq!(parse_port(Some(String::new())).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn whitespace_only_port_falls_back_to_default() {
        assert_eq!(parse_port(Some("   ".to_string())).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn numeric_port_is_used() {
        assert_eq!(parse_port(Some("8080".to_string())).unwrap(), 8080);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(parse_port(Some(" 5050 ".to_string())).unwrap(), 5050);
    }

    #[test]
    fn non_numeric_port_is_an_error() {
        let err = parse_port(Some("not-a-port".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "not-a-port"));
    }

    #[test]
    fn out_of_range_port_is_an_error() {
        assert!(parse_port(Some("70000".to_string())).is_err());
    }
}
