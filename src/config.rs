//! Configuration loading and constants.
//!
//! Defines the service identity, the literal response bodies and the default
//! listener address. `AppConfig` is the root configuration struct; every field
//! has a default so the service runs identically with or without a TOML file.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

// =============================================================================
// Service Identity
// =============================================================================

/// Name reported on `/` and in the startup line
pub const SERVICE_NAME: &str = "myservice";

/// Version reported on `/version`
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Response Bodies
// =============================================================================
// Byte-exact, including the trailing newline. Deployment checks compare these
// literally.

pub const ROOT_BODY: &str = formatcp!("hello from {}\n", SERVICE_NAME);

pub const HEALTH_BODY: &str = "ok\n";

pub const VERSION_BODY: &str = formatcp!("version {}\n", SERVICE_VERSION);

/// Probes must never be answered from a cache
pub const CACHE_CONTROL_PROBE: &str = "no-store";

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "myservice=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Optional routes
    #[serde(default)]
    pub routes: RoutesConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    /// Port to bind; 0 lets the kernel pick one
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    /// `host:port` as given, before resolution
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutesConfig {
    /// Serve `/version` (default: true)
    #[serde(default = "RoutesConfig::default_version")]
    pub version: bool,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
        }
    }
}

impl RoutesConfig {
    fn default_version() -> bool {
        true
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json"
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;

        if !matches!(config.logging.format.to_ascii_lowercase().as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                config.logging.format
            )));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_are_byte_exact() {
        assert_eq!(ROOT_BODY, "hello from myservice\n");
        assert_eq!(HEALTH_BODY, "ok\n");
        assert_eq!(VERSION_BODY, "version 0.1.0\n");
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert!(config.routes.version);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = AppConfig::parse(
            r#"
            [http]
            port = 9090

            [routes]
            version = false
            "#,
        )
        .unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, 9090);
        assert!(!config.routes.version);
        assert_eq!(config.http.address(), "0.0.0.0:9090");
    }

    #[test]
    fn json_format_is_case_insensitive() {
        let config = AppConfig::parse("[logging]\nformat = \"JSON\"\n").unwrap();
        assert!(config.logging.is_json());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = AppConfig::parse("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = AppConfig::parse("[http\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::parse("[http]\nprot = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load("/nonexistent/myservice.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
