//! Application configuration

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Security configuration
    #[serde(default)]
    pub security: SecurityConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Seconds to wait for open connections on shutdown
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            shutdown_timeout_secs: None,
        }
    }
}

/// Security-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Include internal error details in responses (disable in production)
    pub expose_internal_errors: bool,
    /// CORS allow-list; empty means allow any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            expose_internal_errors: true,
            allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file, and
    /// `CHRONOSORT_*` environment overrides (e.g. `CHRONOSORT_SERVER_PORT`)
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8001)?
            .set_default("security.expose_internal_errors", true)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("CHRONOSORT")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// The socket address string to bind the listener to
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
