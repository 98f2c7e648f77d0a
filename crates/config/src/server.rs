//! HTTP server configuration

use serde::Deserialize;

/// HTTP server configuration
///
/// # Example
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 3000
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    /// Default: 127.0.0.1
    pub host: String,

    /// Bind port
    /// Default: 3000
    pub port: u16,
}

impl ServerConfig {
    /// Socket address string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}
