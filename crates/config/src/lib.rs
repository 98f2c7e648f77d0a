//! Cropflow Configuration
//!
//! TOML-based configuration loading with sensible defaults. Minimal config
//! should just work - only specify what you need to change.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use cropflow_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[server]\nport = 8080").unwrap();
//! assert_eq!(config.server.port, 8080);
//! ```
//!
//! # Example Config
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [log]
//! level = "info"
//! format = "console"
//! ```

mod error;
mod logging;
mod server;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use server::ServerConfig;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Logging settings
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e))?;
        contents.parse()
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(ConfigError::Parse)
    }
}
