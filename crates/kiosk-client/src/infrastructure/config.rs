//! TOML configuration for the `kioskctl` binary.
//!
//! The library's [`KioskClient`](crate::application::KioskClient) takes its
//! host, port and password explicitly and has no defaults.  This module is
//! only how the command-line tool finds those values when they are not given
//! on the command line.
//!
//! # File format
//!
//! ```toml
//! log_level = "info"
//!
//! [device]
//! host = "192.168.1.10"
//! port = 2323
//! password = "secret"
//!
//! [http]
//! timeout_secs = 10
//! ```
//!
//! Every field is optional.  Absent fields fall back to the
//! `#[serde(default = "...")]` helpers below; `host` and `password` have no
//! default and must come from the file, the environment, or the command line.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value required to reach the device was not supplied anywhere.
    #[error("missing required setting: {0}")]
    MissingField(&'static str),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KioskConfig {
    /// `tracing` level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Where the device is and how to authenticate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Remote-admin port; the device ships with 2323.
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Settings for the HTTP session the binary creates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds.  `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_port() -> u16 {
    2323
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            device: DeviceConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: default_port(),
            password: None,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl HttpConfig {
    /// The configured timeout, or `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl KioskConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is malformed.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The configured host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if no host was configured.
    pub fn host(&self) -> Result<&str, ConfigError> {
        self.device
            .host
            .as_deref()
            .ok_or(ConfigError::MissingField("device.host"))
    }

    /// The configured password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if no password was configured.
    pub fn password(&self) -> Result<&str, ConfigError> {
        self.device
            .password
            .as_deref()
            .ok_or(ConfigError::MissingField("device.password"))
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Loads configuration from `path`, or returns defaults when `path` is `None`.
///
/// An explicitly named file that does not exist is an error.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: Option<&Path>) -> Result<KioskConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(KioskConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    KioskConfig::from_toml(&content)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
