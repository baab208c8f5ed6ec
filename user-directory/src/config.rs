//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: `USERDIR_`, sections separated by `__`,
//!    e.g. `USERDIR_SERVICE__PORT=8080`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/user-directory/config.toml
//! 4. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::listing::DEFAULT_LIMIT;

/// Application name used for the XDG directory and as the default service name
pub const APP_NAME: &str = "user-directory";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "USERDIR_";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,

    /// Listing endpoint configuration
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl ServiceConfig {
    /// Request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// The single origin allowed to make cross-origin requests
    #[serde(default = "default_cors_allowed_origin")]
    pub cors_allowed_origin: String,

    /// Request ID header name
    #[serde(default = "default_request_id_header")]
    pub request_id_header: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            cors_allowed_origin: default_cors_allowed_origin(),
            request_id_header: default_request_id_header(),
        }
    }
}

/// Listing endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Path of the listing route; also the prefix of every navigation link
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Page size when the client sends none
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Largest page size a client may request
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl ListingConfig {
    /// Route of the tag enumeration endpoint
    pub fn tags_path(&self) -> String {
        format!("{}/tags", self.base_path.trim_end_matches('/'))
    }
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_body_limit_mb() -> usize {
    1
}

fn default_cors_allowed_origin() -> String {
    "http://localhost:3001".to_string()
}

fn default_request_id_header() -> String {
    "x-request-id".to_string()
}

fn default_base_path() -> String {
    "/api/users".to_string()
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_max_limit() -> u32 {
    100
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Searches `./config.toml` then the XDG config directory; environment
    /// variables override both.
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Lowest priority first so higher priority files override
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        Self::finish(figment)
    }

    /// Load configuration from a specific file
    ///
    /// Bypasses the search path; environment variables still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()));

        Self::finish(figment)
    }

    fn finish(figment: Figment) -> Result<Self> {
        let config: Config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the service misbehave
    pub fn validate(&self) -> Result<()> {
        let listing = &self.listing;
        if listing.max_limit == 0 {
            return Err(Error::InvalidConfig("listing.max_limit must be at least 1".into()));
        }
        if listing.default_limit == 0 || listing.default_limit > listing.max_limit {
            return Err(Error::InvalidConfig(format!(
                "listing.default_limit must be between 1 and {}",
                listing.max_limit
            )));
        }
        if !listing.base_path.starts_with('/') {
            return Err(Error::InvalidConfig(format!(
                "listing.base_path must start with '/', got `{}`",
                listing.base_path
            )));
        }
        if self.middleware.request_id_header.is_empty() {
            return Err(Error::InvalidConfig("middleware.request_id_header must not be empty".into()));
        }
        Ok(())
    }

    /// Config file locations, highest priority first
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME);
        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            paths.push(path);
        }

        paths
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: APP_NAME.to_string(),
                port: default_port(),
                log_level: default_log_level(),
                timeout_secs: default_timeout(),
                environment: default_environment(),
            },
            middleware: MiddlewareConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}
