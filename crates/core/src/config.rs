//! Connection configuration
//!
//! Settings come from three layers, later ones winning: the optional TOML
//! config file at `<config dir>/s9cmd/config.toml`, the AWS credential
//! environment variables, and command-line flags. The result is a single
//! [`ConnectionConfig`] value built once per invocation and passed by
//! reference into every component; nothing reads ambient global state after
//! construction.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default service endpoint host
pub const DEFAULT_HOST_BASE: &str = "s3.amazonaws.com";

/// Generic virtual-hosted-style bucket pattern; while the configured pattern
/// still equals this, per-bucket region discovery is performed
pub const DEFAULT_HOST_BUCKET: &str = "%(bucket)s.s3.amazonaws.com";

/// Default worker parallelism before clamping to the core count
pub const DEFAULT_THREADS: usize = 10;

/// Environment variable overriding the config directory (used by tests)
pub const CONFIG_DIR_ENV: &str = "S9_CONFIG_DIR";

/// On-disk configuration file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub access_key: String,

    #[serde(default)]
    pub secret_key: String,

    #[serde(default)]
    pub host_base: String,

    #[serde(default)]
    pub host_bucket: String,

    /// Worker parallelism; clamped to the number of available cores
    #[serde(default = "default_threads")]
    pub threads: usize,
}

fn default_threads() -> usize {
    DEFAULT_THREADS
}

/// Loads the configuration file
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager pointing at the default config path
    pub fn new() -> Result<Self> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or_else(|| Error::Config("could not determine config directory".into()))?
                .join("s9cmd"),
        };
        Ok(Self {
            config_path: config_dir.join("config.toml"),
        })
    }

    /// Create a ConfigManager with a custom path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load the configuration file, or defaults when it does not exist
    pub fn load(&self) -> Result<FileConfig> {
        if !self.config_path.exists() {
            return Ok(FileConfig::default());
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Resolved per-invocation connection settings, read-only for the duration of
/// a command
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub access_key: String,
    pub secret_key: String,
    pub host_base: String,
    pub host_bucket: String,
    pub recursive: bool,
    pub parallelism: usize,
}

impl ConnectionConfig {
    /// Seed a config from the file layer
    pub fn from_file(file: FileConfig) -> Self {
        Self {
            access_key: file.access_key,
            secret_key: file.secret_key,
            host_base: file.host_base,
            host_bucket: file.host_bucket,
            recursive: false,
            parallelism: file.threads,
        }
    }

    /// Fill unset credentials from `AWS_ACCESS_KEY_ID`/`AWS_SECRET_ACCESS_KEY`
    pub fn apply_env(&mut self) {
        self.apply_credentials(
            std::env::var("AWS_ACCESS_KEY_ID").ok(),
            std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
        );
    }

    /// Fill unset credentials from the given values
    pub fn apply_credentials(&mut self, access_key: Option<String>, secret_key: Option<String>) {
        if self.access_key.is_empty() {
            if let Some(key) = access_key {
                self.access_key = key;
            }
        }
        if self.secret_key.is_empty() {
            if let Some(key) = secret_key {
                self.secret_key = key;
            }
        }
    }

    /// Clamp parallelism to the number of available processor cores, with a
    /// floor of one worker
    pub fn clamp_parallelism(&mut self) {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        self.parallelism = self.parallelism.clamp(1, cores);
    }

    /// Whether an endpoint host other than the default service host is set
    pub fn has_custom_host_base(&self) -> bool {
        !self.host_base.is_empty() && self.host_base != DEFAULT_HOST_BASE
    }

    /// Whether a virtual-hosted-style pattern other than the generic default
    /// is set, making per-bucket region discovery unnecessary
    pub fn has_custom_host_bucket(&self) -> bool {
        !self.host_bucket.is_empty() && self.host_bucket != DEFAULT_HOST_BUCKET
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::from_file(FileConfig::default())
    }
}
