//! Configuration structures for the request pipeline.
//!
//! This module provides TOML-based configuration. The configuration system
//! supports:
//! - Bundled defaults (include_str! from scryer.toml)
//! - User overrides (./scryer.toml or ~/.config/scryer/scryer.toml)
//! - Automatic merging with user values taking precedence
//!
//! Every field has a serde default, so a user file only needs the values it changes.

use config::{Config, File, FileFormat};
use scryer_core::{SCRYFALL_API_BASE, default_user_agent};
use scryer_error::{ConfigError, ScryerError, ScryerResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// HTTP transport settings.
///
/// ```toml
/// [http]
/// base_url = "https://api.scryfall.com"
/// user_agent = "my-deckbuilder/1.0"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Origin every route resolves against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    SCRYFALL_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Rate gate settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Requests allowed per window
    #[serde(default = "default_max_calls")]
    pub max_calls_per_window: u32,

    /// Window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,

    /// Cooldown after a 429 response, in seconds
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,
}

fn default_max_calls() -> u32 {
    10
}

fn default_window_ms() -> u64 {
    1000
}

fn default_cooldown_secs() -> u64 {
    5
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_calls_per_window: default_max_calls(),
            window_ms: default_window_ms(),
            cooldown_secs: default_cooldown_secs(),
        }
    }
}

/// Retry and backoff settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Attempts per logical call
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Backoff after the first failed attempt, in milliseconds
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,

    /// Added backoff per further attempt, in milliseconds
    #[serde(default = "default_backoff_step_ms")]
    pub backoff_step_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_base_ms() -> u64 {
    1000
}

fn default_backoff_step_ms() -> u64 {
    2000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
            backoff_step_ms: default_backoff_step_ms(),
        }
    }
}

/// Top-level scryer configuration.
///
/// Loads from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from scryer.toml)
/// 2. User override (~/.config/scryer/scryer.toml, then ./scryer.toml)
///
/// # Example
///
/// ```no_run
/// use scryer_rate_limit::ScryerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScryerConfig::load()?;
/// println!("Max calls per window: {}", config.rate_limit.max_calls_per_window);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ScryerConfig {
    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Rate gate settings
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Retry settings
    #[serde(default)]
    pub retry: RetryConfig,
}

impl ScryerConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ScryerResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ScryerError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScryerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (scryer.toml shipped with library)
    /// 2. User config in home directory (~/.config/scryer/scryer.toml)
    /// 3. User config in current directory (./scryer.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> ScryerResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../scryer.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scryer/scryer.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scryer").required(false));

        builder
            .build()
            .map_err(|e| {
                ScryerError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScryerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
