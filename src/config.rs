//! Command-line and environment configuration
//!
//! Every option can be given as a flag or through its `POSTDESK_*`
//! environment variable. [`Args`] is the raw clap form, [`Config`] the
//! validated one.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;
use thiserror::Error;

use crate::api::constants;
use crate::i18n::Locale;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILE_NAME: &str = "postdesk.log";
pub const DEFAULT_TIMEOUT_SECS: u64 = constants::DEFAULT_TIMEOUT.as_secs();

/// Terminal moderation console for the Telegram post pipeline
#[derive(Parser, Debug, Clone)]
#[command(name = "postdesk", version, about, long_about = None)]
pub struct Args {
    /// Backend base URL (routes live under `<url>/api`)
    #[arg(long, env = "POSTDESK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Base URL media files are served from (defaults to the API URL)
    #[arg(long, env = "POSTDESK_MEDIA_URL")]
    pub media_url: Option<String>,

    /// Bearer token for the admin API
    #[arg(long, env = "POSTDESK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Interface language: ru or en
    #[arg(long, env = "POSTDESK_LOCALE", default_value = "ru")]
    pub locale: String,

    /// Log file (defaults to postdesk.log in the temp directory)
    #[arg(long, env = "POSTDESK_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "POSTDESK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Errors in user-supplied configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name} '{value}': {reason}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    InvalidLocale(String),

    #[error("timeout must be at least one second")]
    InvalidTimeout,
}

/// Validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL without trailing `/`
    pub api_url: String,
    /// Media base URL without trailing `/`
    pub media_url: String,
    pub token: Option<String>,
    pub locale: Locale,
    pub log_file: PathBuf,
    pub timeout: Duration,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let api_url = validate_url("API URL", &args.api_url)?;
        let media_url = match args.media_url.as_deref() {
            Some(url) if !url.trim().is_empty() => validate_url("media URL", url)?,
            _ => api_url.clone(),
        };
        let locale = args
            .locale
            .parse::<Locale>()
            .map_err(ConfigError::InvalidLocale)?;
        if args.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Self {
            api_url,
            media_url,
            token: args.token.filter(|t| !t.trim().is_empty()),
            locale,
            log_file: args
                .log_file
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME)),
            timeout: Duration::from_secs(args.timeout_secs),
        })
    }

    /// Parse process arguments and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_args(Args::parse())
    }
}

/// Accept absolute http(s) URLs only; returns the URL without trailing `/`
fn validate_url(name: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(trimmed.to_string())
}
