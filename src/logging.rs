//! File logging
//!
//! The terminal belongs to the TUI, so `tracing` output goes to a file.
//! The filter comes from `POSTDESK_LOG` (`info` when unset or invalid).

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directives
pub const LOG_ENV: &str = "POSTDESK_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Init(String),
}

/// Open `path` for appending, creating parent directories
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open = || -> io::Result<File> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    };

    open().map_err(|source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Filter from [`LOG_ENV`], falling back to `info`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber writing to `path`
pub fn init(path: &Path) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}
