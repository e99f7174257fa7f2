// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::core::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

// Open the log file for appending, creating parent directories as needed
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Configure env_logger from the loaded config. `RUST_LOG` still overrides the level.
pub fn init(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .parse_default_env();

    if let Some(log_file) = &config.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(open_log_file(log_file)?)));
    }

    builder.try_init()?;

    log::debug!("Logging initialized at level {}", config.log_level);
    Ok(())
}

/// Log problems found while loading the config, once a logger is installed.
pub fn report_warnings(warnings: &[String]) {
    for warning in warnings {
        log::warn!("{}", warning);
    }
}
