//! Logging setup.
//!
//! All modules log through the `log` macros. [`Logger::init`] installs a `fern`
//! dispatcher that always mirrors records into the in-memory buffer shown by
//! the logs dialog, and additionally appends them to a file when logging is
//! enabled in the configuration.

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_BUFFER_CAPACITY, LOG_FILE_NAME};

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
    file_path: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(LOG_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
            file_path: None,
        }
    }

    /// Install the global `log` dispatcher described by `config`.
    ///
    /// `force_debug` raises the level to `Debug` and turns the file sink on.
    pub fn init(config: &LoggingConfig, force_debug: bool) -> Result<Self> {
        let mut logger = Self::new();
        let file_enabled = config.enabled || force_debug;
        let level = if force_debug {
            LevelFilter::Debug
        } else if config.enabled {
            config.level_filter()
        } else {
            LevelFilter::Info
        };

        let memory = logger.clone();
        let mut dispatch = fern::Dispatch::new()
            .level(level)
            // Dependencies are noisy at debug level
            .level_for("hyper", LevelFilter::Warn)
            .level_for("hyper_util", LevelFilter::Warn)
            .level_for("reqwest", LevelFilter::Warn)
            .level_for("rustls", LevelFilter::Warn)
            .chain(fern::Output::call(move |record| {
                memory.log(format!("{:<5} {}", record.level(), record.args()));
            }));

        if file_enabled {
            let path = match &config.file {
                Some(path) => path.clone(),
                None => Self::get_log_file_path()?,
            };
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{} {:<5} {}] {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
            logger.file_path = Some(path);
        }

        dispatch.apply().context("Failed to install logger")?;
        Ok(logger)
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == self.capacity {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// File the dispatcher writes to, if file logging is on
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Default log file location inside the data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
