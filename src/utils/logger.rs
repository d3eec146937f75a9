//! Logger utility for application-wide logging
//!
//! This module provides a file-writing logger that works alongside the
//! standard log crate, the console fallback built on env_logger, and the
//! process-wide debug toggle.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Turns debug logging on or off for the whole process
///
/// Parsing only ever reads this setting.
pub fn set_debug(enabled: bool) {
    log::set_max_level(if enabled { LevelFilter::Debug } else { LevelFilter::Warn });
}

/// Whether debug logging is currently enabled
pub fn is_debug() -> bool {
    log::max_level() >= LevelFilter::Debug
}

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Installs the global logger
    ///
    /// With a log file, records go to that file and to stderr. Without one,
    /// env_logger writes to stderr; a `RUST_LOG` filter then sets the level
    /// unless `verbose` asks for debug output.
    ///
    /// # Arguments
    ///
    /// * `log_file` - Optional path to the log file
    /// * `verbose` - Whether to start with debug logging enabled
    pub fn init_global_logger(log_file: Option<&str>, verbose: bool) -> io::Result<()> {
        match log_file {
            Some(path) => {
                let global_logger = Logger::new(path)?;
                if log::set_boxed_logger(Box::new(global_logger)).is_err() {
                    eprintln!("Warning: Global logger was already initialized");
                }
                set_debug(verbose);
            }
            None => {
                let filters = std::env::var("RUST_LOG").ok();

                let mut builder = env_logger::Builder::new();
                builder.filter_level(LevelFilter::Trace);
                if let Some(filters) = &filters {
                    builder.parse_filters(filters);
                }
                if builder.try_init().is_err() {
                    eprintln!("Warning: Global logger was already initialized");
                }

                // try_init installed the RUST_LOG level
                if verbose || filters.is_none() {
                    set_debug(verbose);
                }
            }
        }

        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            // Also print to console
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
