//! # Logger
//!
//! Installs the global `tracing` subscriber that makes tripwire diagnostics
//! visible: development warnings are emitted by `tripwire::TracingSink` at
//! `WARN` level under the [`GUARD_TARGET`] target, and end up on the console,
//! in rolling log files, or both.
//!
//! Guard warnings stay visible even when the level, an explicit
//! [`LoggerBuilder::env_filter`] or `RUST_LOG` is stricter than `WARN`, unless
//! [`LoggerBuilder::guard_warnings`] turns that off.
//!
//! ## Example
//!
//! ```rust
//! use tripwire_logger::{GUARD_TARGET, LevelFilter, Logger};
//!
//! let _logger = Logger::builder("my-app")
//!     .console(true)
//!     .level(LevelFilter::ERROR)
//!     .init()
//!     .unwrap();
//!
//! tracing::warn!(target: GUARD_TARGET, "Warning. shown despite the ERROR level");
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Target used by tripwire's tracing sink; mirrors `tripwire::TracingSink::TARGET`.
pub const GUARD_TARGET: &str = "tripwire::warning";

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug, Clone)]
struct FileOutput {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

/// Configures and installs the global subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    guard_warnings: bool,
    file: Option<FileOutput>,
}

impl LoggerBuilder {
    /// Enables or disables the compact ANSI console layer (on by default).
    #[must_use = "The builder must be initialized to install the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Minimum level for everything not covered by a more specific directive.
    #[must_use = "The builder must be initialized to install the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Adds explicit directives such as `myapp=debug,hyper=info`.
    ///
    /// Without one, `RUST_LOG` is consulted. Invalid directives make
    /// [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be initialized to install the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Keeps guard warnings ([`GUARD_TARGET`] at `WARN`) enabled whatever the
    /// level or filter directives say (on by default).
    #[must_use = "The builder must be initialized to install the logger."]
    pub const fn guard_warnings(mut self, enabled: bool) -> Self {
        self.guard_warnings = enabled;
        self
    }

    /// Also writes to rolling files `<dir>/<name>.<date>.log`.
    #[must_use = "The builder must be initialized to install the logger."]
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file = Some(FileOutput {
            dir: dir.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        });
        self
    }

    /// File rotation policy; ignored without [`LoggerBuilder::path`].
    #[must_use = "The builder must be initialized to install the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// How many rotated files to keep; ignored without [`LoggerBuilder::path`].
    #[must_use = "The builder must be initialized to install the logger."]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// JSON lines in the log files; ignored without [`LoggerBuilder::path`].
    #[must_use = "The builder must be initialized to install the logger."]
    pub fn json(mut self) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.json = true;
        }
        self
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive for as long as logs should be
    /// written; dropping it flushes and stops the file worker.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero
    ///   `max_files`, a bad filter, or when no output is enabled.
    /// * [`LoggerError::Appender`] / [`LoggerError::Internal`] when the log
    ///   directory or file can't be created.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_filter()?;

        let mut layers = Vec::new();
        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &self.file {
            Some(file) => {
                let (file_layer, guard) = file_layer(&self.name, file)?;
                layers.push(file_layer);
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No output enabled. Enable the console or a log directory.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(name = %self.name, "Logger installed");

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        if self.file.as_ref().is_some_and(|file| file.max_files == 0) {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }

        Ok(())
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        let mut filter = match &self.env_filter {
            Some(directives) => builder.parse(directives).map_err(|e| {
                LoggerError::InvalidConfiguration {
                    message: format!("Invalid env filter '{directives}': {e}").into(),
                    context: None,
                }
            })?,
            None => builder.from_env_lossy(),
        };

        // Pins only the sink's target; the rest of `tripwire::*` follows the filter.
        if self.guard_warnings {
            let directive: Directive = format!("{GUARD_TARGET}=warn")
                .parse()
                .map_err(|e| LoggerError::Internal {
                    message: format!("{e}").into(),
                    context: Some("Failed to build the guard warning directive".into()),
                })?;
            filter = filter.add_directive(directive);
        }

        Ok(filter)
    }
}

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

fn file_layer(name: &str, file: &FileOutput) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(&file.dir).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create log directory {}", file.dir.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.dir)
        .context("Failed to open rolling log file")?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let plain = layer().with_writer(writer).with_ansi(false);
    let boxed = if file.json { plain.json().boxed() } else { plain.boxed() };

    Ok((boxed, guard))
}

/// Handle to the installed logger.
///
/// Owns the background file worker, if any; drop it only at shutdown.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring a logger. `name` prefixes the rolling log files.
    #[must_use = "The builder must be initialized to install the logger."]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            guard_warnings: true,
            file: None,
        }
    }

    /// Whether a file worker is attached.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logger shutting down, flushing file output");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("test-app");
        assert!(builder.console);
        assert!(builder.guard_warnings);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.file.is_none());
    }

    #[test]
    fn file_options_apply_after_path() {
        let builder = Logger::builder("test-app")
            .path("logs")
            .max_files(3)
            .rotation(Rotation::HOURLY)
            .json();

        let file = builder.file.expect("file output configured");
        assert_eq!(file.max_files, 3);
        assert!(file.json);
        assert_eq!(file.dir, PathBuf::from("logs"));
    }

    #[test]
    fn file_options_without_path_are_ignored() {
        let builder = Logger::builder("test-app").max_files(0).json();
        assert!(builder.file.is_none());
        assert!(builder.validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder("  ").validate().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn zero_max_files_is_rejected() {
        let err = Logger::builder("app").path("logs").max_files(0).validate().unwrap_err();
        assert!(err.to_string().contains("max_files"));
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let err = Logger::builder("app").env_filter("app=verbose").build_filter().unwrap_err();
        assert!(err.to_string().starts_with("Invalid logger configuration: Invalid env filter"));
    }

    fn guard_directive() -> String {
        format!("{GUARD_TARGET}=warn")
    }

    #[test]
    fn strict_level_keeps_guard_warnings() {
        let filter =
            Logger::builder("app").env_filter("error").level(LevelFilter::ERROR).build_filter();
        let rendered = filter.unwrap().to_string().to_lowercase();
        assert!(rendered.contains(&guard_directive()), "filter was {rendered}");

        let filter = Logger::builder("app")
            .env_filter("error")
            .level(LevelFilter::ERROR)
            .guard_warnings(false)
            .build_filter();
        assert!(!filter.unwrap().to_string().contains("tripwire"));
    }

    #[test]
    fn strict_env_filter_keeps_guard_warnings() {
        let filter = Logger::builder("app").env_filter("error").build_filter();
        let rendered = filter.unwrap().to_string().to_lowercase();
        assert!(rendered.contains(&guard_directive()), "filter was {rendered}");
    }

    #[test]
    fn loose_level_still_carries_the_guard_directive() {
        let filter =
            Logger::builder("app").env_filter("debug").level(LevelFilter::DEBUG).build_filter();
        let rendered = filter.unwrap().to_string().to_lowercase();
        assert!(rendered.contains(&guard_directive()), "filter was {rendered}");
        assert!(!rendered.contains("tripwire=warn"), "filter was {rendered}");
    }

    #[test]
    fn no_outputs_is_rejected() {
        let err = Logger::builder("app").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
