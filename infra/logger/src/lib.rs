//! # Logger
//!
//! Process-wide logging for the front-web tools.
//!
//! A run of `fweb` is an audit trail: every skipped apex, every certificate request
//! and every failure is emitted as a `tracing` event with structured fields. This
//! crate installs the subscriber that turns those events into a compact console
//! stream and, optionally, a rolling log file next to the deployment.
//!
//! * `RUST_LOG` overrides the default level unless an explicit filter is set with
//!   [`LoggerBuilder::env_filter`].
//! * Log files rotate daily; the newest [`LoggerBuilder::retain`] files are kept.
//! * File output is non-blocking; keep the returned [`Logger`] alive until exit.
//!
//! ## Example
//!
//! ```rust
//! # use fweb_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("fweb")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use sealed::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const DEFAULT_RETAINED_FILES: usize = 14;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Output encoding of the file sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug)]
struct Settings {
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    retained_files: usize,
    format: FileFormat,
    filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            retained_files: DEFAULT_RETAINED_FILES,
            format: FileFormat::Text,
            filter: None,
        }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct ConsoleOnly;
#[derive(Debug)]
pub struct WithFiles;

mod sealed {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFiles {}

/// Typestate builder for the global subscriber.
///
/// A name is required before [`LoggerBuilder::init`] becomes available; file-only
/// knobs (retention, format) unlock after [`LoggerBuilder::directory`].
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    settings: Settings,
    name: N,
    sink: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Names the process; also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), sink: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic filter directives, e.g. `fweb_issuance=debug,reqwest=warn`.
    ///
    /// When set, `RUST_LOG` is ignored. Invalid directives fail [`LoggerBuilder::init`].
    #[must_use]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.filter = Some(directives.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Also write log files into `directory` (created if missing).
    pub fn directory(self, directory: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFiles> {
        let mut settings = self.settings;
        settings.directory = Some(directory.into());
        LoggerBuilder { settings, name: self.name, sink: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero retained files,
    ///   bad filter directives or when no sink is enabled.
    /// * [`LoggerError::Appender`] if the rolling file appender cannot be created.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        check_settings(&self.settings, &name)?;

        let filter = env_filter(&self.settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if self.settings.console {
            layers.push(fmt::layer().compact().with_ansi(true).with_target(false).boxed());
        }

        let guard = match &self.settings.directory {
            Some(directory) => {
                let (layer, guard) = file_layer(&self.settings, &name, directory)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no sink enabled; turn on the console or set a log directory".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<Named, WithFiles> {
    /// How many rotated files to keep.
    #[must_use]
    pub const fn retain(mut self, files: usize) -> Self {
        self.settings.retained_files = files;
        self
    }

    #[must_use]
    pub const fn format(mut self, format: FileFormat) -> Self {
        self.settings.format = format;
        self
    }
}

/// Handle to the installed subscriber.
///
/// Holds the background writer guard of the file sink; dropping it flushes and
/// stops file logging.
#[must_use = "dropping the logger stops the file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed, sink: PhantomData }
    }

    /// `true` when a file sink (and therefore a background writer) is active.
    #[must_use]
    pub const fn has_file_sink(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log files");
        }
    }
}

fn check_settings(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.directory.is_some() && settings.retained_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "at least one log file must be retained".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.filter {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("invalid filter '{directives}': {e}").into(),
                context: None,
            })
        },
    }
}

fn file_layer(
    settings: &Settings,
    name: &str,
    directory: &Path,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(directory)
        .context(format!("creating log directory {}", directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(settings.retained_files)
        .build(directory)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);

    let boxed = match settings.format {
        FileFormat::Text => layer.boxed(),
        FileFormat::Json => layer.json().boxed(),
    };

    Ok((boxed, guard))
}
