//! Tracing Setup
//!
//! Installs the global `tracing` subscriber: an optional console sink plus,
//! when a log directory is configured, JSON files for errors and for
//! everything.

use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::infrastructure::driven_adapters::config::{LogFormat, LoggingConfig};

/// Error-level events only
pub const ERROR_LOG: &str = "error.log";
/// Every event that passes the filter
pub const COMBINED_LOG: &str = "combined.log";

type FilteredRegistry = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync>;

/// Keeps the background file writers alive
///
/// Dropping it flushes and stops them, so hold it until shutdown.
#[must_use = "dropping the guard stops the file writers"]
pub struct TelemetryGuard {
    _file_writers: Vec<WorkerGuard>,
}

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over the configured filter.
///
/// # Errors
///
/// Returns `InitError` if a log file cannot be created in the configured directory.
pub fn init(config: &LoggingConfig) -> Result<TelemetryGuard, InitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| config.filter.as_str().into());
    let (layers, guard) = build_layers(config)?;

    tracing_subscriber::registry().with(filter).with(layers).init();

    Ok(guard)
}

fn build_layers(config: &LoggingConfig) -> Result<(Vec<BoxedLayer>, TelemetryGuard), InitError> {
    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut file_writers = Vec::new();

    if config.console {
        let console: BoxedLayer = match config.format {
            LogFormat::Json => fmt::layer().json().with_current_span(true).boxed(),
            LogFormat::Pretty => fmt::layer().boxed(),
        };
        layers.push(console);
    }

    if let Some(directory) = &config.directory {
        let (errors, guard) = file_writer(directory, ERROR_LOG)?;
        file_writers.push(guard);
        layers.push(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(errors)
                .with_filter(LevelFilter::ERROR)
                .boxed(),
        );

        let (combined, guard) = file_writer(directory, COMBINED_LOG)?;
        file_writers.push(guard);
        layers.push(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(combined)
                .boxed(),
        );
    }

    Ok((
        layers,
        TelemetryGuard {
            _file_writers: file_writers,
        },
    ))
}

fn file_writer(directory: &Path, file_name: &str) -> Result<(NonBlocking, WorkerGuard), InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)?;

    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn logging(console: bool, directory: Option<&Path>) -> LoggingConfig {
        LoggingConfig {
            filter: "info".to_string(),
            format: LogFormat::Json,
            console,
            directory: directory.map(Path::to_path_buf),
        }
    }

    #[test]
    fn test_console_only_without_directory() {
        let (layers, _guard) = build_layers(&logging(true, None)).unwrap();
        assert_eq!(layers.len(), 1);

        let (layers, _guard) = build_layers(&logging(false, None)).unwrap();
        assert!(layers.is_empty());
    }

    #[test]
    fn test_file_sinks_split_by_level() {
        let dir = tempfile::tempdir().unwrap();
        let config = logging(false, Some(dir.path()));

        let (layers, guard) = build_layers(&config).unwrap();
        assert_eq!(layers.len(), 2);

        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(&config.filter))
            .with(layers);
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("filtered out");
            tracing::info!("entry created");
            tracing::error!("database unavailable");
        });
        // Flush the background writers
        drop(guard);

        let errors = fs::read_to_string(dir.path().join(ERROR_LOG)).unwrap();
        assert!(errors.contains("database unavailable"));
        assert!(!errors.contains("entry created"));

        let combined = fs::read_to_string(dir.path().join(COMBINED_LOG)).unwrap();
        assert!(combined.contains("entry created"));
        assert!(combined.contains("database unavailable"));
        assert!(!combined.contains("filtered out"));
    }
}
