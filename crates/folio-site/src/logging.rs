//! Logging setup.
//!
//! Console output through `tracing-subscriber`'s fmt layer, optionally
//! mirrored to a rolling file. `RUST_LOG` overrides the configured level.

use std::fs::{self, File};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Main logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level (can be overridden by RUST_LOG)
    pub default_level: String,

    /// Console output configuration
    pub console: ConsoleConfig,

    /// File output configuration
    pub file: Option<FileConfig>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            console: ConsoleConfig::default(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Verbose, human-readable console output
    pub fn development() -> Self {
        Self {
            default_level: "debug".to_string(),
            console: ConsoleConfig {
                enabled: true,
                pretty: true,
                ansi: true,
            },
            file: None,
        }
    }

    /// Minimal output for tests
    pub fn testing() -> Self {
        Self {
            default_level: "warn".to_string(),
            console: ConsoleConfig {
                enabled: true,
                pretty: false,
                ansi: false,
            },
            file: None,
        }
    }
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// Multi-line pretty format instead of compact lines
    pub pretty: bool,
    /// Include ANSI colors
    pub ansi: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pretty: false,
            ansi: true,
        }
    }
}

/// File output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    pub directory: PathBuf,
    pub prefix: String,
    pub rotation: RotationStrategy,
}

impl FileConfig {
    pub fn daily(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            prefix: "folio".to_string(),
            rotation: RotationStrategy::Daily,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationStrategy {
    Daily,
    Hourly,
    /// A single file, truncated on start
    Never,
}

fn file_writer(config: &FileConfig) -> std::io::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&config.directory)?;
    let writer = match config.rotation {
        RotationStrategy::Never => {
            let path = config.directory.join(format!("{}.log", config.prefix));
            return Ok(tracing_appender::non_blocking(File::create(path)?));
        }
        RotationStrategy::Daily => {
            RollingFileAppender::new(Rotation::DAILY, &config.directory, &config.prefix)
        }
        RotationStrategy::Hourly => {
            RollingFileAppender::new(Rotation::HOURLY, &config.directory, &config.prefix)
        }
    };
    Ok(tracing_appender::non_blocking(writer))
}

/// Installs the global subscriber.
///
/// The returned guard flushes file output and must be kept alive for the
/// lifetime of the program.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_level));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.console.enabled {
        let console = tracing_subscriber::fmt::layer()
            .with_ansi(config.console.ansi)
            .with_target(false);
        if config.console.pretty {
            layers.push(console.pretty().boxed());
        } else {
            layers.push(console.compact().boxed());
        }
    }

    let mut guard = None;
    if let Some(file_config) = &config.file {
        let (writer, file_guard) = file_writer(file_config)?;
        layers.push(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .boxed(),
        );
        guard = Some(file_guard);
    }

    Registry::default().with(layers).with(env_filter).try_init()?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(LogConfig::default().default_level, "info");
        assert!(LogConfig::development().console.pretty);
        assert_eq!(LogConfig::testing().default_level, "warn");
        assert!(LogConfig::default().file.is_none());
    }

    #[test]
    fn test_config_serde() {
        let mut config = LogConfig::development();
        config.file = Some(FileConfig::daily("/tmp/folio-logs"));

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"rotation\":\"daily\""));

        let parsed: LogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_single_file_writer_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig {
            directory: dir.path().join("nested"),
            prefix: "site".to_string(),
            rotation: RotationStrategy::Never,
        };

        let (_writer, _guard) = file_writer(&config).unwrap();
        assert!(dir.path().join("nested").join("site.log").exists());
    }
}
