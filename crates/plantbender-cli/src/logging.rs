use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::args::LogLevel;

pub const LOG_FILE: &str = "plantbender.log";

/// Where log lines go.
pub enum LogSink<'a> {
    Stderr,
    /// `<data_dir>/plantbender.log`, used while the dashboard owns the terminal.
    File(&'a Path),
}

#[derive(Clone)]
struct FileMakeWriter {
    file: Arc<Mutex<File>>,
}

struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut locked = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        locked.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut locked = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        locked.flush()
    }
}

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileWriterGuard;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriterGuard {
            file: self.file.clone(),
        }
    }
}

/// `RUST_LOG` wins over `--log-level`.
fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()))
}

/// Install the global subscriber. Fails if the log file cannot be opened or a
/// subscriber is already installed.
pub fn init(level: LogLevel, sink: LogSink<'_>) -> Result<()> {
    let filter = env_filter(level);

    match sink {
        LogSink::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow!("failed to install stderr logger: {}", e)),
        LogSink::File(data_dir) => {
            let log_path = data_dir.join(LOG_FILE);
            let file = std::fs::create_dir_all(data_dir)
                .and_then(|_| {
                    OpenOptions::new()
                        .create(true)
                        .append(true)
                        .open(&log_path)
                })
                .with_context(|| format!("failed to open log file {}", log_path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(FileMakeWriter {
                    file: Arc::new(Mutex::new(file)),
                })
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("failed to install file logger: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_reported() -> Result<()> {
        let dir = tempfile::tempdir()?;

        init(LogLevel::Info, LogSink::File(dir.path()))?;
        tracing::info!("dashboard started");
        assert!(dir.path().join(LOG_FILE).exists());

        let err = init(LogLevel::Info, LogSink::Stderr).unwrap_err();
        assert!(err.to_string().contains("failed to install stderr logger"));
        Ok(())
    }
}
