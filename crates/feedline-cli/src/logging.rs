use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output may go for the running command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogSink {
    /// Non-interactive commands may log to stderr.
    Stderr,
    /// The TUI owns the terminal; only a log file is allowed.
    FileOnly,
}

/// Install the global subscriber. Does nothing when there is nowhere to write.
pub(crate) fn init(level: &str, log_file: Option<&Path>, sink: LogSink) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("invalid log level '{}'", level))?;

    match (log_file, sink) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        (None, LogSink::Stderr) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        (None, LogSink::FileOnly) => {}
    }

    Ok(())
}
