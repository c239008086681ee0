//! Tracing subscriber setup for the command-line front end

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Set to any value to emit JSON log lines on stderr
pub const LOG_JSON_ENV: &str = "ARTIFACT_FINDER_LOG_JSON";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `verbose`. When `log_file` is given, logs are also
/// appended there through a non-blocking writer; keep the returned guard
/// alive until exit so buffered lines are flushed.
pub fn init(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "artifact_finder=debug"
        } else {
            "artifact_finder=info"
        })
    });

    let (json_layer, text_layer) = if std::env::var(LOG_JSON_ENV).is_ok() {
        (
            Some(fmt::layer().json().with_writer(std::io::stderr)),
            None,
        )
    } else {
        (
            None,
            Some(fmt::layer().with_writer(std::io::stderr).with_target(false)),
        )
    };

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Log path {:?} has no file name", path))?;

            std::fs::create_dir_all(directory)
                .with_context(|| format!("Failed to create log directory {:?}", directory))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
