// 📝 Logging
// The terminal belongs to the UI, so log lines go to a file

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,bmi_tracker=debug";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(log_path: &Path) -> Result<()> {
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = log_path
        .file_name()
        .with_context(|| format!("Log path has no file name: {:?}", log_path))?;

    // Synchronous writer; no background flush thread
    let writer = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .with_context(|| format!("Failed to open log file: {:?}", log_path))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unwritable_log_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        // Parent is a regular file, so the log file cannot be created
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = init(&blocker.join("bmi-tracker.log")).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
