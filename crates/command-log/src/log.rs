//! Append-only command log file.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Local;
use command_dispatch::{LogRecord, LogSink};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::error::LogError;

/// Flat-file audit log for privileged command invocations.
///
/// One formatted line per record, appended to the configured path. The
/// file is created on first use. Each line is also echoed to the tracing
/// output.
#[derive(Debug, Clone)]
pub struct CommandLog {
    path: PathBuf,
}

impl CommandLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Render one record as a log line.
    ///
    /// Local date and time first, UTC time in parentheses:
    /// `Command Received: 04/04/2020 @ 22:49(UTC: 04:49) By: tag#1234 -- Command Issued: reset`
    pub fn format_record(record: &LogRecord) -> String {
        let local = record.timestamp.with_timezone(&Local);
        format!(
            "Command Received: {} @ {}(UTC: {}) By: {} -- Command Issued: {}",
            local.format("%m/%d/%Y"),
            local.format("%H:%M"),
            record.timestamp.format("%H:%M"),
            record.caller,
            record.command
        )
    }

    async fn append_line(&self, line: &str) -> Result<(), LogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl LogSink for CommandLog {
    async fn append(&self, record: &LogRecord) -> anyhow::Result<()> {
        let line = Self::format_record(record);
        info!("{}", line);
        self.append_line(&line).await?;
        Ok(())
    }
}
