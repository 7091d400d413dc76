//! Diagnostic channel for upload events.
//!
//! Every [`crate::UploadWidget`] owns a [`LogBroadcaster`]. Entries are
//! mirrored to the `log` facade and broadcast to all current subscribers,
//! so tests and front-ends can observe failures that never reach the
//! rendered widget.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Capacity of the broadcast channel.
const CHANNEL_CAPACITY: usize = 100;

/// Log level for diagnostic entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Local time (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }
}

/// Broadcasts log entries to all subscribers
#[derive(Debug, Clone)]
pub struct LogBroadcaster {
    sender: broadcast::Sender<LogEntry>,
}

impl LogBroadcaster {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Send a log entry to all subscribers
    pub fn log(&self, entry: LogEntry) {
        match entry.level {
            LogLevel::Info | LogLevel::Success => log::info!("{}", entry.message),
            LogLevel::Warning => log::warn!("{}", entry.message),
            LogLevel::Error => log::error!("{}", entry.message),
        }

        // No receivers is fine
        let _ = self.sender.send(entry);
    }

    /// Get a receiver for entries logged from now on
    pub fn subscribe(&self) -> broadcast::Receiver<LogEntry> {
        self.sender.subscribe()
    }

    pub fn info(&self, msg: impl Into<String>) {
        self.log(LogEntry::info(msg));
    }

    pub fn success(&self, msg: impl Into<String>) {
        self.log(LogEntry::success(msg));
    }

    pub fn warning(&self, msg: impl Into<String>) {
        self.log(LogEntry::warning(msg));
    }

    pub fn error(&self, msg: impl Into<String>) {
        self.log(LogEntry::error(msg));
    }
}

impl Default for LogBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
