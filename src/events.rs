//! Event logging collaborator — fire-and-forget, failures swallowed.
//!
//! Components emit `LogEvent`s through an `EventSink` and never observe
//! whether delivery succeeded. A sink that drops an event drops it silently;
//! emitting must never block or fail the caller.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Severity of a log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// A single structured log event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: String,
}

impl LogEvent {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Info,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Warn,
            message: message.into(),
        }
    }
}

/// Destination for log events.
pub trait EventSink: Send + Sync {
    /// Deliver an event. Infallible from the caller's view.
    fn emit(&self, event: LogEvent);
}

/// Sink that forwards events to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: LogEvent) {
        match event.level {
            LogLevel::Debug => tracing::debug!("{}", event.message),
            LogLevel::Info => tracing::info!("{}", event.message),
            LogLevel::Warn => tracing::warn!("{}", event.message),
            LogLevel::Error => tracing::error!("{}", event.message),
        }
    }
}

/// Sink that hands events to an async consumer over an unbounded channel.
///
/// A closed receiver means the event is dropped; the sender never learns.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: tokio::sync::mpsc::UnboundedSender<LogEvent>,
}

impl ChannelSink {
    pub fn new(tx: tokio::sync::mpsc::UnboundedSender<LogEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: LogEvent) {
        let _ = self.tx.send(event);
    }
}

/// Sink that records events in memory, for tests and the demo shell.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<LogEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Count of events matching a level and message.
    pub fn count(&self, level: LogLevel, message: &str) -> usize {
        self.events()
            .iter()
            .filter(|e| e.level == level && e.message == message)
            .count()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: LogEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
