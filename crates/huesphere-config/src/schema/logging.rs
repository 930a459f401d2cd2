//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` filter directive scoped to the huesphere crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "huesphere=debug",
            LogLevel::Info => "huesphere=info",
            LogLevel::Warning => "huesphere=warn",
            LogLevel::Error => "huesphere=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
