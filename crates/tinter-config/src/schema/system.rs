use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive scoped to the tinter crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "tinter=trace",
            LogLevel::Debug => "tinter=debug",
            LogLevel::Info => "tinter=info",
            LogLevel::Warn => "tinter=warn",
            LogLevel::Error => "tinter=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
