//! Logging configuration and client identity consumed by the reporter.
//!
//! Values come from the CLI layer; the reporter only reads them.

use serde::{Deserialize, Serialize};

/// Log level selected for the current invocation (stable ordering,
/// most verbose first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Lifecycle,
    Warn,
    Quiet,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Lifecycle
    }
}

/// How much stack trace the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowStacktrace {
    /// Only internal errors show a trace. The default.
    InternalExceptions,
    Always,
    AlwaysFull,
}

impl Default for ShowStacktrace {
    fn default() -> Self {
        Self::InternalExceptions
    }
}

/// Snapshot of the logging options in effect for one build.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LoggingConfiguration {
    pub log_level: LogLevel,
    pub show_stacktrace: ShowStacktrace,
}

/// Describes the client that launched the build. The reporter never
/// renders it; failures may consult it while suggesting resolutions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientMetaData {
    pub app_name: String,
}

impl Default for ClientMetaData {
    fn default() -> Self {
        Self {
            app_name: "chisel".to_string(),
        }
    }
}

/// Long-form option names referenced in generated hints. The values
/// behind them are owned by the CLI layer.
pub mod options {
    pub const STACKTRACE_LONG_OPTION: &str = "stacktrace";
    pub const INFO_LONG_OPTION: &str = "info";
    pub const DEBUG_LONG_OPTION: &str = "debug";
    pub const BUILD_SCAN_LONG_OPTION: &str = "scan";

    pub const HELP_URL: &str = "https://help.gradle.org";
}
