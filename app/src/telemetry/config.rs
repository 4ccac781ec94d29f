use serde::*;
use tracing::metadata::LevelFilter;

/// Logging configuration.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Install a console subscriber at all.
    pub enable: bool,
    /// Level for targets the directives do not mention.
    pub level: LoggingLevel,
    /// `EnvFilter` directives, e.g. `service_inventory=debug`.
    pub directives: String,
    /// Environment variable whose value replaces `directives` when set.
    pub directives_env: String,
    /// Print file, line, thread and target with every event.
    pub debug_logging: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: LoggingLevel::Info,
            directives: String::new(),
            directives_env: String::new(),
            debug_logging: false,
        }
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    Off,
}

impl From<LoggingLevel> for LevelFilter {
    fn from(val: LoggingLevel) -> Self {
        match val {
            LoggingLevel::Error => LevelFilter::ERROR,
            LoggingLevel::Warn => LevelFilter::WARN,
            LoggingLevel::Info => LevelFilter::INFO,
            LoggingLevel::Debug => LevelFilter::DEBUG,
            LoggingLevel::Trace => LevelFilter::TRACE,
            LoggingLevel::Off => LevelFilter::OFF,
        }
    }
}
