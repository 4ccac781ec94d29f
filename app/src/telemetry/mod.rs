pub mod config;
pub use self::config::*;
use tracing::metadata::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Directives from `config.directives_env` when that variable is set, otherwise
/// `config.directives`, on top of `config.level`.
fn env_filter(config: &TelemetryConfig) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::from(config.level).into());
    let from_env = (!config.directives_env.is_empty())
        .then(|| std::env::var(&config.directives_env).ok())
        .flatten();
    builder.parse_lossy(from_env.as_deref().unwrap_or(&config.directives))
}

/// Install the global subscriber described by `config`.
///
/// Fails if a global subscriber is already installed.
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let console = tracing_subscriber::fmt::layer()
        .with_file(config.debug_logging)
        .with_line_number(config.debug_logging)
        .with_thread_ids(config.debug_logging)
        .with_target(config.debug_logging);
    Registry::default().with(env_filter(config)).with(console).try_init()?;
    Ok(())
}
