//! Logging Infrastructure
//!
//! The terminal belongs to the UI, so events go to the in-app log pane
//! (tui-logger) and, when configured, to daily rolling files.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Config;

/// Initialize the logger
///
/// Keep the returned guard alive for as long as file logging should flush.
pub fn init_logger(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match config.log_dir.as_deref() {
        Some(dir) if dir.exists() => {
            let file_appender = tracing_appender::rolling::daily(dir, "lunch-tui");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(file_layer)
        .with(env_filter)
        .try_init()?;

    // Dependencies logging through the `log` crate end up in the pane too
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(pane_level(&config.log_level));

    Ok(guard)
}

/// Level for the log pane: the first bare level in the filter directive
fn pane_level(directive: &str) -> log::LevelFilter {
    directive
        .split(',')
        .find_map(|part| part.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_level() {
        assert_eq!(pane_level("debug"), log::LevelFilter::Debug);
        assert_eq!(pane_level("redb=warn,trace"), log::LevelFilter::Trace);
        assert_eq!(pane_level("lunch_tui=debug"), log::LevelFilter::Info);
        assert_eq!(pane_level(""), log::LevelFilter::Info);
    }
}
