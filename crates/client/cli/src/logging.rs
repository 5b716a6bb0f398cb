//! Tracing subscriber setup.
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

/// Installs a stderr layer and, when enabled, a per-session file layer.
///
/// The returned guard flushes the file writer on drop and must be held until
/// the process exits.
pub fn setup_logging(config: &CliConfig) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let (file_layer, guard) = if config.log_to_file {
        let session_id = config.session_id.clone().unwrap_or_else(|| {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        });
        let session_dir = config.resolve_log_dir().join(session_id);
        std::fs::create_dir_all(&session_dir)?;

        let appender = tracing_appender::rolling::never(&session_dir, "encounter-cli.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false);
        (Some(layer), Some((guard, session_dir)))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard.map(|(guard, session_dir)| {
        tracing::info!(
            target: "encounter_cli",
            "Log file: {}/encounter-cli.log",
            session_dir.display()
        );
        guard
    }))
}
