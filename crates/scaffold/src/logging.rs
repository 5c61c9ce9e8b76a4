use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "scaffold.log";

fn env_filter(level: &str) -> EnvFilter {
    let default_filter = format!("scaffold={level},scaffold_core={level}");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize logging.
///
/// Without a log directory, events go to stderr so that stdout carries only
/// the report. With one, they are appended to `{log_dir}/scaffold.log`
/// through a non-blocking writer; the returned guard must be held until
/// exit so buffered lines are flushed.
/// The level can be overridden by the `RUST_LOG` environment variable.
pub fn init_logging(log_dir: Option<&Path>, level: &str) -> color_eyre::Result<Option<WorkerGuard>> {
    let registry = tracing_subscriber::registry().with(env_filter(level));

    let guard = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(true)
                        .with_thread_ids(false),
                )
                .try_init()?;
            tracing::info!(
                "Scaffold logging initialized (log_path={})",
                dir.join(LOG_FILE_NAME).display()
            );
            Some(guard)
        }
        None => {
            registry
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .try_init()?;
            None
        }
    };

    Ok(guard)
}
