//! Usage: Tracing subscriber setup (stderr, env-filter driven).

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILTER_ENV: &str = "WORKOUT_DATES_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global subscriber. Keep the returned guard alive until exit so buffered
/// lines are flushed.
pub(crate) fn init() -> Option<WorkerGuard> {
    let _ = tracing_log::LogTracer::init();

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // stdout carries the Original/New trace; logs stay on stderr.
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return None;
    }

    Some(guard)
}
