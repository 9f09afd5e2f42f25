mod app;
mod domain;
mod infra;

pub(crate) use app::logging;
pub(crate) use domain::date_records;
pub(crate) use infra::{app_paths, db, workout_dates};

pub use app::date_conversion::{convert_database, ConversionReport};
pub use domain::date_records::{convert_naive_to_utc_iso, format_utc_millis, DateRecord};

use std::process::ExitCode;

pub fn run() -> ExitCode {
    let _log_guard = logging::init();

    match run_conversion() {
        Ok(report) => {
            let summary = serde_json::to_string(&report)
                .unwrap_or_else(|e| format!("<unserializable report: {e}>"));
            tracing::info!(report = %summary, "workouts date conversion finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("workouts date conversion failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_conversion() -> Result<ConversionReport, String> {
    let path = app_paths::db_path()?;
    tracing::info!(db_path = %path.display(), "converting workouts dates to ISO-8601 UTC");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    convert_database(&path, &mut out)
}
