//! Usage: Convert every `workouts.date` value in place (read all, transform, write once).

use crate::date_records::DateRecord;
use crate::{db, workout_dates};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub db_path: String,
    pub records: usize,
    pub rows_updated: u64,
}

/// Runs the whole conversion against the database at `path`, printing the
/// `Original:` / `New:` trace to `out`.
///
/// Nothing is written unless every value converts.
pub fn convert_database<W: Write>(path: &Path, out: &mut W) -> Result<ConversionReport, String> {
    let db_path = path.to_string_lossy().to_string();
    let mut conn = db::open_connection(path)?;
    tracing::debug!(db_path = %db_path, "opened workouts db");

    let mut records: Vec<DateRecord> = Vec::new();
    let seen = workout_dates::for_each_date(&conn, |original| {
        writeln!(out, "Original: {original}")
            .map_err(|e| format!("failed to write trace: {e}"))?;

        let record = DateRecord::from_original(original)?;

        writeln!(out, "New: {}\n", record.converted)
            .map_err(|e| format!("failed to write trace: {e}"))?;
        records.push(record);
        Ok(())
    })?;
    tracing::info!(db_path = %db_path, records = seen, "read workouts dates");

    let rows_updated = workout_dates::rewrite_dates(&mut conn, &records)?;
    tracing::info!(db_path = %db_path, rows_updated, "committed workouts date rewrite");

    Ok(ConversionReport {
        db_path,
        records: seen,
        rows_updated,
    })
}
