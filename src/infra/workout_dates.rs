//! Usage: Read and rewrite `workouts.date` values.

use crate::date_records::DateRecord;
use rusqlite::{params, Connection, TransactionBehavior};

/// Streams every `workouts.date` value into `f`, in store order. Returns the number of rows seen.
///
/// The first error returned by `f` stops the scan and is passed through as-is.
pub(crate) fn for_each_date<F>(conn: &Connection, mut f: F) -> Result<usize, String>
where
    F: FnMut(String) -> Result<(), String>,
{
    let mut stmt = conn
        .prepare("SELECT date FROM workouts")
        .map_err(|e| format!("DB_ERROR: failed to prepare workouts date query: {e}"))?;
    let mut rows = stmt
        .query([])
        .map_err(|e| format!("DB_ERROR: failed to query workouts dates: {e}"))?;

    let mut seen = 0usize;
    while let Some(row) = rows
        .next()
        .map_err(|e| format!("DB_ERROR: failed to read workouts row: {e}"))?
    {
        let date: String = row
            .get(0)
            .map_err(|e| format!("DB_ERROR: failed to read workouts.date: {e}"))?;
        seen += 1;
        f(date)?;
    }

    Ok(seen)
}

/// Rewrites every row whose date equals `record.original` to `record.converted`, in one
/// transaction. Returns the total number of rows changed.
///
/// Matching is by value, so rows sharing an original date all move together.
pub(crate) fn rewrite_dates(conn: &mut Connection, records: &[DateRecord]) -> Result<u64, String> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| format!("DB_ERROR: failed to start transaction: {e}"))?;

    let mut rows_updated = 0u64;
    {
        let mut stmt = tx
            .prepare("UPDATE workouts SET date = ?1 WHERE workouts.date = ?2")
            .map_err(|e| format!("DB_ERROR: failed to prepare workouts date update: {e}"))?;

        for record in records {
            let changed = stmt
                .execute(params![record.converted, record.original])
                .map_err(|e| {
                    format!(
                        "DB_ERROR: failed to update workouts.date {:?} -> {:?}: {e}",
                        record.original, record.converted
                    )
                })?;
            rows_updated += changed as u64;
        }
    }

    tx.commit()
        .map_err(|e| format!("DB_ERROR: failed to commit transaction: {e}"))?;

    Ok(rows_updated)
}
