//! Usage: SQLite connection setup for the workouts database.

use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_millis(2000);

/// Opens an existing database file read-write. A missing file is an error, not a new empty db.
pub fn open_connection(path: &Path) -> Result<Connection, String> {
    let path_hint = path.to_string_lossy();
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;

    let conn = Connection::open_with_flags(path, flags)
        .map_err(|e| format!("DB_ERROR: failed to open sqlite db at {path_hint}: {e}"))?;

    conn.busy_timeout(BUSY_TIMEOUT)
        .map_err(|e| format!("DB_ERROR: failed to set sqlite busy_timeout for {path_hint}: {e}"))?;

    Ok(conn)
}
