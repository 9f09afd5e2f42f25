//! Usage: Resolve the workouts database path (working-dir default + env override).

use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "workouts.db";
const DB_PATH_ENV: &str = "WORKOUT_DATES_DB_PATH";

fn usable_override(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn resolve_db_path(env_value: Option<String>, cwd: &Path) -> PathBuf {
    match usable_override(env_value) {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd.join(DB_FILE_NAME),
    }
}

/// `workouts.db` in the working directory. `WORKOUT_DATES_DB_PATH` may point elsewhere, e.g. at
/// a backup copy; unset or blank keeps the fixed default.
pub fn db_path() -> Result<PathBuf, String> {
    let cwd =
        std::env::current_dir().map_err(|e| format!("failed to resolve working dir: {e}"))?;
    Ok(resolve_db_path(std::env::var(DB_PATH_ENV).ok(), &cwd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_workouts_db_in_working_dir() {
        let cwd = Path::new("/srv/workouts");
        assert_eq!(
            resolve_db_path(None, cwd),
            PathBuf::from("/srv/workouts/workouts.db")
        );
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        let cwd = Path::new("/srv/workouts");
        assert_eq!(
            resolve_db_path(Some("   ".to_string()), cwd),
            cwd.join(DB_FILE_NAME)
        );
    }

    #[test]
    fn relative_override_is_joined_to_working_dir() {
        let cwd = Path::new("/srv/workouts");
        assert_eq!(
            resolve_db_path(Some(" backup/workouts-copy.db ".to_string()), cwd),
            PathBuf::from("/srv/workouts/backup/workouts-copy.db")
        );
    }

    #[test]
    fn absolute_override_is_used_as_is() {
        let cwd = Path::new("/srv/workouts");
        assert_eq!(
            resolve_db_path(Some("/data/workouts.db".to_string()), cwd),
            PathBuf::from("/data/workouts.db")
        );
    }
}
