//! Configuration file maintenance: report missing fields and fill them
//! with defaults, renaming legacy artifacts where needed.

use crate::config::Config;
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Fields every modern config file must carry.
const EXPECTED_FIELDS: [&str; 4] = [
    "database",
    "insight_days",
    "default_cardio_kind",
    "week_starts_on",
];

/// Check if the given DB path points to the legacy database file name
/// `vitalog.db`. On Windows this is case-insensitive.
fn is_old_db_name(db_path: &Path) -> bool {
    if cfg!(target_os = "windows") {
        db_path
            .file_name()
            .map(|s| s.to_string_lossy().to_lowercase() == "vitalog.db")
            .unwrap_or(false)
    } else {
        db_path
            .file_name()
            .map(|s| s.to_string_lossy() == "vitalog.db")
            .unwrap_or(false)
    }
}

/// Preserve the directory portion of `dbstr` and replace only the file
/// name with `new_db_name`.
fn preserve_db_filename(dbstr: &str, new_db_name: &str) -> String {
    PathBuf::from(dbstr)
        .with_file_name(new_db_name)
        .to_string_lossy()
        .to_string()
}

/// Try to move a file from `from` to `to`.
/// - If source does not exist → no-op (Ok)
/// - If target already exists → no-op (Ok, we never overwrite)
/// - Otherwise, try `rename`, on failure → `copy` + remove original.
fn move_or_copy(from: &Path, to: &Path) -> io::Result<()> {
    if !from.exists() {
        return Ok(());
    }

    if to.exists() {
        return Ok(());
    }

    if fs::rename(from, to).is_err() {
        fs::copy(from, to)?;
        let _ = fs::remove_file(from);
    }

    Ok(())
}

/// Report config fields that are missing from the file on disk.
pub fn missing_fields() -> io::Result<Vec<String>> {
    let path = Config::config_file();
    if !path.exists() {
        return Ok(EXPECTED_FIELDS.iter().map(|s| s.to_string()).collect());
    }

    let content = fs::read_to_string(&path)?;
    let doc: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("config parse: {e}")))?;

    let mut missing = Vec::new();
    for field in EXPECTED_FIELDS {
        if doc.get(field).is_none() {
            missing.push(field.to_string());
        }
    }

    Ok(missing)
}

/// Print a report of missing config fields.
pub fn check_config() -> io::Result<()> {
    let missing = missing_fields()?;

    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        for f in &missing {
            info(format!("Missing field: {}", f));
        }
        info("Run 'vitalog config --migrate' to fill missing fields with defaults.");
    }

    Ok(())
}

/// Fill missing fields with defaults and rename legacy artifacts.
/// Returns true when the file was rewritten.
pub fn migrate_config() -> io::Result<bool> {
    let path = Config::config_file();
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(&path)?;
    let mut doc: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("config parse: {e}")))?;

    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| io::Error::other(format!("config defaults: {e}")))?;

    let mut changed = false;

    if let (Value::Mapping(map), Value::Mapping(default_map)) = (&mut doc, &defaults) {
        for field in EXPECTED_FIELDS {
            let key = Value::String(field.to_string());
            if !map.contains_key(&key)
                && let Some(v) = default_map.get(&key)
            {
                map.insert(key, v.clone());
                changed = true;
            }
        }

        // Legacy database name: vitalog.db → vitalog.sqlite, preserving
        // the configured directory.
        let db_key = Value::String("database".to_string());
        if let Some(Value::String(dbstr)) = map.get(&db_key) {
            let db_path = PathBuf::from(dbstr);
            if is_old_db_name(&db_path) {
                let new_str = preserve_db_filename(dbstr, "vitalog.sqlite");
                move_or_copy(&db_path, Path::new(&new_str))?;
                map.insert(db_key, Value::String(new_str));
                changed = true;
                info("Renamed legacy database file to vitalog.sqlite.");
            }
        }
    }

    if changed {
        let yaml = serde_yaml::to_string(&doc)
            .map_err(|e| io::Error::other(format!("config serialize: {e}")))?;
        fs::write(&path, yaml)?;
        success("Configuration migrated.");
    } else {
        info("Configuration already up to date.");
    }

    Ok(changed)
}
