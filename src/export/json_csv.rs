use crate::errors::{AppError, AppResult};
use crate::export::{Dataset, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(data: &Dataset, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = data
        .to_json_string()
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header included via serde).
pub(crate) fn export_csv(data: &Dataset, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    let write_err =
        |e: csv::Error| AppError::from(io::Error::other(format!("CSV write error: {e}")));

    match data {
        Dataset::Workouts(rows) => {
            for item in rows {
                wtr.serialize(item).map_err(write_err)?;
            }
        }
        Dataset::Cardio(rows) => {
            for item in rows {
                wtr.serialize(item).map_err(write_err)?;
            }
        }
        Dataset::Checkins(rows) => {
            for item in rows {
                wtr.serialize(item).map_err(write_err)?;
            }
        }
        Dataset::Meals(rows) => {
            for item in rows {
                wtr.serialize(item).map_err(write_err)?;
            }
        }
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
