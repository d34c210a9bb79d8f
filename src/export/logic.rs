use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::Dataset;
use crate::export::{ExportFormat, ExportKind};
use crate::repos::{CardioRepo, CheckinRepo, MealRepo, WorkoutRepo};
use crate::store::SqliteStore;
use crate::ui::messages::warning;
use crate::utils::date;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use chrono::{DateTime, Local};
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one record list.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period expression:
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `A:B` spans of those.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        kind: ExportKind,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;
        crate::utils::path::ensure_parent_dir(path)?;

        let bounds: Option<(DateTime<Local>, DateTime<Local>)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => {
                let (first, last) = date::period_bounds(r)?;
                Some((date::day_start(first), date::day_end(last)))
            }
        };

        let data = load_dataset(pool, &kind, bounds)?;

        if data.is_empty() {
            warning("No records found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&data, path)?,
            ExportFormat::Json => export_json(&data, path)?,
            ExportFormat::Xlsx => export_xlsx(&data, path)?,
        }

        Ok(())
    }
}

/// Load the requested record list, applying the range filter.
fn load_dataset(
    pool: &mut DbPool,
    kind: &ExportKind,
    bounds: Option<(DateTime<Local>, DateTime<Local>)>,
) -> AppResult<Dataset> {
    let mut store = SqliteStore::new(&pool.conn);

    let in_bounds = |ts: &DateTime<Local>| match &bounds {
        None => true,
        Some((start, end)) => date::is_within_range(ts, start, end),
    };

    let data = match kind {
        ExportKind::Workouts => {
            let mut logs = WorkoutRepo::new(&mut store).list()?;
            logs.retain(|l| in_bounds(&l.logged_at));
            logs.sort_by_key(|l| l.logged_at);
            Dataset::Workouts(logs.iter().map(Into::into).collect())
        }
        ExportKind::Cardio => {
            let mut logs = CardioRepo::new(&mut store).list()?;
            logs.retain(|l| in_bounds(&l.logged_at));
            logs.sort_by_key(|l| l.logged_at);
            Dataset::Cardio(logs.iter().map(Into::into).collect())
        }
        ExportKind::Checkins => {
            let mut logs = CheckinRepo::new(&mut store).list()?;
            logs.retain(|l| in_bounds(&l.logged_at));
            logs.sort_by_key(|l| l.logged_at);
            Dataset::Checkins(logs.iter().map(Into::into).collect())
        }
        ExportKind::Meals => {
            let mut meals = MealRepo::new(&mut store).list()?;
            meals.retain(|m| in_bounds(&m.logged_at));
            meals.sort_by_key(|m| m.logged_at);
            Dataset::Meals(meals.iter().map(Into::into).collect())
        }
    };

    Ok(data)
}
