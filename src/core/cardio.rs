use crate::errors::{AppError, AppResult};
use crate::models::cardio::{CardioKind, CardioLog};
use crate::repos::CardioRepo;
use crate::store::RecordStore;
use crate::ui::messages::success;
use crate::utils::date;
use chrono::{DateTime, Local};

pub struct CardioLogic;

impl CardioLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        store: &mut dyn RecordStore,
        kind_code: &str,
        duration_min: u32,
        distance_km: Option<f64>,
        avg_hr: Option<u32>,
        notes: Option<String>,
        when: Option<&String>,
    ) -> AppResult<CardioLog> {
        let kind = CardioKind::from_code(kind_code)
            .ok_or_else(|| AppError::InvalidCardioKind(kind_code.to_string()))?;

        let logged_at = resolve_timestamp(when)?;
        let log = CardioLog::new(logged_at, kind, duration_min, distance_km, avg_hr, notes);

        let mut repo = CardioRepo::new(store);
        repo.add(log.clone())?;

        success(format!(
            "Logged {} min of {} on {}.",
            duration_min,
            kind.label(),
            log.date_str()
        ));

        Ok(log)
    }

    pub fn delete(store: &mut dyn RecordStore, id: &str) -> AppResult<CardioLog> {
        let mut repo = CardioRepo::new(store);
        let removed = repo.delete(id)?;

        success(format!(
            "Deleted cardio log {} ({} min of {} on {}).",
            &removed.id[..removed.id.len().min(8)],
            removed.duration_min,
            removed.kind.label(),
            removed.date_str()
        ));

        Ok(removed)
    }
}

/// `--date` accepts a bare date or a full timestamp; absent means now.
pub(crate) fn resolve_timestamp(when: Option<&String>) -> AppResult<DateTime<Local>> {
    match when {
        None => Ok(date::now()),
        Some(s) => date::parse_date_time(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}
