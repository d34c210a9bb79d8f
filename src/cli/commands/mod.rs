pub mod backup;
pub mod cardio;
pub mod checkin;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod insight;
pub mod log;
pub mod meal;
pub mod onboard;
pub mod stats;
pub mod workout;

use crate::errors::AppResult;
use crate::utils::date;
use chrono::{DateTime, Local};

/// Resolve an optional `--period` flag into inclusive datetime bounds.
/// Absent (or "all") means no filter.
pub(crate) fn period_bounds_opt(
    period: &Option<String>,
) -> AppResult<Option<(DateTime<Local>, DateTime<Local>)>> {
    match period {
        None => Ok(None),
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => {
            let (first, last) = date::period_bounds(p)?;
            Ok(Some((date::day_start(first), date::day_end(last))))
        }
    }
}

/// True when `ts` passes the optional bounds filter.
pub(crate) fn in_bounds(
    ts: &DateTime<Local>,
    bounds: &Option<(DateTime<Local>, DateTime<Local>)>,
) -> bool {
    match bounds {
        None => true,
        Some((start, end)) => date::is_within_range(ts, start, end),
    }
}
