use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now() -> DateTime<Local> {
    chrono::Local::now()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse an ISO-8601 timestamp. Accepts a full RFC 3339 date-time,
/// a local "YYYY-MM-DD HH:MM", or a bare date (taken as local midnight).
pub fn parse_date_time(s: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return naive.and_local_timezone(Local).earliest();
    }

    let d = parse_date(s)?;
    Some(day_start(d))
}

/// First instant of a calendar day in local time.
pub fn day_start(d: NaiveDate) -> DateTime<Local> {
    let midnight = d.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| Local::now())
}

/// Last instant of a calendar day in local time (millisecond resolution).
pub fn day_end(d: NaiveDate) -> DateTime<Local> {
    let last = d.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap());
    Local
        .from_local_datetime(&last)
        .latest()
        .unwrap_or_else(|| Local::now())
}

/// Inclusive range membership at native date-time resolution.
pub fn is_within_range(ts: &DateTime<Local>, start: &DateTime<Local>, end: &DateTime<Local>) -> bool {
    start <= ts && ts <= end
}

/// The `n` calendar days ending today (inclusive), oldest first.
pub fn last_n_days(n: usize) -> Vec<NaiveDate> {
    let today = today();
    let mut out = Vec::with_capacity(n);

    for i in (0..n as i64).rev() {
        out.push(today - Duration::days(i));
    }

    out
}

/// Monday of the ISO week containing `d`.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = chrono::NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {}", p))
}

pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let start_date = *s.first().unwrap();
    let end_date = *e.last().unwrap();

    let mut out = Vec::new();
    let mut d = start_date;

    while d <= end_date {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    Ok(out)
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();

    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    while d.year() == year {
        v.push(d);
        d = d.succ_opt().unwrap();
    }

    v
}

/// Resolve a period expression into inclusive day bounds.
/// Supports `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `A:B` spans of those.
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let days = if let Some((a, b)) = p.split_once(':') {
        generate_range(a.trim(), b.trim()).map_err(AppError::InvalidDate)?
    } else {
        generate_from_period(p).map_err(AppError::InvalidDate)?
    };

    match (days.first(), days.last()) {
        (Some(first), Some(last)) => Ok((*first, *last)),
        _ => Err(AppError::InvalidDate(p.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn last_n_days_ends_today_oldest_first() {
        let days = last_n_days(7);
        assert_eq!(days.len(), 7);
        assert_eq!(days[6], today());
        assert_eq!(days[0], today() - Duration::days(6));

        for w in days.windows(2) {
            assert_eq!(w[1] - w[0], Duration::days(1));
        }
    }

    #[test]
    fn range_is_inclusive_on_both_bounds() {
        let start = day_start(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        let end = day_end(NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());

        assert!(is_within_range(&start, &start, &end));
        assert!(is_within_range(&end, &start, &end));

        let before = start - Duration::milliseconds(1);
        let after = end + Duration::milliseconds(1);
        assert!(!is_within_range(&before, &start, &end));
        assert!(!is_within_range(&after, &start, &end));
    }

    #[test]
    fn week_start_is_monday() {
        // 2026-03-04 is a Wednesday
        let d = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(week_start(d), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());

        // Monday maps onto itself
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn period_bounds_spans() {
        let (a, b) = period_bounds("2026-02").unwrap();
        assert_eq!(a, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(b, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());

        let (a, b) = period_bounds("2025-12-30:2026-01-02").unwrap();
        assert_eq!(a, NaiveDate::from_ymd_opt(2025, 12, 30).unwrap());
        assert_eq!(b, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());

        assert!(period_bounds("not-a-period").is_err());
    }

    #[test]
    fn parse_date_time_accepts_bare_dates() {
        let ts = parse_date_time("2026-03-02").unwrap();
        assert_eq!(ts.date_naive(), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());

        assert!(parse_date_time("02/03/2026").is_none());
    }
}
