use crate::models::cardio::CardioLog;
use crate::utils::date::is_within_range;
use chrono::{DateTime, Local};

/// Sum of cardio minutes for logs inside `[start, end]`, both bounds
/// inclusive at native date-time resolution.
pub fn aggregate_cardio_minutes(
    logs: &[CardioLog],
    start: &DateTime<Local>,
    end: &DateTime<Local>,
) -> u32 {
    logs.iter()
        .filter(|l| is_within_range(&l.logged_at, start, end))
        .map(|l| l.duration_min)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cardio::CardioKind;
    use chrono::{Duration, TimeZone};

    fn at(s: &str) -> DateTime<Local> {
        let naive = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap()
    }

    fn log(ts: DateTime<Local>, minutes: u32) -> CardioLog {
        CardioLog::new(ts, CardioKind::Zone2, minutes, None, None, None)
    }

    #[test]
    fn includes_both_boundaries() {
        let start = at("2026-03-02 00:00:00");
        let end = at("2026-03-08 23:59:59");

        let logs = vec![log(start, 30), log(end, 40), log(at("2026-03-05 07:00:00"), 20)];
        assert_eq!(aggregate_cardio_minutes(&logs, &start, &end), 90);
    }

    #[test]
    fn excludes_one_millisecond_outside() {
        let start = at("2026-03-02 00:00:00");
        let end = at("2026-03-08 23:59:59");

        let logs = vec![
            log(start - Duration::milliseconds(1), 30),
            log(end + Duration::milliseconds(1), 40),
        ];
        assert_eq!(aggregate_cardio_minutes(&logs, &start, &end), 0);
    }

    #[test]
    fn empty_input_sums_to_zero() {
        let start = at("2026-03-02 00:00:00");
        let end = at("2026-03-08 23:59:59");
        assert_eq!(aggregate_cardio_minutes(&[], &start, &end), 0);
    }
}
