use crate::models::checkin::CheckinLog;
use crate::utils::date;
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

/// Hard scan bound: streaks longer than a year report as 365.
const MAX_STREAK_DAYS: i64 = 365;

/// Consecutive calendar days with at least one check-in, walking backward
/// from today. A missing check-in for today forces the result to 0, no
/// matter how long the prior run was.
pub fn compute_streak(checkins: &[CheckinLog]) -> u32 {
    compute_streak_from(date::today(), checkins)
}

pub(crate) fn compute_streak_from(today: NaiveDate, checkins: &[CheckinLog]) -> u32 {
    let days: HashSet<String> = checkins.iter().map(|c| c.day_key()).collect();

    let mut streak = 0u32;
    for i in 0..MAX_STREAK_DAYS {
        let key = (today - Duration::days(i)).format("%Y-%m-%d").to_string();
        if days.contains(&key) {
            streak += 1;
        } else {
            if i == 0 {
                return 0;
            }
            break;
        }
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::checkin::Mood;
    use chrono::TimeZone;

    fn checkin_on(d: NaiveDate) -> CheckinLog {
        let ts = chrono::Local
            .from_local_datetime(&d.and_hms_opt(8, 30, 0).unwrap())
            .earliest()
            .unwrap();
        CheckinLog::new(ts, Mood::Ok, 5, 5, 6, None)
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn empty_list_has_no_streak() {
        assert_eq!(compute_streak_from(day("2026-03-06"), &[]), 0);
    }

    #[test]
    fn today_only_counts_one() {
        let logs = vec![checkin_on(day("2026-03-06"))];
        assert_eq!(compute_streak_from(day("2026-03-06"), &logs), 1);
    }

    #[test]
    fn count_stops_at_first_gap() {
        // today, yesterday, 2 days ago; nothing 3 days back.
        let logs = vec![
            checkin_on(day("2026-03-06")),
            checkin_on(day("2026-03-05")),
            checkin_on(day("2026-03-04")),
            checkin_on(day("2026-03-01")),
        ];
        assert_eq!(compute_streak_from(day("2026-03-06"), &logs), 3);
    }

    #[test]
    fn missing_today_forces_zero() {
        let logs: Vec<CheckinLog> = (1..=5)
            .map(|i| checkin_on(day("2026-03-06") - Duration::days(i)))
            .collect();
        assert_eq!(compute_streak_from(day("2026-03-06"), &logs), 0);
    }

    #[test]
    fn two_checkins_same_day_count_once() {
        let logs = vec![checkin_on(day("2026-03-06")), checkin_on(day("2026-03-06"))];
        assert_eq!(compute_streak_from(day("2026-03-06"), &logs), 1);
    }
}
