use crate::models::checkin::CheckinLog;

/// Mean sleep-quality score over the given check-ins; 0.0 when there are
/// none.
pub fn average_sleep_quality(checkins: &[CheckinLog]) -> f64 {
    if checkins.is_empty() {
        return 0.0;
    }

    let total: u32 = checkins.iter().map(|c| c.sleep_quality as u32).sum();
    total as f64 / checkins.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::checkin::Mood;
    use chrono::Local;

    fn with_sleep(q: u8) -> CheckinLog {
        CheckinLog::new(Local::now(), Mood::Ok, 5, 5, q, None)
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(average_sleep_quality(&[]), 0.0);
    }

    #[test]
    fn mean_of_scores() {
        let logs = vec![with_sleep(4), with_sleep(6), with_sleep(8)];
        assert!((average_sleep_quality(&logs) - 6.0).abs() < f64::EPSILON);
    }
}
