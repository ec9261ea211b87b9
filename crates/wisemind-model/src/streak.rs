use chrono::NaiveDate;

/// Streak length that earns the streak achievement.
pub const STREAK_GOAL: i32 = 3;

/// Streak after a login on `today`, given the previous streak and login date.
///
/// A login on the day after the last one extends the streak, a later login
/// starts over at 1. Logging in again on the same day changes nothing.
#[must_use]
pub fn next_streak(streak: i32, last_login: Option<NaiveDate>, today: NaiveDate) -> i32 {
    match last_login {
        None => 1,
        Some(last) if last >= today => streak.max(1),
        Some(last) if today.pred_opt() == Some(last) => streak.max(0).saturating_add(1),
        Some(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_first_login() {
        assert_eq!(next_streak(0, None, day(10)), 1);
    }

    #[test]
    fn test_consecutive_days() {
        assert_eq!(next_streak(1, Some(day(9)), day(10)), 2);
        assert_eq!(next_streak(2, Some(day(10)), day(11)), 3);
    }

    #[test]
    fn test_same_day() {
        assert_eq!(next_streak(4, Some(day(10)), day(10)), 4);
        assert_eq!(next_streak(0, Some(day(10)), day(10)), 1);
    }

    #[test]
    fn test_gap_resets() {
        assert_eq!(next_streak(7, Some(day(1)), day(10)), 1);
    }

    #[test]
    fn test_month_boundary() {
        let last = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        assert_eq!(next_streak(2, Some(last), day(1)), 3);
    }
}
