use chrono::{Datelike, NaiveDate, Weekday};

/// Counts the Monday-Friday dates in the inclusive range [start, end].
/// Returns 0 when start > end.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut day = start;
    let mut count = 0;
    while day <= end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn single_weekday_counts_one() {
        // 2024-01-01 is a Monday
        assert_eq!(business_days_between(date("2024-01-01"), date("2024-01-01")), 1);
    }

    #[test]
    fn single_weekend_day_counts_zero() {
        // 2024-01-06 is a Saturday, 2024-01-07 a Sunday
        assert_eq!(business_days_between(date("2024-01-06"), date("2024-01-06")), 0);
        assert_eq!(business_days_between(date("2024-01-07"), date("2024-01-07")), 0);
    }

    #[test]
    fn full_work_week() {
        assert_eq!(business_days_between(date("2024-01-01"), date("2024-01-05")), 5);
    }

    #[test]
    fn range_spanning_a_weekend() {
        // Fri 2024-01-05 through Mon 2024-01-08: Sat/Sun excluded
        assert_eq!(business_days_between(date("2024-01-05"), date("2024-01-08")), 2);
    }

    #[test]
    fn leap_year_february_boundary() {
        // 2024-02-28 (Wed) .. 2024-03-01 (Fri), includes Feb 29
        assert_eq!(business_days_between(date("2024-02-28"), date("2024-03-01")), 3);
    }

    #[test]
    fn year_boundary() {
        // Fri 2023-12-29 .. Tue 2024-01-02
        assert_eq!(business_days_between(date("2023-12-29"), date("2024-01-02")), 3);
    }

    #[test]
    fn monotonic_in_end_date() {
        let start = date("2024-03-01");
        let mut prev = 0;
        let mut end = start;
        for _ in 0..30 {
            let days = business_days_between(start, end);
            assert!(days >= prev);
            prev = days;
            end = end.succ_opt().unwrap();
        }
    }
}
