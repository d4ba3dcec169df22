use chrono::{Datelike, Days, Local, NaiveDate};

/// Today's calendar date in the host's local timezone.
///
/// Task dates are plain calendar dates, so "today" for overdue and progress
/// queries is always taken from the machine the planner runs on.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}

/// Returns the seven dates of the Monday-start week containing `date`.
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let offset = u64::from(date.weekday().num_days_from_monday());
    let Some(monday) = date.checked_sub_days(Days::new(offset)) else {
        return vec![date];
    };
    let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(monday);
    get_days_between(monday, sunday)
}

/// Rounds a percentage for display without changing the stored value.
pub fn round_percent(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_get_days_between_inclusive() {
        let days = get_days_between(date(2024, 2, 27), date(2024, 3, 1));
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1)
            ]
        );
    }

    #[test]
    fn test_get_days_between_reversed_range_is_empty() {
        assert!(get_days_between(date(2024, 3, 2), date(2024, 3, 1)).is_empty());
    }

    #[test]
    fn test_week_dates_starts_on_monday() {
        // 2024-05-15 is a Wednesday
        let week = week_dates(date(2024, 5, 15));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], date(2024, 5, 13));
        assert_eq!(week[6], date(2024, 5, 19));
    }

    #[test]
    fn test_week_dates_on_sunday_reaches_back() {
        let week = week_dates(date(2024, 5, 19));
        assert_eq!(week[0], date(2024, 5, 13));
        assert_eq!(week[6], date(2024, 5, 19));
    }

    #[test]
    fn test_round_percent() {
        assert_eq!(round_percent(100.0 / 3.0, 2), 33.33);
        assert_eq!(round_percent(200.0 / 3.0, 2), 66.67);
        assert_eq!(round_percent(100.0, 2), 100.0);
    }
}
