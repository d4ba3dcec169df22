//! Tests for task domain models and filters.

#[cfg(test)]
mod tests {
    use crate::tasks::task_filters;
    use crate::tasks::{Alert, Category, Priority, RepeatFrequency, Task};
    use chrono::{Duration, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(name: &str, on: NaiveDate) -> Task {
        Task::new(name, on)
    }

    // ==================== Enum Tests ====================

    #[test]
    fn test_alert_serialization_uses_camel_case() {
        assert_eq!(
            serde_json::to_string(&Alert::FiveMinutes).unwrap(),
            "\"fiveMinutes\""
        );
        assert_eq!(
            serde_json::from_str::<Alert>("\"oneHour\"").unwrap(),
            Alert::OneHour
        );
    }

    #[test]
    fn test_alert_lead_time() {
        assert_eq!(Alert::None.lead_time(), None);
        assert_eq!(Alert::FifteenMinutes.lead_time(), Some(Duration::minutes(15)));
        assert_eq!(Alert::OneHour.lead_time(), Some(Duration::minutes(60)));
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert_eq!(Priority::ALL.len(), 3);
    }

    #[test]
    fn test_category_round_trip_tags() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    // ==================== Task Tests ====================

    #[test]
    fn test_display_category_prefers_custom_label() {
        let mut t = task("Piano", date(2024, 5, 1));
        t.category = Category::Habits;
        assert_eq!(t.display_category(), "habits");

        t.custom_category = Some("Music".to_string());
        assert_eq!(t.display_category(), "Music");

        t.custom_category = Some("   ".to_string());
        assert_eq!(t.display_category(), "habits");
    }

    #[test]
    fn test_is_overdue() {
        let today = date(2024, 5, 10);
        let mut t = task("Old", date(2024, 5, 9));
        assert!(t.is_overdue(today));

        t.is_completed = true;
        assert!(!t.is_overdue(today));

        assert!(!task("Today", today).is_overdue(today));
    }

    #[test]
    fn test_occurs_on_without_repeat() {
        let t = task("Once", date(2024, 5, 15));
        assert!(t.occurs_on(date(2024, 5, 15)));
        assert!(!t.occurs_on(date(2024, 5, 16)));
    }

    #[test]
    fn test_occurs_on_daily_never_before_start() {
        let mut t = task("Daily", date(2024, 5, 15));
        t.repeat = RepeatFrequency::Daily;
        assert!(t.occurs_on(date(2024, 5, 20)));
        assert!(!t.occurs_on(date(2024, 5, 14)));
    }

    #[test]
    fn test_occurs_on_weekly_and_named_day() {
        // 2024-05-15 is a Wednesday
        let mut weekly = task("Weekly", date(2024, 5, 15));
        weekly.repeat = RepeatFrequency::Weekly;
        assert!(weekly.occurs_on(date(2024, 5, 22)));
        assert!(!weekly.occurs_on(date(2024, 5, 23)));

        let mut fridays = task("Fridays", date(2024, 5, 15));
        fridays.repeat = RepeatFrequency::Friday;
        assert!(fridays.occurs_on(date(2024, 5, 17)));
        assert!(!fridays.occurs_on(date(2024, 5, 22)));
    }

    // ==================== Filter Tests ====================

    #[test]
    fn test_filters_keep_input_order() {
        let d1 = date(2024, 5, 1);
        let d2 = date(2024, 5, 2);
        let mut a = task("a", d1);
        a.priority = Priority::High;
        let b = task("b", d2);
        let mut c = task("c", d1);
        c.priority = Priority::High;
        c.is_completed = true;
        let all = vec![a.clone(), b.clone(), c.clone()];

        assert_eq!(task_filters::on_date(all.clone(), d1), vec![a.clone(), c.clone()]);
        assert_eq!(
            task_filters::by_priority(all.clone(), Priority::High),
            vec![a.clone(), c.clone()]
        );
        assert_eq!(
            task_filters::by_completion(all.clone(), false),
            vec![a.clone(), b.clone()]
        );
        assert_eq!(task_filters::overdue(all, d2), vec![a]);
    }

    #[test]
    fn test_by_category() {
        let mut gym = task("gym", date(2024, 5, 1));
        gym.category = Category::Sports;
        let other = task("other", date(2024, 5, 1));
        assert_eq!(
            task_filters::by_category(vec![gym.clone(), other], Category::Sports),
            vec![gym]
        );
    }

    #[test]
    fn test_completion_percentage() {
        assert_eq!(task_filters::completion_percentage(&[]), 0.0);

        let mut done = task("done", date(2024, 5, 1));
        done.is_completed = true;
        let open = task("open", date(2024, 5, 1));
        assert_eq!(task_filters::completion_percentage(&[done, open]), 50.0);
    }
}
