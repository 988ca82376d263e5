#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use workweek::libs::clock::FixedClock;
    use workweek::libs::duration::Duration;
    use workweek::libs::period::{IntervalPeriod, Period, PeriodKind};

    fn t(h: i64, m: i64) -> Duration {
        Duration::make(h, m)
    }

    fn clock(hour: u32, minute: u32) -> FixedClock {
        FixedClock::at(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), hour, minute)
    }

    #[test]
    fn test_closed_interval_total() {
        let period = Period::interval(t(9, 0), Some(t(17, 0)), Some(t(0, 30)));
        assert_eq!(period.total_time(&clock(3, 0)), t(7, 30));
        assert!(!period.is_open());
    }

    #[test]
    fn test_absolute_total_ignores_clock() {
        let period = Period::absolute(t(4, 15));
        assert_eq!(period.total_time(&clock(0, 0)), t(4, 15));
        assert_eq!(period.total_time(&clock(23, 59)), t(4, 15));
    }

    #[test]
    fn test_open_interval_uses_clock() {
        let period = Period::interval(t(8, 45), None, Some(t(0, 15)));
        assert!(period.is_open());
        assert_eq!(period.total_time(&clock(10, 0)), t(1, 0));
        assert_eq!(period.total_time(&clock(12, 20)), t(3, 20));
    }

    #[test]
    fn test_end_before_start_is_negative() {
        let period = Period::interval(t(17, 0), Some(t(9, 0)), None);
        let total = period.total_time(&clock(12, 0));
        assert!(total.is_negative());
        assert_eq!(total, t(-8, 0));
    }

    #[test]
    fn test_switch_keeps_total() {
        let now = clock(16, 10);
        let interval = Period::interval(t(9, 5), Some(t(17, 40)), Some(t(0, 45)));
        let absolute = interval.switch_to(PeriodKind::Absolute, &now);
        assert_eq!(absolute.kind(), PeriodKind::Absolute);
        assert_eq!(absolute.total_time(&now), t(7, 50));

        let back = absolute.switch_to(PeriodKind::Interval, &now);
        assert_eq!(back, Period::interval(Duration::zero(), Some(t(7, 50)), None));
        assert_eq!(back.total_time(&now), t(7, 50));
    }

    #[test]
    fn test_switch_freezes_open_interval() {
        let open = Period::from(IntervalPeriod::starting_at(t(9, 0)));
        let absolute = open.switch_to(PeriodKind::Absolute, &clock(11, 30));
        assert_eq!(absolute.total_time(&clock(18, 0)), t(2, 30));
    }

    #[test]
    fn test_stopwatch() {
        let started = IntervalPeriod::starting_now(&clock(8, 0));
        assert!(started.is_open());
        let stopped = started.stopped_now(&clock(9, 45));
        assert_eq!(stopped.end, Some(t(9, 45)));
        assert_eq!(stopped.total_time(&clock(23, 0)), t(1, 45));
    }

    #[test]
    fn test_wire_format() {
        let absolute: Period = serde_json::from_str(r#"{"time": "4:15"}"#).unwrap();
        assert_eq!(absolute, Period::absolute(t(4, 15)));

        let open: Period = serde_json::from_str(r#"{"start": "9:00"}"#).unwrap();
        assert_eq!(open, Period::interval(t(9, 0), None, None));

        let json = serde_json::to_value(Period::interval(t(9, 0), Some(t(12, 0)), None)).unwrap();
        assert_eq!(json, serde_json::json!({"start": "9:00", "end": "12:00"}));
        assert!(serde_json::from_str::<Period>(r#"{"pause": "0:30"}"#).is_err());
    }

    #[test]
    fn test_malformed_time_is_not_read_as_interval() {
        let json = r#"{"time": "soon", "start": "9:00", "end": "10:00"}"#;
        let error = serde_json::from_str::<Period>(json).unwrap_err();
        assert!(error.to_string().contains("soon"), "{error}");
    }
}
