use chrono::{DateTime, Duration, Local, NaiveDate};

/// Label a date relative to today for board rows
pub fn format_day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        String::from("Today")
    } else if date == today + Duration::days(1) {
        String::from("Tomorrow")
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

/// Format a timestamp as a 12-hour clock time ("9:05 AM")
pub fn format_clock_time(time: &DateTime<Local>) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Format a feed fetch/update time relative to now
pub fn format_last_updated(last: Option<DateTime<Local>>, now: DateTime<Local>) -> String {
    let Some(last) = last else {
        return String::from("Never");
    };

    let minutes = (now - last).num_minutes();
    if minutes < 1 {
        String::from("Just now")
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else {
        let hours = minutes / 60;
        format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" })
    }
}

/// Whole minutes from now until a later time, floored at zero
pub fn minutes_until(now: &DateTime<Local>, later: &DateTime<Local>) -> i64 {
    (*later - *now).num_minutes().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_format_day_label() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        assert_eq!(format_day_label(today, today), "Today");
        assert_eq!(
            format_day_label(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(), today),
            "Tomorrow"
        );
        assert_eq!(
            format_day_label(NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(), today),
            "Wed, Jan 17"
        );
        // Past dates get the plain format too
        assert_eq!(
            format_day_label(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), today),
            "Fri, Jan 5"
        );
    }

    #[test]
    fn test_format_clock_time() {
        let morning = Local.with_ymd_and_hms(2024, 1, 15, 9, 5, 0).unwrap();
        assert_eq!(format_clock_time(&morning), "9:05 AM");

        let afternoon = Local.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
        assert_eq!(format_clock_time(&afternoon), "2:30 PM");

        let midnight = Local.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(format_clock_time(&midnight), "12:00 AM");
    }

    #[test]
    fn test_format_last_updated() {
        let now = Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        assert_eq!(format_last_updated(None, now), "Never");
        assert_eq!(format_last_updated(Some(now), now), "Just now");
        assert_eq!(
            format_last_updated(Some(now - Duration::minutes(5)), now),
            "5 min ago"
        );
        assert_eq!(
            format_last_updated(Some(now - Duration::minutes(59)), now),
            "59 min ago"
        );
        assert_eq!(
            format_last_updated(Some(now - Duration::minutes(60)), now),
            "1 hour ago"
        );
        assert_eq!(
            format_last_updated(Some(now - Duration::hours(3)), now),
            "3 hours ago"
        );
    }

    #[test]
    fn test_minutes_until() {
        let now = Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        assert_eq!(minutes_until(&now, &(now + Duration::minutes(42))), 42);
        assert_eq!(minutes_until(&now, &(now + Duration::seconds(30))), 0);
        // Times in the past floor at zero
        assert_eq!(minutes_until(&now, &(now - Duration::minutes(10))), 0);
    }
}
