//! Display model for room schedule boards.
//!
//! A board shows one room: a last-updated stamp, a free/busy status line
//! with a countdown to the next booking, and the upcoming events inside the
//! lookahead window.

use chrono::{DateTime, Duration, Local};

use crate::event::Event;
use crate::utils::time::{format_clock_time, format_day_label, format_last_updated, minutes_until};

/// Display label for the meeting room board
pub const MEETING_ROOM: &str = "Meeting Room";

/// Display label for the training room board
pub const TRAINING_ROOM: &str = "Training Room";

/// One room's events plus the freshness of the data behind them
#[derive(Debug, Clone)]
pub struct RoomSchedule {
    pub label: String,
    pub events: Vec<Event>,
    pub last_updated: Option<DateTime<Local>>,
}

/// Current occupancy of a room
#[derive(Debug, Clone, Default)]
pub struct RoomStatus {
    /// The meeting in progress, if any
    pub current: Option<Event>,
    /// The next meeting still to start, if any
    pub next: Option<Event>,
}

/// Events starting within the lookahead window, in their original order.
///
/// The feed and ICS documents arrive pre-ordered; re-sorting here would
/// change what the original boards showed.
pub fn upcoming_events(events: &[Event], now: DateTime<Local>, lookahead_days: i64) -> Vec<Event> {
    let horizon = now + Duration::days(lookahead_days);
    events
        .iter()
        .filter(|event| event.start >= now && event.start <= horizon)
        .cloned()
        .collect()
}

/// Work out what a room is doing right now.
///
/// An event with no end time never counts as in progress; it has no
/// interval to be inside of.
pub fn room_status(events: &[Event], now: DateTime<Local>) -> RoomStatus {
    let current = events
        .iter()
        .filter(|event| event.start <= now && event.end.map_or(false, |end| end > now))
        .min_by_key(|event| event.start)
        .cloned();

    let next = events
        .iter()
        .filter(|event| event.start > now)
        .min_by_key(|event| event.start)
        .cloned();

    RoomStatus { current, next }
}

/// Render the free/busy countdown line
pub fn render_status(status: &RoomStatus, now: DateTime<Local>) -> String {
    if let Some(current) = &status.current {
        match current.end {
            Some(end) => format!(
                "In use: {} until {}",
                current.summary,
                format_clock_time(&end)
            ),
            None => format!("In use: {}", current.summary),
        }
    } else if let Some(next) = &status.next {
        let minutes = minutes_until(&now, &next.start);
        if minutes < 60 {
            format!("Free, {} starts in {} min", next.summary, minutes)
        } else {
            format!("Free until {}", format_clock_time(&next.start))
        }
    } else {
        String::from("Free")
    }
}

/// Render one room's board as text
pub fn render_schedule(schedule: &RoomSchedule, now: DateTime<Local>, lookahead_days: i64) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", schedule.label));
    out.push_str(&format!(
        "Last updated: {}\n",
        format_last_updated(schedule.last_updated, now)
    ));

    let status = room_status(&schedule.events, now);
    out.push_str(&format!("Status: {}\n", render_status(&status, now)));

    let upcoming = upcoming_events(&schedule.events, now, lookahead_days);
    if upcoming.is_empty() {
        out.push_str(&format!("No events in the next {} days\n", lookahead_days));
        return out;
    }

    let today = now.date_naive();
    for event in &upcoming {
        let day = format_day_label(event.start.date_naive(), today);
        let times = match &event.end {
            Some(end) => format!(
                "{} - {}",
                format_clock_time(&event.start),
                format_clock_time(end)
            ),
            None => format_clock_time(&event.start),
        };

        out.push_str(&format!("{:<12} {}  {}", day, times, event.summary));
        if !event.location.is_empty() {
            out.push_str(&format!(" @ {}", event.location));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(summary: &str, start: DateTime<Local>, end: Option<DateTime<Local>>) -> Event {
        Event {
            summary: summary.to_string(),
            start,
            end,
            location: String::new(),
        }
    }

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_upcoming_events_window() {
        let now = noon();
        let events = vec![
            event("past", now - Duration::hours(1), None),
            event("soon", now + Duration::hours(1), None),
            event("edge", now + Duration::days(7), None),
            event("beyond", now + Duration::days(8), None),
        ];

        let upcoming = upcoming_events(&events, now, 7);

        let names: Vec<&str> = upcoming.iter().map(|e| e.summary.as_str()).collect();
        assert_eq!(names, vec!["soon", "edge"]);
    }

    #[test]
    fn test_upcoming_events_preserve_order() {
        let now = noon();
        let events = vec![
            event("later", now + Duration::hours(3), None),
            event("earlier", now + Duration::hours(1), None),
        ];

        let upcoming = upcoming_events(&events, now, 7);

        // Input order wins over chronological order
        assert_eq!(upcoming[0].summary, "later");
        assert_eq!(upcoming[1].summary, "earlier");
    }

    #[test]
    fn test_room_status_current_and_next() {
        let now = noon();
        let events = vec![
            event(
                "running",
                now - Duration::minutes(30),
                Some(now + Duration::minutes(30)),
            ),
            event("next", now + Duration::hours(2), None),
            event("far", now + Duration::hours(5), None),
        ];

        let status = room_status(&events, now);

        assert_eq!(status.current.unwrap().summary, "running");
        assert_eq!(status.next.unwrap().summary, "next");
    }

    #[test]
    fn test_room_status_event_without_end_is_not_current() {
        let now = noon();
        let events = vec![event("open ended", now - Duration::minutes(30), None)];

        let status = room_status(&events, now);

        assert!(status.current.is_none());
        assert!(status.next.is_none());
    }

    #[test]
    fn test_render_status_in_use() {
        let now = noon();
        let status = RoomStatus {
            current: Some(event(
                "Standup",
                now - Duration::minutes(10),
                Some(Local.with_ymd_and_hms(2024, 1, 15, 13, 0, 0).unwrap()),
            )),
            next: None,
        };

        assert_eq!(render_status(&status, now), "In use: Standup until 1:00 PM");
    }

    #[test]
    fn test_render_status_free_with_countdown() {
        let now = noon();
        let status = RoomStatus {
            current: None,
            next: Some(event("Review", now + Duration::minutes(42), None)),
        };

        assert_eq!(
            render_status(&status, now),
            "Free, Review starts in 42 min"
        );
    }

    #[test]
    fn test_render_status_free_until_later_booking() {
        let now = noon();
        let status = RoomStatus {
            current: None,
            next: Some(event(
                "Planning",
                Local.with_ymd_and_hms(2024, 1, 15, 15, 0, 0).unwrap(),
                None,
            )),
        };

        assert_eq!(render_status(&status, now), "Free until 3:00 PM");
    }

    #[test]
    fn test_render_status_idle() {
        assert_eq!(render_status(&RoomStatus::default(), noon()), "Free");
    }

    #[test]
    fn test_render_schedule_empty() {
        let now = noon();
        let schedule = RoomSchedule {
            label: MEETING_ROOM.to_string(),
            events: vec![],
            last_updated: None,
        };

        let board = render_schedule(&schedule, now, 7);

        assert!(board.contains("=== Meeting Room ==="));
        assert!(board.contains("Last updated: Never"));
        assert!(board.contains("Status: Free"));
        assert!(board.contains("No events in the next 7 days"));
    }

    #[test]
    fn test_render_schedule_lists_events() {
        let now = noon();
        let mut booked = event(
            "Kickoff",
            Local.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap(),
            Some(Local.with_ymd_and_hms(2024, 1, 16, 10, 0, 0).unwrap()),
        );
        booked.location = String::from("Main office");

        let schedule = RoomSchedule {
            label: TRAINING_ROOM.to_string(),
            events: vec![booked],
            last_updated: Some(now - Duration::minutes(5)),
        };

        let board = render_schedule(&schedule, now, 7);

        assert!(board.contains("=== Training Room ==="));
        assert!(board.contains("Last updated: 5 min ago"));
        assert!(board.contains("Tomorrow"));
        assert!(board.contains("9:00 AM - 10:00 AM"));
        assert!(board.contains("Kickoff @ Main office"));
    }
}
