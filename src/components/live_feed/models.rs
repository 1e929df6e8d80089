use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::board::{RoomSchedule, MEETING_ROOM, TRAINING_ROOM};
use crate::event::Event;

/// The calendar feed document as published by the booking flows.
///
/// Keys are camelCase on the wire. Every field tolerates absence so a
/// partially written document still renders.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedDocument {
    pub meeting_room: Vec<FeedEvent>,
    pub training_room: Vec<FeedEvent>,
    pub last_updated: Option<String>,
}

/// One event record in the feed
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FeedEvent {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
}

impl FeedEvent {
    /// Convert a feed record to a display event.
    ///
    /// A record without a parseable start time is skipped; a missing or
    /// unparseable end degrades to none, and title/location degrade to
    /// empty strings.
    pub fn to_event(&self) -> Option<Event> {
        let start = parse_feed_timestamp(self.start.as_deref()?)?;
        let end = self.end.as_deref().and_then(parse_feed_timestamp);

        Some(Event {
            summary: self.title.clone().unwrap_or_default(),
            start,
            end,
            location: self.location.clone().unwrap_or_default(),
        })
    }
}

/// A fetched feed document plus when it was fetched
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub document: FeedDocument,
    pub fetched_at: DateTime<Local>,
}

impl FeedSnapshot {
    /// Build the per-room schedules this snapshot describes
    pub fn room_schedules(&self) -> Vec<RoomSchedule> {
        let last_updated = self
            .document
            .last_updated
            .as_deref()
            .and_then(parse_feed_timestamp);

        vec![
            RoomSchedule {
                label: MEETING_ROOM.to_string(),
                events: convert_events(&self.document.meeting_room),
                last_updated,
            },
            RoomSchedule {
                label: TRAINING_ROOM.to_string(),
                events: convert_events(&self.document.training_room),
                last_updated,
            },
        ]
    }
}

fn convert_events(feed_events: &[FeedEvent]) -> Vec<Event> {
    feed_events.iter().filter_map(FeedEvent::to_event).collect()
}

/// Parse a feed timestamp into local time.
///
/// Unlike the ICS path, feed values carry real offsets (the flows emit
/// RFC 3339), so the offset is honored and converted to local time. A bare
/// value without an offset is taken as local wall-clock time.
pub fn parse_feed_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()?;
    Local.from_local_datetime(&naive).earliest()
}
