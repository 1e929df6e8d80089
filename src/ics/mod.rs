//! Decoder for the ICS subset exported by the room booking systems this
//! display was built against.
//!
//! Only `VEVENT` blocks with `SUMMARY`/`DTSTART`/`DTEND`/`LOCATION` are
//! handled. No line folding, no character unescaping, no recurrence, no
//! timezone interpretation: a `Z` suffix is stripped without shifting the
//! value, and everything is treated as local wall-clock time. Malformed
//! input never produces an error; incomplete events are dropped and
//! unreadable timestamps fall back to the current moment.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::event::Event;

/// The in-progress event between a BEGIN:VEVENT and END:VEVENT marker.
#[derive(Debug, Default)]
struct Accumulator {
    summary: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    location: Option<String>,
}

impl Accumulator {
    /// An accumulator only becomes an event once both summary and start
    /// were seen; anything else is discarded.
    fn into_event(self) -> Option<Event> {
        Some(Event {
            summary: self.summary?,
            start: self.start?,
            end: self.end,
            location: self.location.unwrap_or_default(),
        })
    }
}

/// Decode ICS text into the events it contains, in document order.
///
/// Total function: any input, including empty or non-ICS text, yields a
/// (possibly empty) list.
pub fn decode(text: &str) -> Vec<Event> {
    let mut events = Vec::new();
    let mut current: Option<Accumulator> = None;

    for line in text.lines().map(str::trim) {
        if line == "BEGIN:VEVENT" {
            // A second BEGIN discards whatever was in progress.
            current = Some(Accumulator::default());
        } else if line == "END:VEVENT" {
            if let Some(accumulator) = current.take() {
                if let Some(event) = accumulator.into_event() {
                    events.push(event);
                }
            }
        } else if let Some(accumulator) = current.as_mut() {
            if let Some(rest) = line.strip_prefix("SUMMARY:") {
                accumulator.summary = Some(rest.to_string());
            } else if line.starts_with("DTSTART") {
                if let Some(value) = value_after_last_colon(line) {
                    accumulator.start = Some(decode_timestamp(value));
                }
            } else if line.starts_with("DTEND") {
                if let Some(value) = value_after_last_colon(line) {
                    accumulator.end = Some(decode_timestamp(value));
                }
            } else if let Some(rest) = line.strip_prefix("LOCATION:") {
                accumulator.location = Some(rest.to_string());
            }
        }
    }

    events
}

/// Property parameters (`DTSTART;TZID=...:value`) sit before the value, so
/// the value is whatever follows the last colon. A line with no colon has
/// no value at all.
fn value_after_last_colon(line: &str) -> Option<&str> {
    line.rfind(':').map(|index| &line[index + 1..])
}

/// Decode an ICS date-time value into a local timestamp.
///
/// `T` and `Z` are stripped without interpretation; the remaining digits are
/// read as YYYYMMDD with optional HHMM. Values too short or otherwise
/// unreadable fall back to the current moment rather than failing.
pub fn decode_timestamp(raw: &str) -> DateTime<Local> {
    let digits: Vec<char> = raw.chars().filter(|c| *c != 'T' && *c != 'Z').collect();
    decode_components(&digits).unwrap_or_else(Local::now)
}

fn decode_components(digits: &[char]) -> Option<DateTime<Local>> {
    if digits.len() < 8 {
        return None;
    }

    let field = |range: std::ops::Range<usize>| -> Option<String> {
        Some(digits.get(range)?.iter().collect())
    };

    let year: i32 = field(0..4)?.parse().ok()?;
    let month: u32 = field(4..6)?.parse().ok()?;
    let day: u32 = field(6..8)?.parse().ok()?;
    let hour: u32 = if digits.len() >= 10 {
        field(8..10)?.parse().ok()?
    } else {
        0
    };
    let minute: u32 = if digits.len() >= 12 {
        field(10..12)?.parse().ok()?
    } else {
        0
    };

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
    // A DST fold resolves to the earlier instant; a gap falls through to the
    // caller's "now" fallback.
    Local.from_local_datetime(&naive).earliest()
}
