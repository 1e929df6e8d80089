use chrono::{DateTime, Local};

/// A single calendar entry as displayed on a room board.
///
/// Both decode paths (the ICS decoder and the live feed conversion) produce
/// this shape, and the board rendering consumes it. Events live only for the
/// duration of one decode/render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub summary: String,
    pub start: DateTime<Local>,
    /// Absent when the source did not carry an end time.
    pub end: Option<DateTime<Local>>,
    /// Empty when the source did not carry a location.
    pub location: String,
}
