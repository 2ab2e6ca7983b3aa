/// Types for the schedule grid
use crate::catalog::Course;
use serde::{Deserialize, Serialize};

/// Grid window start, minutes since midnight (08:00).
pub const GRID_START_MIN: i32 = 8 * 60;
/// Grid window end, minutes since midnight (20:00).
pub const GRID_END_MIN: i32 = 20 * 60;
/// One slot is fifteen minutes.
pub const SLOT_MINUTES: i32 = 15;
/// 48 slots per day.
pub const SLOTS_PER_DAY: i32 = (GRID_END_MIN - GRID_START_MIN) / SLOT_MINUTES;

/// The five weekday columns of the schedule grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Parses a full day name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Weekday> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

/// One token from a day-code run.
///
/// Day runs are consumed two characters at a time, with a single trailing
/// character allowed (the Friday code). Codes outside the fixed table pass
/// through unchanged and never match a weekday column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayToken {
    Known(Weekday),
    Unknown(String),
}

impl DayToken {
    pub fn is_day(&self, day: Weekday) -> bool {
        matches!(self, DayToken::Known(d) if *d == day)
    }
}

/// A course meeting's rendered span on one day, expressed as
/// `[start_index, end_index)` on the slot grid.
///
/// Recomputed from scratch on every layout pass and never mutated after the
/// pass that created it. Indices are signed: a malformed end clock can place
/// `end_index` before the grid window, and the block is still reported.
#[derive(Debug, Clone)]
pub struct TimeBlock<'a> {
    pub course: &'a Course,
    pub start_index: i32,
    pub end_index: i32,
    pub has_overlap: bool,
    /// The block's own position in its day's list; rendering uses it to
    /// alternate overlapping blocks between two horizontal lanes.
    pub overlap_index: Option<usize>,
}

impl TimeBlock<'_> {
    /// Horizontal lane hint for overlapping blocks (two lanes).
    pub fn lane(&self) -> usize {
        self.overlap_index.map(|idx| idx % 2).unwrap_or(0)
    }
}
