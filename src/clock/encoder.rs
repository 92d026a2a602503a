//! Encoding of a time of day into the five lamp rows.

use super::lamp::{
    LampRow, FIVE_MINUTES_TEMPLATE, HOURS_TEMPLATE, SECONDS_TEMPLATE, SINGLE_MINUTES_TEMPLATE,
};
use super::time_parser::ClockTime;
use serde::Serialize;
use std::fmt;

/// Separator between rows in the rendered clock
pub const ROW_SEPARATOR: &str = "\n";

/// The five rows of a Berlin Clock, top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BerlinClock {
    pub seconds: LampRow,
    pub five_hours: LampRow,
    pub single_hours: LampRow,
    pub five_minutes: LampRow,
    pub single_minutes: LampRow,
}

impl BerlinClock {
    pub fn from_time(hour: u32, minute: u32, second: u32) -> Self {
        let (five_hours, single_hours) = hour_rows(hour);
        let (five_minutes, single_minutes) = minute_rows(minute);

        Self {
            seconds: seconds_row(second),
            five_hours,
            single_hours,
            five_minutes,
            single_minutes,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &LampRow> {
        [
            &self.seconds,
            &self.five_hours,
            &self.single_hours,
            &self.five_minutes,
            &self.single_minutes,
        ]
        .into_iter()
    }

    /// Render the rows joined by `separator` instead of [`ROW_SEPARATOR`]
    pub fn to_string_with(&self, separator: &str) -> String {
        self.rows().map(|row| row.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl From<ClockTime> for BerlinClock {
    fn from(time: ClockTime) -> Self {
        Self::from_time(time.hour, time.minute, time.second)
    }
}

impl fmt::Display for BerlinClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(ROW_SEPARATOR))
    }
}

/// Encode a time as the five-line clock string.
///
/// Expects `hour` in `0..=24` and `minute`, `second` in `0..=59`; larger
/// values light their rows fully.
pub fn encode(hour: u32, minute: u32, second: u32) -> String {
    BerlinClock::from_time(hour, minute, second).to_string()
}

fn seconds_row(second: u32) -> LampRow {
    // The lamp blinks off on odd seconds
    LampRow::lit(&SECONDS_TEMPLATE, usize::from(second % 2 == 0))
}

fn hour_rows(hour: u32) -> (LampRow, LampRow) {
    let (top_on, bottom_on) = split_by_five(hour);
    (LampRow::lit(&HOURS_TEMPLATE, top_on), LampRow::lit(&HOURS_TEMPLATE, bottom_on))
}

fn minute_rows(minute: u32) -> (LampRow, LampRow) {
    let (top_on, bottom_on) = split_by_five(minute);
    (
        LampRow::lit(&FIVE_MINUTES_TEMPLATE, top_on),
        LampRow::lit(&SINGLE_MINUTES_TEMPLATE, bottom_on),
    )
}

fn split_by_five(value: u32) -> (usize, usize) {
    let top = value / 5;
    let bottom = value - top * 5;
    (top as usize, bottom as usize)
}
