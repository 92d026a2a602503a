use log::debug;
use std::str::FromStr;

mod encoder;
mod lamp;
mod time_parser;

pub use encoder::*;
pub use lamp::*;
pub use time_parser::*;

/// Custom error type for clock conversions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("'{0}' is not in an acceptable format.")]
    InvalidTimeFormat(String),
}

/// Converts a textual time into its Berlin Clock rendering
pub trait TimeConverter {
    fn convert_time(&self, time: &str) -> Result<String, ClockError>;
}

/// The standard converter: `\n`-separated rows, `HH:mm:ss` input
#[derive(Debug, Clone, Copy, Default)]
pub struct BerlinClockConverter;

impl TimeConverter for BerlinClockConverter {
    fn convert_time(&self, time: &str) -> Result<String, ClockError> {
        convert_time(time)
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).time().ok_or_else(|| ClockError::InvalidTimeFormat(s.to_string()))
    }
}

/// Parse `time` and build the structured clock
pub fn clock_for(time: &str) -> Result<BerlinClock, ClockError> {
    let time: ClockTime = time.parse()?;
    debug!("Converting {:02}:{:02}:{:02}", time.hour, time.minute, time.second);
    Ok(BerlinClock::from(time))
}

/// Convert a `HH:mm:ss` string (or `24:00[:00]`) into the five-line
/// Berlin Clock string, rows separated by `\n`.
///
/// ```
/// let clock = berlin_clock::convert_time("13:17:01").unwrap();
/// assert_eq!(clock, "O\nRROO\nRRRO\nYYROOOOOOOO\nYYOO");
/// assert!(berlin_clock::convert_time("9:00:00").is_err());
/// ```
pub fn convert_time(time: &str) -> Result<String, ClockError> {
    clock_for(time).map(|clock| clock.to_string())
}
