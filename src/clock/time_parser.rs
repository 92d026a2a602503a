//! Parsing of `HH:mm:ss` time strings.
//
// chrono has no notion of hour 24, so the end-of-day literals are matched
// before the strict grammar is tried.

use chrono::{NaiveTime, Timelike};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Literals accepted for the end of the day
pub const END_OF_DAY_LITERALS: [&str; 2] = ["24:00:00", "24:00"];

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})$").unwrap());

/// Validated hour, minute and second of a clock reading.
///
/// `hour` is in `0..=24`; hour 24 only occurs as `24:00:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub const END_OF_DAY: ClockTime = ClockTime { hour: 24, minute: 0, second: 0 };

    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self { hour: time.hour(), minute: time.minute(), second: time.second() }
    }
}

/// Outcome of parsing a time string.
///
/// The fields of an invalid result stay at zero and are not reachable
/// through [`ParsedTime::time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedTime {
    hour: u32,
    minute: u32,
    second: u32,
    valid: bool,
}

impl ParsedTime {
    fn invalid() -> Self {
        Self::default()
    }

    fn valid(time: ClockTime) -> Self {
        Self { hour: time.hour, minute: time.minute, second: time.second, valid: true }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The parsed time, or `None` if the input was rejected
    pub fn time(&self) -> Option<ClockTime> {
        self.valid.then_some(ClockTime {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        })
    }
}

/// Parse a time string in strict `HH:mm:ss` form, or one of the
/// [`END_OF_DAY_LITERALS`].
///
/// Never fails; rejection is reported through [`ParsedTime::is_valid`].
pub fn parse(input: &str) -> ParsedTime {
    if END_OF_DAY_LITERALS.contains(&input) {
        return ParsedTime::valid(ClockTime::END_OF_DAY);
    }

    let Some(caps) = TIME_PATTERN.captures(input) else {
        debug!("Rejected time '{}': does not match HH:mm:ss", input);
        return ParsedTime::invalid();
    };

    // The pattern guarantees two ASCII digits per field
    let field = |i: usize| caps[i].parse::<u32>().unwrap_or(u32::MAX);

    match NaiveTime::from_hms_opt(field(1), field(2), field(3)) {
        Some(time) => ParsedTime::valid(ClockTime::from_naive_time(time)),
        None => {
            debug!("Rejected time '{}': component out of range", input);
            ParsedTime::invalid()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("00:00:00", 0, 0, 0)]
    #[test_case("13:17:01", 13, 17, 1)]
    #[test_case("23:59:59", 23, 59, 59)]
    #[test_case("24:00:00", 24, 0, 0)]
    #[test_case("24:00", 24, 0, 0)]
    fn test_parse_valid(input: &str, hour: u32, minute: u32, second: u32) {
        let parsed = parse(input);
        assert!(parsed.is_valid());
        assert_eq!(parsed.time(), Some(ClockTime { hour, minute, second }));
    }

    #[test_case("" ; "empty")]
    #[test_case("24:01:00" ; "past end of day")]
    #[test_case("24:00:01" ; "end of day with seconds")]
    #[test_case("25:00:00" ; "hour out of range")]
    #[test_case("12:60:00" ; "minute out of range")]
    #[test_case("12:00:60" ; "leap second")]
    #[test_case("9:00:00" ; "single digit hour")]
    #[test_case("12:00" ; "missing seconds")]
    #[test_case("12-00-00" ; "wrong separator")]
    #[test_case(" 12:00:00" ; "leading space")]
    #[test_case("12:00:00Z" ; "trailing garbage")]
    #[test_case("12:00:00:00" ; "too many fields")]
    #[test_case("ab:cd:ef" ; "non numeric")]
    #[test_case("١٢:٠٠:٠٠" ; "non ascii digits")]
    fn test_parse_invalid(input: &str) {
        let parsed = parse(input);
        assert!(!parsed.is_valid());
        assert_eq!(parsed.time(), None);
    }

    #[test]
    fn test_invalid_fields_default_to_zero() {
        assert_eq!(parse("nope"), ParsedTime::default());
    }
}
