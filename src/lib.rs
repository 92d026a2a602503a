//! Conversion of a time of day into the lamp rows of the Berlin Clock.
//!
//! The clock face has five rows, top to bottom: a seconds lamp that is lit
//! on even seconds, two rows of four red lamps counting five hours and one
//! hour, a row of eleven lamps counting five minutes (red at each quarter
//! hour) and a row of four yellow lamps counting single minutes.

pub mod app;
pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;

// Re-export commonly used types
pub use clock::{
    convert_time, BerlinClock, BerlinClockConverter, ClockError, ClockTime, ParsedTime,
    TimeConverter,
};
pub use config::Config;
