//! Lamps and lamp rows of the clock face.

use serde::{Serialize, Serializer};
use std::fmt;

/// A single lamp on the clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lamp {
    Off,
    Yellow,
    Red,
}

impl Lamp {
    pub fn symbol(self) -> char {
        match self {
            Lamp::Off => 'O',
            Lamp::Yellow => 'Y',
            Lamp::Red => 'R',
        }
    }

    pub fn is_on(self) -> bool {
        self != Lamp::Off
    }
}

impl fmt::Display for Lamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Fully lit seconds lamp
pub const SECONDS_TEMPLATE: [Lamp; 1] = [Lamp::Yellow];

/// Fully lit hour row, used for both the five-hour and single-hour rows
pub const HOURS_TEMPLATE: [Lamp; 4] = [Lamp::Red; 4];

/// Fully lit five-minute row; every third lamp marks a quarter hour
pub const FIVE_MINUTES_TEMPLATE: [Lamp; 11] = [
    Lamp::Yellow,
    Lamp::Yellow,
    Lamp::Red,
    Lamp::Yellow,
    Lamp::Yellow,
    Lamp::Red,
    Lamp::Yellow,
    Lamp::Yellow,
    Lamp::Red,
    Lamp::Yellow,
    Lamp::Yellow,
];

/// Fully lit single-minute row
pub const SINGLE_MINUTES_TEMPLATE: [Lamp; 4] = [Lamp::Yellow; 4];

/// An ordered, immutable row of lamps
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LampRow {
    lamps: Vec<Lamp>,
}

impl LampRow {
    /// Build a row from a fully lit template, keeping the first `on_count`
    /// lamps lit and switching the trailing ones off.
    ///
    /// A count larger than the template leaves the whole row lit.
    pub fn lit(template: &[Lamp], on_count: usize) -> Self {
        let off_count = template.len().saturating_sub(on_count);
        if off_count == 0 {
            return Self { lamps: template.to_vec() };
        }

        let keep = template.len() - off_count;
        let lamps = template
            .iter()
            .enumerate()
            .map(|(i, lamp)| if i < keep { *lamp } else { Lamp::Off })
            .collect();

        Self { lamps }
    }

    pub fn lamps(&self) -> &[Lamp] {
        &self.lamps
    }

    /// Number of lamps currently lit
    pub fn lit_count(&self) -> usize {
        self.lamps.iter().filter(|lamp| lamp.is_on()).count()
    }
}

impl fmt::Display for LampRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lamp in &self.lamps {
            write!(f, "{}", lamp)?;
        }
        Ok(())
    }
}

impl Serialize for LampRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
