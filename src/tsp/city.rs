//! City coordinates and city list parsing.

use crate::error::GaError;
use std::str::FromStr;

/// A point in the plane. Index in the city list is its identity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(i32, i32)> for City {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Parses one `<id> <x> <y>` record. The id column is ignored and both
/// coordinates must be finite.
impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(format!(
                "expected 3 fields `<id> <x> <y>`, found {}",
                fields.len()
            ));
        }
        let coord = |name: &str, raw: &str| {
            let value = raw
                .parse::<f64>()
                .map_err(|e| format!("invalid {name} coordinate `{raw}`: {e}"))?;
            if !value.is_finite() {
                return Err(format!("{name} coordinate `{raw}` is not finite"));
            }
            Ok(value)
        };
        Ok(City::new(coord("x", fields[1])?, coord("y", fields[2])?))
    }
}

/// Parses a whitespace-separated city list, one `<id> <x> <y>` per line.
///
/// Blank lines are skipped. Cities are indexed in file order.
pub fn parse_cities(input: &str) -> Result<Vec<City>, GaError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.parse::<City>().map_err(|message| GaError::Parse {
                line: i + 1,
                message,
            })
        })
        .collect()
}
