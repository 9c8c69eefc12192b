//! Time-of-day values for class schedules.

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Time of day at which a class starts or ends.
///
/// Parses `"HH:MM"` and `"HH:MM:SS"`. Formats as `"HH:MM"` unless the value
/// carries seconds, so a submitted value is returned exactly as it was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoraDelDia(NaiveTime);

impl HoraDelDia {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Build from hour and minute. Returns `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for HoraDelDia {
    fn from(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl From<HoraDelDia> for NaiveTime {
    fn from(hora: HoraDelDia) -> Self {
        hora.0
    }
}

/// Error raised for strings that are not a valid time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time of day '{0}', expected HH:MM or HH:MM:SS")]
pub struct HoraInvalida(pub String);

impl FromStr for HoraDelDia {
    type Err = HoraInvalida;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map(Self)
            .map_err(|_| HoraInvalida(s.to_string()))
    }
}

impl fmt::Display for HoraDelDia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.second() == 0 {
            write!(f, "{}", self.0.format("%H:%M"))
        } else {
            write!(f, "{}", self.0.format("%H:%M:%S"))
        }
    }
}

impl Serialize for HoraDelDia {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HoraDelDia {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
