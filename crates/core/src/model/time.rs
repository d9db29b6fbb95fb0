//! Wall-clock time of day as stored in schedule strings (`HH:MM`)

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors from strict `HH:MM` parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("invalid time literal '{value}': expected HH:MM")]
    Malformed { value: String },

    #[error("hour {hour} out of range in '{value}'")]
    HourOutOfRange { hour: u32, value: String },

    #[error("minute {minute} out of range in '{value}'")]
    MinuteOutOfRange { minute: u32, value: String },
}

/// A validated time of day. Hour 0-23, minute 0-59.
///
/// Parsing accepts a 1- or 2-digit hour and minute; `Display` always emits
/// the zero-padded two-digit form used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallTime {
    hour: u8,
    minute: u8,
}

impl WallTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Construction from literals known to be in range.
    pub(crate) const fn of(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn minutes_from_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        // hour and minute are validated at construction
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, 0).unwrap_or_default()
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for WallTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed = || TimeParseError::Malformed {
            value: trimmed.to_string(),
        };

        let (h, m) = trimmed.split_once(':').ok_or_else(malformed)?;
        let (h, m) = (h.trim(), m.trim());
        let digits = |part: &str| {
            !part.is_empty() && part.len() <= 2 && part.chars().all(|c| c.is_ascii_digit())
        };
        if !digits(h) || !digits(m) {
            return Err(malformed());
        }

        let hour: u32 = h.parse().map_err(|_| malformed())?;
        let minute: u32 = m.parse().map_err(|_| malformed())?;
        if hour > 23 {
            return Err(TimeParseError::HourOutOfRange {
                hour,
                value: trimmed.to_string(),
            });
        }
        if minute > 59 {
            return Err(TimeParseError::MinuteOutOfRange {
                minute,
                value: trimmed.to_string(),
            });
        }

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }
}

impl Serialize for WallTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WallTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
