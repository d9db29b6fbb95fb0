//! The weekly opening-hours model: seven days of enabled flags and open
//! windows, Monday-first regardless of locale.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::model::time::WallTime;

/// Canonical lower-case day names, Monday-first. These are the JSON keys of
/// the stored `days` object.
pub const DAY_KEYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Calendar order of the week, aligned with `DAY_KEYS`.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_index(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}

/// Resolve a full weekday name (any case) to its day, e.g. `"Monday"`.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let lowered = name.trim().to_ascii_lowercase();
    DAY_KEYS
        .iter()
        .position(|key| *key == lowered)
        .map(|i| WEEK[i])
}

/// One open window within a day.
///
/// There is no `to > from` invariant: when `to <= from` the window crosses
/// midnight into the next calendar day (`22:00-02:00` runs until 02:00
/// tomorrow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub from: WallTime,
    pub to: WallTime,
}

impl TimeInterval {
    /// The slot a freshly created day starts with.
    pub const DEFAULT_OPEN: TimeInterval = TimeInterval {
        from: WallTime::of(11, 0),
        to: WallTime::of(21, 0),
    };

    pub fn new(from: WallTime, to: WallTime) -> Self {
        Self { from, to }
    }

    pub fn crosses_midnight(&self) -> bool {
        self.to <= self.from
    }
}

impl std::fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// One day's schedule. A disabled day is closed regardless of leftover
/// slots; an enabled day with no slots is closed for the open-now query but
/// keeps its flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DaySchedule {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<TimeInterval>,
}

impl DaySchedule {
    pub fn closed() -> Self {
        Self::default()
    }

    /// Enabled with the single default slot, as the editor seeds new days.
    pub fn open_default() -> Self {
        Self {
            enabled: true,
            slots: vec![TimeInterval::DEFAULT_OPEN],
        }
    }

    pub fn is_effectively_closed(&self) -> bool {
        !self.enabled || self.slots.is_empty()
    }
}

/// A fully-materialized week: exactly seven days, Monday-first. Serde keys
/// are the canonical lower-case names; capitalized variants are accepted on
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default, alias = "Monday")]
    pub monday: DaySchedule,
    #[serde(default, alias = "Tuesday")]
    pub tuesday: DaySchedule,
    #[serde(default, alias = "Wednesday")]
    pub wednesday: DaySchedule,
    #[serde(default, alias = "Thursday")]
    pub thursday: DaySchedule,
    #[serde(default, alias = "Friday")]
    pub friday: DaySchedule,
    #[serde(default, alias = "Saturday")]
    pub saturday: DaySchedule,
    #[serde(default, alias = "Sunday")]
    pub sunday: DaySchedule,
}

impl Default for WeeklySchedule {
    /// The editor fallback: every day enabled with the default slot.
    fn default() -> Self {
        Self {
            monday: DaySchedule::open_default(),
            tuesday: DaySchedule::open_default(),
            wednesday: DaySchedule::open_default(),
            thursday: DaySchedule::open_default(),
            friday: DaySchedule::open_default(),
            saturday: DaySchedule::open_default(),
            sunday: DaySchedule::open_default(),
        }
    }
}

impl WeeklySchedule {
    pub fn closed() -> Self {
        Self {
            monday: DaySchedule::closed(),
            tuesday: DaySchedule::closed(),
            wednesday: DaySchedule::closed(),
            thursday: DaySchedule::closed(),
            friday: DaySchedule::closed(),
            saturday: DaySchedule::closed(),
            sunday: DaySchedule::closed(),
        }
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }

    /// Iterate days in calendar order (Monday first).
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> + '_ {
        WEEK.iter().map(move |day| (*day, self.day(*day)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_week_is_fully_open() {
        let schedule = WeeklySchedule::default();
        for (_, day) in schedule.days() {
            assert!(day.enabled);
            assert_eq!(day.slots, vec![TimeInterval::DEFAULT_OPEN]);
        }
    }

    #[test]
    fn overnight_detection() {
        let same_day = TimeInterval::new(WallTime::of(11, 0), WallTime::of(21, 0));
        assert!(!same_day.crosses_midnight());
        let overnight = TimeInterval::new(WallTime::of(22, 0), WallTime::of(2, 0));
        assert!(overnight.crosses_midnight());
    }

    #[test]
    fn weekday_lookup_accepts_any_case() {
        assert_eq!(weekday_from_name("Monday"), Some(Weekday::Mon));
        assert_eq!(weekday_from_name("sunday"), Some(Weekday::Sun));
        assert_eq!(weekday_from_name("WEDNESDAY"), Some(Weekday::Wed));
        assert_eq!(weekday_from_name("mon"), None);
    }

    #[test]
    fn serde_keys_accept_capitalized_aliases() {
        let json = r#"{"Monday": {"enabled": true, "slots": [{"from": "09:00", "to": "17:00"}]}}"#;
        let schedule: WeeklySchedule = serde_json::from_str(json).unwrap();
        assert!(schedule.monday.enabled);
        assert!(schedule.tuesday.is_effectively_closed());
    }
}
