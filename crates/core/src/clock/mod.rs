//! Open/closed queries over a weekly schedule
//!
//! Pure functions over the in-memory model and a caller-supplied `now`;
//! results are only valid as of that instant, so the caller re-polls at
//! whatever cadence it needs. A `None` schedule is fully closed everywhere.

mod format;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::model::WeeklySchedule;

pub use format::{format_time, Language};

/// The answer to "is the venue open, and when does that change".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    Open { closes_at: NaiveDateTime },
    Closed { next_open_at: Option<NaiveDateTime> },
}

impl OpenStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, OpenStatus::Open { .. })
    }

    pub fn closes_at(&self) -> Option<NaiveDateTime> {
        match self {
            OpenStatus::Open { closes_at } => Some(*closes_at),
            OpenStatus::Closed { .. } => None,
        }
    }

    pub fn next_open_at(&self) -> Option<NaiveDateTime> {
        match self {
            OpenStatus::Open { .. } => None,
            OpenStatus::Closed { next_open_at } => *next_open_at,
        }
    }
}

/// A slot anchored to a concrete calendar date. Overnight slots get their
/// end pushed to the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

// One day back catches an overnight window still running from yesterday;
// seven days ahead finds the reopen a full week out once today's windows
// have passed.
const LOOKBEHIND_DAYS: i64 = 1;
const LOOKAHEAD_DAYS: i64 = 7;

fn collect_windows(schedule: &WeeklySchedule, today: NaiveDate) -> Vec<Window> {
    let mut windows = Vec::new();
    for offset in -LOOKBEHIND_DAYS..=LOOKAHEAD_DAYS {
        let date = today + Duration::days(offset);
        let day = schedule.day(date.weekday());
        if !day.enabled {
            continue;
        }
        for slot in &day.slots {
            let start = date.and_time(slot.from.to_naive_time());
            let end_date = if slot.crosses_midnight() {
                date + Duration::days(1)
            } else {
                date
            };
            windows.push(Window {
                start,
                end: end_date.and_time(slot.to.to_naive_time()),
            });
        }
    }
    // slot order within a day is whatever the editor produced; never assume
    // it is chronological
    windows.sort_by_key(|w| w.start);
    windows
}

/// The authoritative, cross-day-correct status query: reports the closing
/// time while open, or the next opening time (within the unrolled horizon)
/// while closed. Window bounds are inclusive.
pub fn next_transition(schedule: Option<&WeeklySchedule>, now: NaiveDateTime) -> OpenStatus {
    let Some(schedule) = schedule else {
        return OpenStatus::Closed { next_open_at: None };
    };

    let windows = collect_windows(schedule, now.date());
    if let Some(open) = windows.iter().find(|w| w.start <= now && now <= w.end) {
        return OpenStatus::Open {
            closes_at: open.end,
        };
    }
    match windows.iter().find(|w| now < w.start) {
        Some(next) => OpenStatus::Closed {
            next_open_at: Some(next.start),
        },
        None => OpenStatus::Closed { next_open_at: None },
    }
}

/// Same-day open test. An overnight slot is treated as two disjoint ranges
/// on its own day, so the late-night continuation from yesterday is not
/// considered here; [`next_transition`] is the cross-day-accurate query.
pub fn is_open_at(schedule: Option<&WeeklySchedule>, at: NaiveDateTime) -> bool {
    let Some(schedule) = schedule else {
        return false;
    };
    let day = schedule.day(at.weekday());
    if !day.enabled {
        return false;
    }

    let current = (at.hour() * 60 + at.minute()) as u16;
    day.slots.iter().any(|slot| {
        let from = slot.from.minutes_from_midnight();
        let to = slot.to.minutes_from_midnight();
        if from <= to {
            from <= current && current <= to
        } else {
            current >= from || current <= to
        }
    })
}
