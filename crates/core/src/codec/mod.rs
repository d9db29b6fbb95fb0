//! Schedule (de)serialization
//!
//! The stored `hours` field is an opaque string bounded to 255 characters by
//! the backend column. Decoding tries the JSON shapes first, then the
//! compact token grammar, and never fails: unrecognized input degrades to
//! the caller-appropriate fallback. Encoding prefers the JSON form and
//! silently switches to the compact form when it would not fit.

mod compact;
mod json;

use serde::Serialize;

use crate::model::{DaySchedule, TimeInterval, WeeklySchedule, WEEK};

pub use compact::encode_compact;

/// JSON serializations longer than this are re-encoded compactly, leaving
/// margin under the 255-character storage column.
pub const MAX_JSON_LEN: usize = 240;

/// Days recovered from one decode attempt; `None` entries were not mentioned
/// by the input.
pub(crate) type PartialWeek = [Option<DaySchedule>; 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Json,
    Compact,
}

fn decode_partial(input: &str) -> Option<(PartialWeek, SourceFormat)> {
    if let Some(days) = json::decode_json(input) {
        return Some((days, SourceFormat::Json));
    }
    compact::decode_compact(input).map(|days| (days, SourceFormat::Compact))
}

/// Decode for read-only display. Absent, blank, or unrecognized input yields
/// `None` (the caller renders a neutral closed state); recognized input is
/// materialized to a full week with unmentioned days closed.
pub fn decode(input: Option<&str>) -> Option<WeeklySchedule> {
    let input = input.map(str::trim).filter(|s| !s.is_empty())?;
    let (days, _) = decode_partial(input)?;

    let mut schedule = WeeklySchedule::closed();
    for (index, day) in days.into_iter().enumerate() {
        if let Some(day) = day {
            *schedule.day_mut(WEEK[index]) = day;
        }
    }
    Some(schedule)
}

/// Decode for the editable form. Absent, blank, or unrecognized input yields
/// the full default schedule; recognized input overlays it, so unmentioned
/// days keep their defaults. A compact token that enables a day without
/// listing intervals receives the default slot, matching how the editor
/// seeds such days.
pub fn decode_or_default(input: Option<&str>) -> WeeklySchedule {
    let Some(input) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return WeeklySchedule::default();
    };
    let Some((days, format)) = decode_partial(input) else {
        return WeeklySchedule::default();
    };

    let mut schedule = WeeklySchedule::default();
    for (index, day) in days.into_iter().enumerate() {
        if let Some(mut day) = day {
            if format == SourceFormat::Compact && day.enabled && day.slots.is_empty() {
                day.slots.push(TimeInterval::DEFAULT_OPEN);
            }
            *schedule.day_mut(WEEK[index]) = day;
        }
    }
    schedule
}

#[derive(Serialize)]
struct DaysDoc<'a> {
    days: &'a WeeklySchedule,
}

/// Serialize to the storage string: `{"days": {...}}` when it fits within
/// [`MAX_JSON_LEN`], otherwise the compact token form. The switch is a
/// transparent strategy change, not an error.
pub fn encode(schedule: &WeeklySchedule) -> String {
    match serde_json::to_string(&DaysDoc { days: schedule }) {
        Ok(json) if json.len() <= MAX_JSON_LEN => json,
        Ok(json) => {
            tracing::debug!(
                len = json.len(),
                limit = MAX_JSON_LEN,
                "json form over storage budget, using compact encoding"
            );
            encode_compact(schedule)
        }
        Err(_) => encode_compact(schedule),
    }
}
