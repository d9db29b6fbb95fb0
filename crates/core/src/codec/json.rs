//! Permissive decode of the JSON schedule shapes
//!
//! Three legacy shapes are accepted, tried on the parsed value:
//! - `{"days": {"monday": {...}, ...}}` (the preferred, re-encoded form)
//! - `{"week": [{"day": "monday", "enabled": true, "ranges": [...]}, ...]}`
//! - a bare top-level array of the same per-day objects
//!
//! A bare object is treated as a days map when it carries at least one
//! canonical weekday key. Individual entries that do not decode are skipped;
//! slots with a missing or unparseable `from`/`to` are dropped, never
//! defaulted.

use serde_json::Value;

use super::PartialWeek;
use crate::model::{weekday_from_name, weekday_index, DaySchedule, TimeInterval, DAY_KEYS};

/// Decode a JSON schedule string. Returns `None` when the input is not JSON
/// or matches none of the known shapes.
pub(crate) fn decode_json(input: &str) -> Option<PartialWeek> {
    let value: Value = serde_json::from_str(input).ok()?;
    match &value {
        Value::Object(map) => {
            if let Some(days) = map.get("days") {
                decode_days_object(days)
            } else if let Some(week) = map.get("week") {
                decode_week_list(week)
            } else {
                decode_days_object(&value)
            }
        }
        Value::Array(_) => decode_week_list(&value),
        _ => None,
    }
}

fn decode_days_object(value: &Value) -> Option<PartialWeek> {
    let map = value.as_object()?;
    let mut days = PartialWeek::default();
    let mut matched = false;

    for (index, key) in DAY_KEYS.iter().enumerate() {
        let entry = map.get(*key).or_else(|| map.get(&capitalize(key)));
        if let Some(day) = entry.and_then(|e| decode_day_entry(e, &["slots"])) {
            days[index] = Some(day);
            matched = true;
        }
    }

    matched.then_some(days)
}

fn decode_week_list(value: &Value) -> Option<PartialWeek> {
    let list = value.as_array()?;
    let mut days = PartialWeek::default();
    let mut matched = false;

    for entry in list {
        let Some(name) = entry.get("day").and_then(Value::as_str) else {
            continue;
        };
        let Some(weekday) = weekday_from_name(name) else {
            continue;
        };
        if let Some(day) = decode_day_entry(entry, &["ranges", "slots"]) {
            days[weekday_index(weekday)] = Some(day);
            matched = true;
        }
    }

    matched.then_some(days)
}

fn decode_day_entry(value: &Value, slot_keys: &[&str]) -> Option<DaySchedule> {
    let map = value.as_object()?;
    let enabled = map.get("enabled").and_then(Value::as_bool).unwrap_or(false);
    let slots = slot_keys
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_array))
        .map(|entries| entries.iter().filter_map(decode_slot).collect())
        .unwrap_or_default();
    Some(DaySchedule { enabled, slots })
}

/// A slot is either `{"from": "11:00", "to": "21:00"}` or `["11:00", "21:00"]`.
fn decode_slot(value: &Value) -> Option<TimeInterval> {
    let (from, to) = match value {
        Value::Object(map) => (
            map.get("from").and_then(Value::as_str)?,
            map.get("to").and_then(Value::as_str)?,
        ),
        Value::Array(pair) => (pair.first()?.as_str()?, pair.get(1)?.as_str()?),
        _ => return None,
    };
    Some(TimeInterval::new(from.parse().ok()?, to.parse().ok()?))
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
