//! Decoder and encoder for the compact token form
//!
//! This is the bounded-length legacy encoding (`d0=1@11:00-21:00;d1=0;...`)
//! used when the JSON form does not fit the storage column. Decoding is
//! permissive: tokens that fail the grammar are skipped, and when two tokens
//! address the same day (`d0=` vs `mo=`) the last one wins.

use std::collections::HashMap;

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use super::PartialWeek;
use crate::model::{DaySchedule, TimeInterval, WallTime, WeeklySchedule};

#[derive(Parser)]
#[grammar = "codec/grammar.pest"]
struct CompactParser;

lazy_static::lazy_static! {
    static ref NAMED_DAYS: HashMap<&'static str, usize> = HashMap::from([
        ("mo", 0),
        ("tu", 1),
        ("we", 2),
        ("th", 3),
        ("fr", 4),
        ("sa", 5),
        ("su", 6),
    ]);
}

/// Decode a compact schedule string. Returns `None` when no token matches.
pub(crate) fn decode_compact(input: &str) -> Option<PartialWeek> {
    let mut days = PartialWeek::default();
    let mut matched = false;

    for part in input.split(|c| c == ';' || c == '|') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match parse_token(part) {
            Some((index, day)) => {
                // last token wins on duplicate day aliases
                days[index] = Some(day);
                matched = true;
            }
            None => {
                tracing::debug!(token = part, "skipping unrecognized schedule token");
            }
        }
    }

    matched.then_some(days)
}

fn parse_token(part: &str) -> Option<(usize, DaySchedule)> {
    let mut pairs = CompactParser::parse(Rule::token, part).ok()?;
    let token = pairs.next()?;

    let mut index = None;
    let mut enabled = false;
    let mut slots = Vec::new();

    for inner in token.into_inner() {
        match inner.as_rule() {
            Rule::day => index = day_index(inner.as_str()),
            Rule::flag => enabled = inner.as_str() == "1",
            Rule::hours => {
                for interval in inner.into_inner() {
                    if let Some(slot) = parse_interval(interval) {
                        slots.push(slot);
                    }
                }
            }
            _ => {}
        }
    }

    Some((index?, DaySchedule { enabled, slots }))
}

fn day_index(token: &str) -> Option<usize> {
    let lowered = token.to_ascii_lowercase();
    if let Some(digit) = lowered.strip_prefix('d') {
        return digit.parse::<usize>().ok().filter(|i| *i < 7);
    }
    NAMED_DAYS.get(lowered.as_str()).copied()
}

/// The grammar vouches for the shape; out-of-range times still drop the
/// interval rather than the whole token.
fn parse_interval(pair: Pair<'_, Rule>) -> Option<TimeInterval> {
    let mut times = pair.into_inner();
    let from: WallTime = times.next()?.as_str().parse().ok()?;
    let to: WallTime = times.next()?.as_str().parse().ok()?;
    Some(TimeInterval::new(from, to))
}

/// Encode all seven days as compact tokens joined with `;`. Days are never
/// dropped and slot order is preserved.
pub fn encode_compact(schedule: &WeeklySchedule) -> String {
    let mut tokens = Vec::with_capacity(7);
    for (i, (_, day)) in schedule.days().enumerate() {
        let mut token = format!("d{}={}", i, if day.enabled { '1' } else { '0' });
        if !day.slots.is_empty() {
            token.push('@');
            let intervals: Vec<String> = day.slots.iter().map(ToString::to_string).collect();
            token.push_str(&intervals.join(","));
        }
        tokens.push(token);
    }
    tokens.join(";")
}
