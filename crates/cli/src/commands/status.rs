use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use hours_core::{decode, format_time, next_transition, Language, OpenStatus};

use super::read_schedule_input;
use crate::labels::labels;

/// Report open/closed state and the next transition
#[derive(Debug, Parser)]
pub struct StatusCommand {
    /// Stored schedule string; read from --file or stdin when omitted
    #[arg(value_name = "SCHEDULE")]
    pub schedule: Option<String>,

    /// Read the schedule string from a file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Evaluate at this time instead of now, e.g. 2026-08-25T12:00
    #[arg(long, value_name = "DATETIME")]
    pub at: Option<String>,

    /// Language tag for output (de, en, ar)
    #[arg(long, value_name = "TAG", default_value = "de")]
    pub lang: String,

    /// Emit a machine-readable JSON object
    #[arg(long)]
    pub json: bool,
}

impl StatusCommand {
    pub fn execute(&self) -> Result<i32> {
        let raw = read_schedule_input(self.schedule.as_deref(), self.file.as_deref())?;
        let schedule = decode(raw.as_deref());
        let now = match &self.at {
            Some(at) => parse_at(at)?,
            None => Local::now().naive_local(),
        };
        let status = next_transition(schedule.as_ref(), now);
        let language = Language::from_tag(&self.lang);

        if self.json {
            let payload = serde_json::json!({
                "is_open": status.is_open(),
                "closes_at": status.closes_at().map(format_instant),
                "next_open_at": status.next_open_at().map(format_instant),
            });
            println!("{payload}");
        } else {
            println!("{}", badge_line(&status, language));
        }

        Ok(if status.is_open() { 0 } else { 1 })
    }
}

fn format_instant(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M").to_string()
}

fn parse_at(raw: &str) -> Result<NaiveDateTime> {
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw.trim(), pattern) {
            return Ok(parsed);
        }
    }
    bail!("Unrecognized datetime '{raw}': expected YYYY-MM-DDTHH:MM[:SS]")
}

/// The one-line badge the public page shows, e.g.
/// `Jetzt geöffnet • schließt um 21:00`.
fn badge_line(status: &OpenStatus, language: Language) -> String {
    let l = labels(language);
    match status {
        OpenStatus::Open { closes_at } => format!(
            "{} • {} {}",
            l.open,
            l.closes_at,
            format_time(*closes_at, language)
        ),
        OpenStatus::Closed {
            next_open_at: Some(next),
        } => format!(
            "{} • {} {}",
            l.closed,
            l.opens_at,
            format_time(*next, language)
        ),
        OpenStatus::Closed { next_open_at: None } => l.closed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 26)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn parses_iso_datetimes_with_and_without_seconds() {
        assert_eq!(parse_at("2026-08-26T12:00").unwrap(), at(12, 0));
        assert_eq!(
            parse_at("2026-08-26T12:00:30").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 26)
                .unwrap()
                .and_hms_opt(12, 0, 30)
                .unwrap()
        );
        assert_eq!(parse_at("2026-08-26 09:30").unwrap(), at(9, 30));
        assert!(parse_at("yesterday").is_err());
    }

    #[test]
    fn badge_uses_localized_strings_and_clock_style() {
        let open = OpenStatus::Open { closes_at: at(21, 0) };
        assert_eq!(
            badge_line(&open, Language::De),
            "Jetzt geöffnet • schließt um 21:00"
        );
        assert_eq!(badge_line(&open, Language::En), "Open now • closes at 09:00 PM");

        let closed = OpenStatus::Closed {
            next_open_at: Some(at(11, 0)),
        };
        assert_eq!(
            badge_line(&closed, Language::De),
            "Geschlossen • öffnet um 11:00"
        );

        let dark = OpenStatus::Closed { next_open_at: None };
        assert_eq!(badge_line(&dark, Language::De), "Geschlossen");
    }
}
