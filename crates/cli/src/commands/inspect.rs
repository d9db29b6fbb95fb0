use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hours_core::{decode, DaySchedule, Language};

use super::read_schedule_input;
use crate::labels::labels;

/// Decode a stored schedule string and print the weekly table
#[derive(Debug, Parser)]
pub struct InspectCommand {
    /// Stored schedule string; read from --file or stdin when omitted
    #[arg(value_name = "SCHEDULE")]
    pub schedule: Option<String>,

    /// Read the schedule string from a file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Language tag for output (de, en, ar)
    #[arg(long, value_name = "TAG", default_value = "de")]
    pub lang: String,
}

impl InspectCommand {
    pub fn execute(&self) -> Result<i32> {
        let raw = read_schedule_input(self.schedule.as_deref(), self.file.as_deref())?;
        let language = Language::from_tag(&self.lang);
        let l = labels(language);

        let Some(schedule) = decode(raw.as_deref()) else {
            println!("{}", l.no_schedule);
            return Ok(1);
        };

        for (index, (_, day)) in schedule.days().enumerate() {
            println!("{:<12} {}", l.days[index], day_line(day, l.closed));
        }
        Ok(0)
    }
}

fn day_line(day: &DaySchedule, closed_label: &str) -> String {
    if day.is_effectively_closed() {
        return closed_label.to_string();
    }
    let slots: Vec<String> = day.slots.iter().map(ToString::to_string).collect();
    slots.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hours_core::{TimeInterval, WallTime};

    #[test]
    fn day_line_joins_slots_and_falls_back_to_closed() {
        let mut day = DaySchedule::open_default();
        day.slots.push(TimeInterval::new(
            WallTime::new(18, 0).unwrap(),
            WallTime::new(22, 0).unwrap(),
        ));
        assert_eq!(day_line(&day, "Closed"), "11:00-21:00, 18:00-22:00");

        assert_eq!(day_line(&DaySchedule::closed(), "Closed"), "Closed");

        let mut leftover = DaySchedule::closed();
        leftover.slots.push(TimeInterval::new(
            WallTime::new(9, 0).unwrap(),
            WallTime::new(18, 0).unwrap(),
        ));
        assert_eq!(day_line(&leftover, "Geschlossen"), "Geschlossen");
    }
}
