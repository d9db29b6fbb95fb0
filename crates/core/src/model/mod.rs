pub mod schedule;
pub mod time;

pub use schedule::{
    weekday_from_name, weekday_index, DaySchedule, TimeInterval, WeeklySchedule, DAY_KEYS, WEEK,
};
pub use time::{TimeParseError, WallTime};
