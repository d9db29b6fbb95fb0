//! Weekly opening-hours engine for the dish menu platform
//!
//! Two halves: the codec maps the backend's bounded `hours` text column to
//! and from the [`WeeklySchedule`] model (JSON shapes plus the compact token
//! grammar), and the clock answers open/closed queries over that model,
//! including overnight windows that wrap past midnight. Both are pure and
//! total: decoding degrades to a safe fallback instead of erroring, and the
//! clock never panics on well-formed input.

pub mod clock;
pub mod codec;
pub mod model;

pub use clock::{format_time, is_open_at, next_transition, Language, OpenStatus};
pub use codec::{decode, decode_or_default, encode, encode_compact, MAX_JSON_LEN};
pub use model::{DaySchedule, TimeInterval, TimeParseError, WallTime, WeeklySchedule};
