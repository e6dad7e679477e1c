//! Core logic for the break time calculator.
//!
//! This crate contains:
//! - Punch parsing: turning `HH:MM:SS AM|PM<TAB>In|Out` lines into events
//! - Calculation: break totals, productive time and expected exit per work type
//! - Formatting of durations and 12-hour clock times

mod calculator;
pub mod clock;
pub mod format;
pub mod punch;
pub mod work_type;

pub use calculator::{
    BreakInterval, CalculationResult, CalculatorConfig, MalformedPolicy, NOT_AVAILABLE,
    ReferenceTime, calculate, calculate_from_events, pair_breaks,
};
pub use clock::{Clock, ClockTime, FixedClock, SystemClock};
pub use format::{format_clock_time, format_duration};
pub use punch::{ParseError, PunchKind, TimeEvent, parse_clock_time, parse_line, parse_log};
pub use work_type::{OVER_LIMIT_MARGIN_SECS, UnknownWorkType, WorkType};
