//! Break and productive time calculation.
//!
//! # Algorithm Summary
//!
//! 1. Parse the punch log into events, keeping input order
//! 2. Every `Out` immediately followed by an `In` is a break; the gaps are summed
//! 3. Productive time runs from the first `In` to the reference time, minus breaks
//!
//! The reference time is the last punch when it is an `Out` (the day is over),
//! otherwise the current time of day from the injected [`Clock`].

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, ClockTime};
use crate::punch::{ParseError, PunchKind, TimeEvent, parse_line};
use crate::work_type::WorkType;

/// Shown in place of an expected exit time when there is no `In` punch.
pub const NOT_AVAILABLE: &str = "N/A";

/// What to do with lines that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole calculation on the first malformed line.
    #[default]
    Reject,
    /// Drop malformed lines and calculate with the rest.
    Skip,
}

/// Configuration for a calculation.
#[derive(Debug, Clone, Default)]
pub struct CalculatorConfig {
    pub on_malformed: MalformedPolicy,
}

/// Time productive hours are measured up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "seconds", rename_all = "snake_case")]
pub enum ReferenceTime {
    /// Last punch was an `Out`; measured up to that punch.
    SessionEnded(i64),
    /// Session still open; measured up to the clock reading.
    Ongoing(i64),
}

impl ReferenceTime {
    pub const fn seconds(self) -> i64 {
        match self {
            Self::SessionEnded(secs) | Self::Ongoing(secs) => secs,
        }
    }
}

/// A single `Out` → `In` break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakInterval {
    pub out_secs: i64,
    pub in_secs: i64,
    /// `in_secs - out_secs`. Negative when the `In` is earlier than the `Out`.
    pub duration_secs: i64,
}

/// Result of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub work_type: WorkType,
    pub target_break_secs: i64,
    pub target_productive_secs: i64,

    /// Parsed punches in input order.
    pub events: Vec<TimeEvent>,
    /// Line numbers dropped under [`MalformedPolicy::Skip`].
    pub skipped_lines: Vec<usize>,
    pub breaks: Vec<BreakInterval>,

    pub total_break_secs: i64,
    /// Seconds since midnight of the first `In` punch.
    pub first_in: Option<i64>,
    /// Break time still to take, never negative.
    pub remaining_break_secs: i64,
    pub is_break_time_sufficient: bool,
    pub is_over_limit: bool,
    /// `None` when there is no `In` punch.
    pub expected_exit: Option<ClockTime>,

    /// `None` when there is no `In` punch.
    pub reference: Option<ReferenceTime>,
    /// Productive time so far. Negative if the data is inconsistent.
    pub productive_secs: i64,
    pub time_left_for_target_secs: i64,
    pub is_productive_complete: bool,
}

impl CalculationResult {
    /// Break time taken beyond the target, never negative.
    pub fn exceeded_break_secs(&self) -> i64 {
        self.total_break_secs
            .saturating_sub(self.target_break_secs)
            .max(0)
    }

    /// Expected exit as a clock time, or [`NOT_AVAILABLE`].
    pub fn expected_exit_display(&self) -> String {
        self.expected_exit
            .map_or_else(|| NOT_AVAILABLE.to_string(), |exit| exit.to_string())
    }
}

/// Calculates break and productive time for a punch log.
///
/// # Arguments
///
/// * `text` - Punch log, one `HH:MM:SS AM|PM<TAB>In|Out` per line
/// * `work_type` - Target profile
/// * `clock` - Consulted only when the last punch is not an `Out`
/// * `config` - Calculation configuration
pub fn calculate<C: Clock + ?Sized>(
    text: &str,
    work_type: WorkType,
    clock: &C,
    config: &CalculatorConfig,
) -> Result<CalculationResult, ParseError> {
    let (events, skipped_lines) = collect_events(text, config.on_malformed)?;
    let mut result = calculate_from_events(events, work_type, clock);
    result.skipped_lines = skipped_lines;
    Ok(result)
}

/// Calculates break and productive time for already parsed punches.
pub fn calculate_from_events<C: Clock + ?Sized>(
    events: Vec<TimeEvent>,
    work_type: WorkType,
    clock: &C,
) -> CalculationResult {
    let target_break_secs = work_type.target_break_secs();
    let target_productive_secs = work_type.target_productive_secs();

    let breaks = pair_breaks(&events);
    // Timestamp components are unbounded, so sums saturate instead of overflowing.
    let total_break_secs = breaks
        .iter()
        .fold(0_i64, |total, b| total.saturating_add(b.duration_secs));
    let first_in = events
        .iter()
        .find(|e| e.kind == PunchKind::In)
        .map(|e| e.timestamp);

    tracing::debug!(
        events = events.len(),
        breaks = breaks.len(),
        total_break_secs,
        ?first_in,
        "paired breaks"
    );

    let expected_exit = first_in.map(|first_in| {
        ClockTime::from_seconds(
            first_in
                .saturating_add(target_productive_secs)
                .saturating_add(total_break_secs.max(target_break_secs)),
        )
    });

    let (reference, productive_secs) = match first_in {
        Some(first_in) => {
            let reference = reference_time(&events, clock);
            tracing::debug!(?reference, "measuring productive time");
            (
                Some(reference),
                reference
                    .seconds()
                    .saturating_sub(first_in)
                    .saturating_sub(total_break_secs),
            )
        }
        None => (None, 0),
    };

    let is_productive_complete = first_in.is_some() && productive_secs >= target_productive_secs;
    let time_left_for_target_secs = if is_productive_complete {
        0
    } else {
        target_productive_secs.saturating_sub(productive_secs)
    };

    CalculationResult {
        work_type,
        target_break_secs,
        target_productive_secs,
        events,
        skipped_lines: Vec::new(),
        breaks,
        total_break_secs,
        first_in,
        remaining_break_secs: target_break_secs.saturating_sub(total_break_secs).max(0),
        is_break_time_sufficient: total_break_secs >= target_break_secs,
        is_over_limit: total_break_secs > work_type.over_limit_threshold_secs(),
        expected_exit,
        reference,
        productive_secs,
        time_left_for_target_secs,
        is_productive_complete,
    }
}

/// Pairs every `Out` with an `In` directly after it.
///
/// Purely positional: repeated kinds elsewhere don't matter, and a negative
/// gap is kept as is.
pub fn pair_breaks(events: &[TimeEvent]) -> Vec<BreakInterval> {
    events
        .windows(2)
        .filter_map(|pair| match pair {
            [out, back] if out.kind == PunchKind::Out && back.kind == PunchKind::In => {
                Some(BreakInterval {
                    out_secs: out.timestamp,
                    in_secs: back.timestamp,
                    duration_secs: back.timestamp.saturating_sub(out.timestamp),
                })
            }
            _ => None,
        })
        .collect()
}

fn reference_time<C: Clock + ?Sized>(events: &[TimeEvent], clock: &C) -> ReferenceTime {
    match events.last() {
        Some(last) if last.kind == PunchKind::Out => ReferenceTime::SessionEnded(last.timestamp),
        _ => ReferenceTime::Ongoing(clock.seconds_since_midnight()),
    }
}

fn collect_events(
    text: &str,
    policy: MalformedPolicy,
) -> Result<(Vec<TimeEvent>, Vec<usize>), ParseError> {
    let mut events = Vec::new();
    let mut skipped = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        match parse_line(line, raw) {
            Ok(Some(event)) => events.push(event),
            Ok(None) => {}
            Err(err) => match policy {
                MalformedPolicy::Reject => return Err(err),
                MalformedPolicy::Skip => {
                    tracing::warn!(line, error = %err, "skipping malformed punch");
                    skipped.push(line);
                }
            },
        }
    }

    Ok((events, skipped))
}
