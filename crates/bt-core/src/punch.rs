//! Punch kinds and parsing of raw punch-log lines.
//!
//! A punch log is plain text with one punch per line:
//!
//! ```text
//! 08:40:01 AM	In
//! 10:38:43 AM	Out
//! 10:43:02 AM	In
//! ```
//!
//! The clock time and the punch kind are separated by a single tab.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Direction of a punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PunchKind {
    In,
    Out,
}

impl PunchKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::In => "In",
            Self::Out => "Out",
        }
    }
}

impl fmt::Display for PunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PunchKind {
    type Err = UnknownPunchKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("in") {
            Ok(Self::In)
        } else if s.eq_ignore_ascii_case("out") {
            Ok(Self::Out)
        } else {
            Err(UnknownPunchKind(s.to_string()))
        }
    }
}

/// Error type for unknown punch kind strings.
#[derive(Debug, Clone)]
pub struct UnknownPunchKind(String);

impl fmt::Display for UnknownPunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown punch kind: {}", self.0)
    }
}

impl std::error::Error for UnknownPunchKind {}

/// Errors raised while turning punch-log text into events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line is not `<time>\t<In|Out>`.
    #[error("line {line}: expected `<HH:MM:SS AM|PM><TAB><In|Out>`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    /// The time token is not a valid `HH:MM:SS AM|PM` clock time.
    #[error("line {line}: invalid timestamp {value:?}")]
    MalformedTimestamp { line: usize, value: String },
}

impl ParseError {
    /// The 1-based input line the error refers to.
    pub const fn line(&self) -> usize {
        match self {
            Self::MalformedLine { line, .. } | Self::MalformedTimestamp { line, .. } => *line,
        }
    }
}

/// A single parsed punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeEvent {
    /// Seconds since midnight.
    pub timestamp: i64,
    pub kind: PunchKind,
    /// 1-based line number in the source text.
    pub line: usize,
}

/// Parses a 12-hour `HH:MM:SS AM|PM` clock time into seconds since midnight.
///
/// Components must be unsigned integers but their magnitude is not checked,
/// so `13:75:00 PM` still yields a number. The meridiem is case-insensitive.
/// Returns `None` for anything that doesn't have that shape.
pub fn parse_clock_time(s: &str) -> Option<i64> {
    let mut tokens = s.split_whitespace();
    let (Some(time), Some(meridiem), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return None;
    };

    let mut parts = time.split(':');
    let (Some(h), Some(m), Some(sec), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let hours = i64::from(h.parse::<u32>().ok()?);
    let minutes = i64::from(m.parse::<u32>().ok()?);
    let seconds = i64::from(sec.parse::<u32>().ok()?);

    let hours = if meridiem.eq_ignore_ascii_case("AM") {
        if hours == 12 { 0 } else { hours }
    } else if meridiem.eq_ignore_ascii_case("PM") {
        if hours < 12 { hours + 12 } else { hours }
    } else {
        return None;
    };

    Some(hours * 3600 + minutes * 60 + seconds)
}

/// Parses one line of a punch log.
///
/// Blank lines yield `Ok(None)`.
pub fn parse_line(line: usize, raw: &str) -> Result<Option<TimeEvent>, ParseError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let malformed = || ParseError::MalformedLine {
        line,
        content: raw.to_string(),
    };

    let mut fields = raw.split('\t').map(str::trim);
    let (Some(time), Some(kind), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(malformed());
    };

    let kind: PunchKind = kind.parse().map_err(|_| malformed())?;
    let timestamp = parse_clock_time(time).ok_or_else(|| ParseError::MalformedTimestamp {
        line,
        value: time.to_string(),
    })?;

    Ok(Some(TimeEvent {
        timestamp,
        kind,
        line,
    }))
}

/// Parses a whole punch log, failing on the first malformed line.
///
/// Events keep their input order.
pub fn parse_log(text: &str) -> Result<Vec<TimeEvent>, ParseError> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| parse_line(idx + 1, raw).transpose())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_clock_time;

    #[test]
    fn midnight_noon_and_last_second() {
        assert_eq!(parse_clock_time("12:00:00 AM"), Some(0));
        assert_eq!(parse_clock_time("12:00:00 PM"), Some(43_200));
        assert_eq!(parse_clock_time("11:59:59 PM"), Some(86_399));
    }

    #[test]
    fn morning_hours_unchanged_and_afternoon_shifted() {
        assert_eq!(parse_clock_time("08:40:01 AM"), Some(31_201));
        assert_eq!(parse_clock_time("01:00:00 PM"), Some(46_800));
        assert_eq!(parse_clock_time("9:05:07 am"), Some(32_707));
    }

    #[test]
    fn clock_time_roundtrips_through_formatter() {
        for input in [
            "12:00:00 AM",
            "12:00:01 AM",
            "08:40:01 AM",
            "11:59:59 AM",
            "12:00:00 PM",
            "12:30:45 PM",
            "05:25:01 PM",
            "11:59:59 PM",
        ] {
            let secs = parse_clock_time(input).expect("should parse");
            assert_eq!(format_clock_time(secs), input, "roundtrip failed for {input}");
        }
    }

    #[test]
    fn out_of_range_components_are_not_rejected() {
        assert_eq!(parse_clock_time("13:75:00 PM"), Some(13 * 3600 + 75 * 60));
    }

    #[test]
    fn bad_clock_times_are_rejected() {
        assert_eq!(parse_clock_time("08:40 AM"), None);
        assert_eq!(parse_clock_time("08:40:01"), None);
        assert_eq!(parse_clock_time("08:4x:01 AM"), None);
        assert_eq!(parse_clock_time("-1:00:00 AM"), None);
        assert_eq!(parse_clock_time("08:40:01 XM"), None);
        assert_eq!(parse_clock_time("08:40:01:00 AM"), None);
        assert_eq!(parse_clock_time("08:40:01 AM extra"), None);
    }

    #[test]
    fn punch_kind_is_case_insensitive() {
        assert_eq!("in".parse::<PunchKind>().unwrap(), PunchKind::In);
        assert_eq!("OUT".parse::<PunchKind>().unwrap(), PunchKind::Out);
        assert_eq!("Out".parse::<PunchKind>().unwrap(), PunchKind::Out);

        let err = "lunch".parse::<PunchKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown punch kind: lunch");
    }

    #[test]
    fn parse_line_trims_fields() {
        let event = parse_line(3, "  10:38:43 AM \t Out \r").unwrap().unwrap();
        assert_eq!(
            event,
            TimeEvent {
                timestamp: 38_323,
                kind: PunchKind::Out,
                line: 3,
            }
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(1, " \t ").unwrap(), None);
    }

    #[test]
    fn missing_tab_is_a_malformed_line() {
        let err = parse_line(4, "08:40:01 AM In").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLine {
                line: 4,
                content: "08:40:01 AM In".to_string(),
            }
        );
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn extra_field_is_a_malformed_line() {
        let err = parse_line(1, "08:40:01 AM\tIn\tlate").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn unknown_kind_is_a_malformed_line() {
        let err = parse_line(2, "08:40:01 AM\tLunch").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn bad_time_token_is_a_malformed_timestamp() {
        let err = parse_line(5, "08:xx:01 AM\tIn").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedTimestamp {
                line: 5,
                value: "08:xx:01 AM".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "line 5: invalid timestamp \"08:xx:01 AM\""
        );
    }

    #[test]
    fn parse_log_keeps_input_order_and_line_numbers() {
        let text = "10:43:02 AM\tIn\n\n08:40:01 AM\tIn\r\n10:38:43 AM\tOut\n";
        let events = parse_log(text).unwrap();

        let summary: Vec<_> = events.iter().map(|e| (e.line, e.kind)).collect();
        assert_eq!(
            summary,
            vec![(1, PunchKind::In), (3, PunchKind::In), (4, PunchKind::Out)]
        );
        assert_eq!(events[0].timestamp, 38_582);
    }

    #[test]
    fn parse_log_stops_at_first_malformed_line() {
        let text = "08:40:01 AM\tIn\nnonsense\n10:38:43 AM\tBreak";
        let err = parse_log(text).unwrap_err();
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn parse_log_of_blank_text_is_empty() {
        assert!(parse_log("").unwrap().is_empty());
        assert!(parse_log("   \n\n\t\n").unwrap().is_empty());
    }
}
