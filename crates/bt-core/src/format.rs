//! Duration and clock time rendering.

use crate::clock::SECONDS_PER_DAY;

/// Formats seconds as `"{h}h {m}m {s}s"`.
///
/// Negative durations are shown as `0h 0m 0s`. Hours are not padded and do
/// not roll over into days.
pub fn format_duration(total_secs: i64) -> String {
    let secs = total_secs.max(0);
    let hours = secs / 3600;
    let minutes = secs % 3600 / 60;
    let seconds = secs % 60;

    format!("{hours}h {minutes}m {seconds}s")
}

/// Formats seconds since midnight as a 12-hour `HH:MM:SS AM|PM` clock time.
///
/// Values outside a single day wrap around, including negative ones.
pub fn format_clock_time(total_secs: i64) -> String {
    let secs = total_secs.rem_euclid(SECONDS_PER_DAY);
    let h24 = secs / 3600;
    let minutes = secs % 3600 / 60;
    let seconds = secs % 60;

    let meridiem = if h24 >= 12 { "PM" } else { "AM" };
    let h12 = match h24 % 12 {
        0 => 12,
        h => h,
    };

    format!("{h12:02}:{minutes:02}:{seconds:02} {meridiem}")
}
