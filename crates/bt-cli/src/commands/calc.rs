//! Calc command: break and productive time for a punch log.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bt_core::{
    CalculationResult, CalculatorConfig, FixedClock, ReferenceTime, SystemClock, WorkType,
    calculate, format_clock_time, format_duration,
};

/// Width of the label column in human-readable output.
const LABEL_WIDTH: usize = 25;

/// Options for a single calculation.
#[derive(Debug, Clone, Default)]
pub struct CalcOptions {
    pub work_type: WorkType,
    /// Fixed time of day in seconds since midnight; `None` reads the system clock.
    pub now: Option<i64>,
    pub calculator: CalculatorConfig,
    pub json: bool,
}

/// Reads the punch log from a file, or from stdin when no path is given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read punch log from stdin")?;
            Ok(input)
        }
    }
}

pub fn run<W: Write>(writer: &mut W, input: &str, options: &CalcOptions) -> Result<()> {
    if input.trim().is_empty() {
        tracing::debug!("empty punch log, nothing to calculate");
        if options.json {
            writeln!(writer, "null")?;
        } else {
            writeln!(writer, "No results yet.")?;
            writeln!(
                writer,
                "Enter punches one per line as `HH:MM:SS AM<TAB>In` to calculate break time."
            )?;
        }
        return Ok(());
    }

    let result = match options.now {
        Some(now) => calculate(
            input,
            options.work_type,
            &FixedClock(now),
            &options.calculator,
        ),
        None => calculate(input, options.work_type, &SystemClock, &options.calculator),
    }
    .context("failed to calculate break time")?;

    if options.json {
        let json = serde_json::to_string_pretty(&result)?;
        writeln!(writer, "{json}")?;
    } else {
        render(writer, &result)?;
    }

    Ok(())
}

fn row<W: Write>(writer: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(writer, "{label:<LABEL_WIDTH$}{value}")
}

/// Hours label for a productive target, e.g. "8h".
fn target_hours(result: &CalculationResult) -> String {
    format!("{}h", result.target_productive_secs / 3600)
}

/// Writes the human-readable result.
pub fn render<W: Write>(writer: &mut W, result: &CalculationResult) -> io::Result<()> {
    row(writer, "Work type:", result.work_type.label())?;
    row(
        writer,
        "Break target:",
        &format_duration(result.target_break_secs),
    )?;
    row(
        writer,
        "Productive target:",
        &format_duration(result.target_productive_secs),
    )?;

    if !result.skipped_lines.is_empty() {
        let lines: Vec<String> = result.skipped_lines.iter().map(ToString::to_string).collect();
        row(writer, "Skipped lines:", &lines.join(", "))?;
    }

    writeln!(writer)?;
    if result.breaks.is_empty() {
        row(writer, "Breaks:", "none")?;
    } else {
        writeln!(writer, "Breaks:")?;
        for interval in &result.breaks {
            writeln!(
                writer,
                "  {} -> {}  {}",
                format_clock_time(interval.out_secs),
                format_clock_time(interval.in_secs),
                format_duration(interval.duration_secs)
            )?;
        }
    }
    writeln!(writer)?;

    let sufficiency = if result.is_break_time_sufficient {
        "target met"
    } else {
        "below target"
    };
    row(
        writer,
        "Total break time:",
        &format!("{} ({sufficiency})", format_duration(result.total_break_secs)),
    )?;

    if result.is_over_limit {
        row(
            writer,
            "Exceeded break time by:",
            &format_duration(result.exceeded_break_secs()),
        )?;
    } else {
        row(
            writer,
            "Remaining break time:",
            &format_duration(result.remaining_break_secs),
        )?;
    }

    row(writer, "Expected exit time:", &result.expected_exit_display())?;

    let productive = format_duration(result.productive_secs);
    let productive = match result.reference {
        Some(ReferenceTime::SessionEnded(secs)) => {
            format!("{productive} (session ended {})", format_clock_time(secs))
        }
        Some(ReferenceTime::Ongoing(secs)) => {
            format!("{productive} (as of {})", format_clock_time(secs))
        }
        None => productive,
    };
    row(writer, "Productive hours:", &productive)?;

    if result.is_productive_complete {
        row(
            writer,
            "Status:",
            &format!("{} completed", target_hours(result)),
        )?;
    } else {
        row(
            writer,
            &format!("Time left for {}:", target_hours(result)),
            &format_duration(result.time_left_for_target_secs),
        )?;
    }

    Ok(())
}
