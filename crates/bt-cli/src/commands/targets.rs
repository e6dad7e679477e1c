//! Targets command listing each work type's daily targets.

use std::io::Write;

use anyhow::Result;
use bt_core::{WorkType, format_duration};
use serde::Serialize;

/// JSON entry for one work type.
#[derive(Debug, Serialize)]
pub struct TargetEntry {
    pub work_type: WorkType,
    pub label: &'static str,
    pub target_break_secs: i64,
    pub target_productive_secs: i64,
    pub over_limit_after_secs: i64,
}

impl From<WorkType> for TargetEntry {
    fn from(work_type: WorkType) -> Self {
        Self {
            work_type,
            label: work_type.label(),
            target_break_secs: work_type.target_break_secs(),
            target_productive_secs: work_type.target_productive_secs(),
            over_limit_after_secs: work_type.over_limit_threshold_secs(),
        }
    }
}

pub fn run<W: Write>(writer: &mut W, default: WorkType, json: bool) -> Result<()> {
    if json {
        let entries: Vec<TargetEntry> = WorkType::ALL.into_iter().map(Into::into).collect();
        writeln!(writer, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    writeln!(
        writer,
        "{:<10}{:<32}{:<12}{:<12}OVER LIMIT AFTER",
        "TYPE", "NAME", "BREAK", "PRODUCTIVE"
    )?;
    for work_type in WorkType::ALL {
        let marker = if work_type == default { " (default)" } else { "" };
        writeln!(
            writer,
            "{:<10}{:<32}{:<12}{:<12}{}{marker}",
            work_type.as_str(),
            work_type.label(),
            format_duration(work_type.target_break_secs()),
            format_duration(work_type.target_productive_secs()),
            format_duration(work_type.over_limit_threshold_secs()),
        )?;
    }

    Ok(())
}
