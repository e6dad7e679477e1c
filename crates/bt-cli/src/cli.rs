//! Command-line argument definitions.

use std::path::PathBuf;

use bt_core::WorkType;
use clap::{Parser, Subcommand};

/// Break time calculator.
///
/// Reads a day's In/Out punches and reports break time, productive hours
/// and the expected exit time.
#[derive(Debug, Parser)]
#[command(name = "bt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate break and productive time from a punch log.
    ///
    /// Each line is `HH:MM:SS AM|PM<TAB>In|Out`. The log is read from stdin
    /// unless --file is given.
    Calc {
        /// Read the punch log from this file.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Work type: full-day, hlop or qlop. Defaults to the configured one.
        #[arg(short, long)]
        work_type: Option<WorkType>,

        /// Use this time of day instead of the system clock (e.g. "05:30:00 PM").
        #[arg(long, value_name = "TIME")]
        at: Option<String>,

        /// Skip malformed lines instead of failing.
        #[arg(long)]
        skip_malformed: bool,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show break and productive targets for each work type.
    Targets {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
