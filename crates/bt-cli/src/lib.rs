//! Break time calculator CLI library.
//!
//! This crate provides the CLI interface for the break time calculator.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
