use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bt_cli::commands::{calc, targets};
use bt_cli::{Cli, Commands, Config};

/// Load config, reporting which file was requested on failure.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match &cli.command {
        Some(Commands::Calc {
            file,
            work_type,
            at,
            skip_malformed,
            json,
        }) => {
            let config = load_config(cli.config.as_deref())?;

            let now = at
                .as_deref()
                .map(|at| {
                    bt_core::parse_clock_time(at).with_context(|| {
                        format!("invalid --at time: {at} (expected HH:MM:SS AM|PM)")
                    })
                })
                .transpose()?;

            let mut calculator = config.calculator();
            if *skip_malformed {
                calculator.on_malformed = bt_core::MalformedPolicy::Skip;
            }

            let options = calc::CalcOptions {
                work_type: work_type.unwrap_or(config.work_type),
                now,
                calculator,
                json: *json,
            };

            let input = calc::read_input(file.as_deref())?;
            calc::run(&mut io::stdout().lock(), &input, &options)?;
        }
        Some(Commands::Targets { json }) => {
            let config = load_config(cli.config.as_deref())?;
            targets::run(&mut io::stdout().lock(), config.work_type, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
