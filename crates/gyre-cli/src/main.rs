//! Gyre CLI entry point.
//!
//! Prints the path of the written diagram on success, so the output can be
//! piped into a viewer or another tool.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use gyre::GyreError;
use gyre_cli::{Args, error_adapter::to_reportable};

fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}

/// Renders `err` as a graphical miette report, falling back to its plain
/// message if the report cannot be formatted.
fn report(err: &GyreError) -> String {
    let mut writer = String::new();
    match miette::GraphicalReportHandler::new().render_report(&mut writer, &to_reportable(err)) {
        Ok(()) => writer,
        Err(_) => err.to_string(),
    }
}

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match gyre_cli::run(&args) {
        Ok(written) => {
            info!(output_file = written.display().to_string(); "Diagram written");
            println!("{}", written.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}
