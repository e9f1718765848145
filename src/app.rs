//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - resolves the input path
//! - runs the load/group/chart pipeline
//! - displays or prints the charts

use std::path::Path;

use clap::Parser;
use tracing::{info, warn};

use crate::cli::{Command, InputArgs, PrintArgs};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `tdist` binary.
pub fn run() -> Result<(), AppError> {
    // `tdist` with no subcommand shows the charts.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    crate::logging::init_logging(cli.verbose);

    match cli.command {
        Command::Show(args) => handle_show(args),
        Command::Print(args) => handle_print(args),
    }
}

fn handle_show(args: InputArgs) -> Result<(), AppError> {
    let path = crate::config::resolve_input_path(args.input);
    let run = pipeline::run_pipeline(&path)?;

    if run.charts.is_empty() {
        warn!(path = %run.input.display(), "no records found, nothing to display");
        println!("{}", no_records_message(&run.input));
        return Ok(());
    }

    info!(figures = run.charts.len(), "displaying charts");
    crate::tui::run(run.charts)
}

fn handle_print(args: PrintArgs) -> Result<(), AppError> {
    let path = crate::config::resolve_input_path(args.input.input);
    let run = pipeline::run_pipeline(&path)?;

    if run.charts.is_empty() {
        warn!(path = %run.input.display(), "no records found, nothing to print");
        println!("{}", no_records_message(&run.input));
        return Ok(());
    }

    print!(
        "{}",
        crate::plot::render_ascii_charts(&run.charts, usize::from(args.height))
    );
    Ok(())
}

/// Shown by both front-ends when the input holds no records.
fn no_records_message(input: &Path) -> String {
    format!("No records found in {}.", input.display())
}

/// Rewrite argv so `tdist` defaults to `tdist show`.
///
/// Rules:
/// - `tdist`                        -> `tdist show`
/// - `tdist -i FILE ...`            -> `tdist show -i FILE ...`
/// - `tdist --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("show".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "show" | "print");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "show flags".
    if arg1.starts_with('-') {
        argv.insert(1, "show".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
