//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! parse/group/render pipeline.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tdist", version, about = "Bar charts of day/hour/month/weekday time distributions")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display one chart per category in an interactive terminal viewer.
    Show(InputArgs),
    /// Print the charts as plain text to stdout.
    Print(PrintArgs),
}

/// Where to read the time statistics from.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Input file (`Category:Label<TAB>Value` per line).
    ///
    /// Defaults to $TDIST_INPUT, then `output/TimeStatistic.txt`.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct PrintArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Rows used for the bars of each chart.
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u16).range(2..))]
    pub height: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_defaults() {
        let cli = Cli::parse_from(["tdist", "print"]);
        let Command::Print(args) = cli.command else {
            panic!("expected print");
        };
        assert_eq!(args.height, 12);
        assert!(args.input.input.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn show_accepts_input_and_global_verbose() {
        let cli = Cli::parse_from(["tdist", "show", "-i", "stats.txt", "-v"]);
        assert!(cli.verbose);
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.input, Some(PathBuf::from("stats.txt")));
    }

    #[test]
    fn height_below_two_is_rejected() {
        assert!(Cli::try_parse_from(["tdist", "print", "--height", "1"]).is_err());
    }
}
