//! # Felt CLI Library
//!
//! Command-line interface for the felt poker table. Exposes subcommands for
//! playing an interactive session, dealing a sample hand, and aggregating
//! hand-history statistics.
//!
//! The primary entry point is [`run`], which parses arguments and executes
//! the matching subcommand. Output streams and stdin are injected so the
//! whole surface is testable with in-memory buffers:
//!
//! ```no_run
//! use std::io;
//! let args = vec!["felt", "deal", "--seed", "42"];
//! let code = felt_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, FeltCli};
use commands::{handle_deal_command, handle_play_command, handle_stats_command};

pub use error::CliError;

/// Main entry point: parse arguments, dispatch, return the exit code
/// (0 success, 2 error). Help and version requests print to stdout and
/// succeed; parse failures print the command list to stderr.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "stats"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FeltCli::try_parse_from(&argv) {
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: felt <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: felt --help");
                    exit_code::ERROR
                }
            };
        }
        Ok(cli) => cli,
    };

    let result = match cli.cmd {
        Commands::Play {
            seed,
            strategy,
            save_path,
            history,
        } => {
            // stdin supports both a TTY and piped input
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(seed, strategy, save_path, history, out, err, &mut stdin_lock)
        }
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Stats { input } => handle_stats_command(input, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_command_succeeds() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(vec!["felt", "deal", "--seed", "42"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("seed=42"));
    }

    #[test]
    fn unknown_command_lists_the_menu() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(vec!["felt", "shove"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Commands:"));
        assert!(errors.contains("play"));
    }

    #[test]
    fn help_prints_to_stdout_and_succeeds() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(vec!["felt", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(!out.is_empty());
    }

    #[test]
    fn stats_on_missing_file_fails() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            vec!["felt", "stats", "--input", "nonexistent.jsonl"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::ERROR);
    }

    #[test]
    fn all_subcommands_parse() {
        for argv in [
            vec!["felt", "play"],
            vec!["felt", "play", "--seed", "1", "--strategy", "caller"],
            vec!["felt", "deal"],
            vec!["felt", "stats", "--input", "x.jsonl"],
        ] {
            assert!(cli::FeltCli::try_parse_from(&argv).is_ok(), "{:?}", argv);
        }
    }
}
