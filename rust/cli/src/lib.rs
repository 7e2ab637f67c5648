//! # MaskCard CLI Library
//!
//! Command-line front end for the MaskCard betting engine: a heads-up table
//! where the human seat plays against an automated enemy.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against the enemy on stdin
//! - `sim`: Run unattended rounds and report the result
//! - `eval`: Evaluate the best hand among some cards
//! - `cfg`: Display the resolved configuration and value sources

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, MaskcardCli};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["maskcard", "eval", "As", "Ks", "Qs", "Js", "10s"];
/// let code = maskcard_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match MaskcardCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };
    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Play {
            rounds,
            seed,
            policy,
            log,
            instant,
        } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            let opts = PlayOptions {
                rounds,
                seed,
                policy,
                log,
                instant,
            };
            handle_play_command(opts, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            rounds,
            seed,
            policy,
            log,
        } => {
            let opts = SimOptions {
                rounds,
                seed,
                policy,
                log,
                verbose: cli.verbose > 0,
            };
            handle_sim_command(opts, out, err)
        }
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let mut text = format!(
        "{}\nMaskCard CLI\nUsage: maskcard <command> [options]\n\nCommands:\n",
        e
    );
    for c in COMMANDS {
        text.push_str(&format!("  {}\n", c));
    }
    text.push_str("\nFor full help, run: maskcard --help");
    let _ = writeln!(err, "{}", text);
    exit_code::ERROR
}
