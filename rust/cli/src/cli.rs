//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "maskcard", version, about = "MaskCard heads-up table")]
pub struct MaskcardCli {
    /// Log engine decisions to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against the enemy on stdin (r = raise, c = call, f = fold, p = peek, q = quit)
    Play {
        /// Stop after this many rounds
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        policy: Option<PolicyKind>,
        /// Append settled rounds to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
        /// Skip the enemy's think delay
        #[arg(long)]
        instant: bool,
    },
    /// Run unattended rounds with a calling player seat
    Sim {
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        policy: Option<PolicyKind>,
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Evaluate the best hand among the given cards (e.g. As Kd 10h 2c 2s)
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved table configuration and where each value came from
    Cfg,
}

/// Enemy policy selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    Weighted,
    Passive,
}

impl PolicyKind {
    /// Returns the factory name of the policy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use maskcard_cli::cli::PolicyKind;
    /// assert_eq!(PolicyKind::Weighted.as_str(), "weighted");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Weighted => "weighted",
            PolicyKind::Passive => "passive",
        }
    }
}
