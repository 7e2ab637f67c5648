//! Command handler modules for the MaskCard CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated via the `CliError` enum
//!
//! `play` and `sim` share the table setup and event feed in [`table`].

pub mod cfg;
pub mod eval;
pub mod play;
pub mod sim;
mod table;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};
pub use sim::{SimOptions, handle_sim_command};
