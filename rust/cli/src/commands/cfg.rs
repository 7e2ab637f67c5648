//! Configuration command handler.
//!
//! Prints the resolved table configuration as JSON, each key carrying its
//! value and where it came from (`default`, `file`, `env` or `flag`):
//!
//! ```json
//! {
//!   "initial_chips": {
//!     "value": 20,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    if resolved.config.table.seed.is_none() {
        ui::display_warning(err, "No seed configured; every run draws a fresh one")?;
    }

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "initial_chips": {
            "value": config.table.initial_chips,
            "source": sources.initial_chips,
        },
        "forced_bet": {
            "value": config.table.forced_bet,
            "source": sources.forced_bet,
        },
        "think_time": {
            "value": config.table.think_time,
            "source": sources.think_time,
        },
        "include_jokers": {
            "value": config.table.include_jokers,
            "source": sources.include_jokers,
        },
        "seed": {
            "value": config.table.seed,
            "source": sources.seed,
        },
        "abilities": {
            "value": config.table.abilities,
            "source": sources.abilities,
        },
        "policy": {
            "value": config.policy,
            "source": sources.policy,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
