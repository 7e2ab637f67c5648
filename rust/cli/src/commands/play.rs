//! # Play Command
//!
//! Interactive MaskCard against the enemy policy.
//!
//! The human seat types commands on stdin; the enemy "thinks" for the
//! configured window before each of its actions. Entering `q` (or closing
//! stdin) ends the session after the current prompt.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use maskcard_engine::config::Ability;
use maskcard_engine::engine::BettingEngine;
use maskcard_engine::game::TurnState;
use maskcard_engine::player::Actor;

use super::table::{EventFeed, build_engine};
use crate::cli::PolicyKind;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_card, format_decision, format_snapshot};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, PlayerCommand, parse_player_action};

#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
    pub policy: Option<PolicyKind>,
    pub log: Option<PathBuf>,
    pub instant: bool,
}

/// Handle the play command: interactive rounds until the player quits,
/// goes bust, or `rounds` rounds have been settled.
///
/// # Examples
///
/// ```
/// use maskcard_cli::commands::{PlayOptions, handle_play_command};
/// use std::io::Cursor;
///
/// let opts = PlayOptions { rounds: Some(1), seed: Some(7), instant: true, ..Default::default() };
/// let mut input = Cursor::new(&b"f\n"[..]);
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// handle_play_command(opts, &mut out, &mut err, &mut input).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Rounds played: 1"));
/// ```
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved =
        config::load_with_sources()?.with_flags(opts.seed, opts.policy.map(|p| p.as_str()));
    let mut engine = build_engine(resolved.config, opts.instant)?;
    let mut feed = EventFeed::attach(&mut engine, opts.log.as_deref())?;

    writeln!(
        out,
        "play: seed={} policy={} chips={}",
        engine.seed(),
        engine.policy_name(),
        engine.player().chips()
    )?;

    let runtime = if opts.instant {
        None
    } else {
        Some(
            tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?,
        )
    };

    engine.start_round()?;
    feed.drain(out, err, true)?;

    let mut quit_requested = false;
    loop {
        if engine.is_game_over() {
            break;
        }
        if let Some(limit) = opts.rounds
            && feed.tally.settled >= limit
        {
            break;
        }
        match engine.turn() {
            TurnState::Dealing => engine.start_betting_phase()?,
            TurnState::EnemyTurn => {
                let Some(ticket) = engine.begin_enemy_think() else {
                    tracing::warn!(turn = ?engine.turn(), "enemy could not start thinking");
                    break;
                };
                if let Some(rt) = &runtime {
                    rt.block_on(tokio::time::sleep(ticket.delay()));
                }
                if let Some(decision) = engine.finish_enemy_think(ticket)? {
                    writeln!(out, "Enemy: {}", format_decision(decision))?;
                }
            }
            TurnState::PlayerTurn => {
                if !player_turn(&mut engine, out, err, stdin)? {
                    quit_requested = true;
                    break;
                }
            }
            // only reachable when an observer locked settlement
            TurnState::Settlement => break,
        }
        feed.drain(out, err, true)?;
    }
    feed.drain(out, err, true)?;

    let t = feed.tally;
    writeln!(
        out,
        "Rounds played: {} (won {}, lost {}){}",
        t.settled,
        t.player_wins,
        t.enemy_wins,
        if quit_requested { " - quit" } else { "" }
    )?;
    // a settlement immediately deals the next round, so its forced bet is already posted
    writeln!(
        out,
        "Final chips: {} ({} committed to the open round)",
        engine.player().chips(),
        engine.player().committed_this_round()
    )?;
    Ok(())
}

/// Prompts until one command went through. Returns `false` when the player quit.
fn player_turn(
    engine: &mut BettingEngine,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    let snap = engine.snapshot();
    writeln!(out, "{}", format_snapshot(&snap))?;
    if let Some(hole) = snap.player_hole {
        writeln!(
            out,
            "Your cards: {}  Board: {}",
            format_board(&hole),
            format_board(&snap.visible_board)
        )?;
    }

    loop {
        write!(out, "Enter action (raise/call/fold/peek/q): ")?;
        out.flush()?;

        let Some(input) = read_stdin_line(stdin) else {
            return Ok(false);
        };
        let command = match parse_player_action(&input) {
            ParseResult::Action(command) => command,
            ParseResult::Quit => return Ok(false),
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };
        let result = match command {
            PlayerCommand::Raise => engine.raise(Actor::Player),
            PlayerCommand::Call => engine.call(Actor::Player),
            PlayerCommand::Fold => engine.fold(Actor::Player),
            PlayerCommand::Peek => {
                peek(engine, out, err)?;
                continue;
            }
        };
        match result {
            Ok(()) => return Ok(true),
            // rejected actions leave the table untouched; ask again
            Err(e) => ui::write_error(err, &format!("Invalid action: {}", e))?,
        }
    }
}

fn peek(engine: &mut BettingEngine, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let Some(hole) = engine.cards().map(|c| c.enemy) else {
        ui::write_error(err, "Nothing to peek at")?;
        return Ok(());
    };
    let cost = engine.config().abilities.cost(Ability::Peek);
    if engine.try_use_ability(Ability::Peek) {
        writeln!(
            out,
            "Peek ({} chips): enemy holds {}",
            cost,
            format_card(&hole[0])
        )?;
    } else {
        ui::write_error(
            err,
            &format!("Peek costs {} chips, you have {}", cost, engine.player().chips()),
        )?;
    }
    Ok(())
}
