//! Table setup and event feed shared by `play` and `sim`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use maskcard_ai::create_policy;
use maskcard_engine::config::ThinkTime;
use maskcard_engine::engine::BettingEngine;
use maskcard_engine::events::{Directive, EngineEvent};
use maskcard_engine::hand::HandEvaluator;
use maskcard_engine::logger::RoundLogger;
use maskcard_engine::player::Actor;

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_board, format_phase, format_showdown};
use crate::ui;

/// Builds the engine from a resolved configuration.
///
/// A missing seed is drawn here so it can be echoed to the user and
/// replayed later with `--seed`.
pub(crate) fn build_engine(mut config: Config, instant: bool) -> Result<BettingEngine, CliError> {
    if instant {
        config.table.think_time = ThinkTime::instant();
    }
    let seed = config.table.seed.unwrap_or_else(rand::random);
    config.table.seed = Some(seed);
    let policy = create_policy(&config.policy)
        .ok_or_else(|| CliError::Config(format!("Unknown policy '{}'", config.policy)))?;
    let engine = BettingEngine::new(config.table, HandEvaluator::new(), policy)?;
    tracing::info!(seed, policy = engine.policy_name(), "table ready");
    Ok(engine)
}

/// Per-session totals gathered from settled rounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tally {
    pub settled: u32,
    pub player_wins: u32,
    pub enemy_wins: u32,
    pub showdowns: u32,
    pub folds: u32,
}

/// Queues engine events as they fire so the command can report them (and
/// append settled rounds to the log) once the engine call has returned.
pub(crate) struct EventFeed {
    queue: Rc<RefCell<VecDeque<EngineEvent>>>,
    logger: Option<RoundLogger>,
    pub tally: Tally,
}

impl EventFeed {
    pub(crate) fn attach(engine: &mut BettingEngine, log: Option<&Path>) -> Result<Self, CliError> {
        let queue = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&queue);
        engine.subscribe(move |event: &EngineEvent| {
            if !matches!(event, EngineEvent::StateChanged) {
                sink.borrow_mut().push_back(event.clone());
            }
            Directive::Continue
        });
        let logger = match log {
            Some(path) => Some(RoundLogger::create(path)?),
            None => None,
        };
        Ok(Self {
            queue,
            logger,
            tally: Tally::default(),
        })
    }

    /// Drains queued events. With `verbose` set every event is narrated;
    /// otherwise only settlements and game over are.
    pub(crate) fn drain(
        &mut self,
        out: &mut dyn Write,
        err: &mut dyn Write,
        verbose: bool,
    ) -> Result<(), CliError> {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(event) = next else {
                return Ok(());
            };
            match event {
                EngineEvent::RoundSettled {
                    winner,
                    pot,
                    record,
                } => {
                    self.tally.settled += 1;
                    match winner {
                        Actor::Player => self.tally.player_wins += 1,
                        Actor::Enemy => self.tally.enemy_wins += 1,
                    }
                    if record.showdown.is_some() {
                        self.tally.showdowns += 1;
                    } else {
                        self.tally.folds += 1;
                    }
                    if verbose {
                        writeln!(
                            out,
                            "Round {}: {} wins pot {} | Board {}",
                            record.round,
                            winner,
                            pot,
                            format_board(&record.board)
                        )?;
                    }
                    if let Some(logger) = self.logger.as_mut() {
                        logger.write(&record)?;
                    }
                }
                EngineEvent::GameOver { chips } => {
                    writeln!(out, "Game over: player chips {}", chips)?;
                }
                EngineEvent::ChipsNegative { chips, board } => {
                    ui::display_warning(
                        err,
                        &format!("Last stand: forced bet left you at {} chips", chips),
                    )?;
                    writeln!(out, "Board revealed: {}", format_board(&board))?;
                }
                _ if !verbose => {}
                EngineEvent::RoundStarted { round } => writeln!(out, "Round {}", round)?,
                EngineEvent::PhaseChanged(phase) => {
                    writeln!(out, "--- {} ---", format_phase(phase))?
                }
                EngineEvent::AllIn { actor } => writeln!(out, "{} is all-in", actor)?,
                EngineEvent::Fold { player_folded } => {
                    let who = if player_folded { "player" } else { "enemy" };
                    writeln!(out, "{} folds", who)?;
                }
                EngineEvent::ShowdownResolved(outcome) => {
                    writeln!(out, "{}", format_showdown(&outcome))?
                }
                EngineEvent::JokerRevealed {
                    in_player_hand,
                    in_enemy_hand,
                    on_board,
                } => {
                    let place = if on_board {
                        "on the board"
                    } else if in_player_hand && in_enemy_hand {
                        "in both hands"
                    } else if in_player_hand {
                        "in your hand"
                    } else {
                        "in the enemy's hand"
                    };
                    writeln!(out, "A Joker shows up {}", place)?;
                }
                EngineEvent::StateChanged => {}
            }
        }
    }
}
