//! # Sim Command
//!
//! Unattended rounds: the human seat calls every time and the enemy policy
//! acts without a think delay. Useful for checking a policy's edge and for
//! producing round logs.

use std::io::Write;
use std::path::PathBuf;

use maskcard_engine::game::TurnState;
use maskcard_engine::player::Actor;

use super::table::{EventFeed, build_engine};
use crate::cli::PolicyKind;
use crate::config;
use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub rounds: u32,
    pub seed: Option<u64>,
    pub policy: Option<PolicyKind>,
    pub log: Option<PathBuf>,
    pub verbose: bool,
}

pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let resolved =
        config::load_with_sources()?.with_flags(opts.seed, opts.policy.map(|p| p.as_str()));
    let mut engine = build_engine(resolved.config, true)?;
    let mut feed = EventFeed::attach(&mut engine, opts.log.as_deref())?;

    engine.start_round()?;
    while feed.tally.settled < opts.rounds && !engine.is_game_over() {
        match engine.turn() {
            TurnState::Dealing => engine.start_betting_phase()?,
            TurnState::EnemyTurn => {
                engine.run_enemy_turn()?;
            }
            TurnState::PlayerTurn => engine.call(Actor::Player)?,
            TurnState::Settlement => break,
        }
        feed.drain(out, err, opts.verbose)?;
    }
    feed.drain(out, err, opts.verbose)?;

    let t = feed.tally;
    writeln!(
        out,
        "sim: seed={} policy={} rounds={}",
        engine.seed(),
        engine.policy_name(),
        t.settled
    )?;
    writeln!(
        out,
        "Player wins: {} | Enemy wins: {} | Showdowns: {} | Folds: {}",
        t.player_wins, t.enemy_wins, t.showdowns, t.folds
    )?;
    writeln!(out, "Final chips: {}", engine.player().chips())?;
    if engine.is_game_over() {
        writeln!(out, "Stopped early: player is bust")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn sim(rounds: u32, seed: u64, policy: PolicyKind) -> String {
        let opts = SimOptions {
            rounds,
            seed: Some(seed),
            policy: Some(policy),
            log: None,
            verbose: false,
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());
        handle_sim_command(opts, &mut out, &mut err).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    #[serial]
    fn passive_sim_goes_to_showdown_every_round() {
        let out = sim(10, 8, PolicyKind::Passive);
        assert!(out.contains("policy=PassivePolicy rounds="));
        assert!(out.contains("Folds: 0"));
    }

    #[test]
    #[serial]
    fn same_seed_same_summary() {
        assert_eq!(
            sim(30, 1234, PolicyKind::Weighted),
            sim(30, 1234, PolicyKind::Weighted)
        );
    }

    #[test]
    #[serial]
    fn zero_rounds_is_rejected() {
        let opts = SimOptions {
            rounds: 0,
            seed: Some(1),
            policy: None,
            log: None,
            verbose: false,
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());
        assert!(matches!(
            handle_sim_command(opts, &mut out, &mut err),
            Err(CliError::InvalidInput(_))
        ));
    }
}
