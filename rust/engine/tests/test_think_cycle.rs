mod support;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use maskcard_engine::config::{TableConfig, ThinkTime};
use maskcard_engine::engine::BettingEngine;
use maskcard_engine::errors::GameError;
use maskcard_engine::events::{Directive, EngineEvent};
use maskcard_engine::game::{Phase, TurnState};
use maskcard_engine::hand::HandEvaluator;
use maskcard_engine::player::Actor;
use maskcard_engine::policy::EnemyDecision;

use support::*;

#[test]
fn pending_think_blocks_actions_and_reentry() {
    let mut eng = engine_with(20, &[]);
    eng.start_round().unwrap();
    eng.start_betting_phase().unwrap();

    let ticket = eng.begin_enemy_think().expect("enemy turn");
    assert!(eng.is_enemy_thinking());
    assert!(eng.begin_enemy_think().is_none());
    assert_eq!(eng.call(Actor::Player), Err(GameError::EnemyThinking));
    assert_eq!(eng.call(Actor::Enemy), Err(GameError::EnemyThinking));
    assert!(!eng.can_call());

    assert_eq!(eng.finish_enemy_think(ticket).unwrap(), Some(EnemyDecision::Call));
    assert!(!eng.is_enemy_thinking());
    assert_eq!(eng.turn(), TurnState::PlayerTurn);
}

#[test]
fn issuing_a_ticket_notifies_observers() {
    let mut eng = engine_with(20, &[]);
    eng.start_round().unwrap();
    eng.start_betting_phase().unwrap();
    let events = record_events(&mut eng);

    eng.begin_enemy_think().expect("enemy turn");
    assert_eq!(*events.borrow(), vec![EngineEvent::StateChanged]);
    assert!(eng.snapshot().enemy_thinking);
}

#[test]
fn lock_answered_to_think_notification_voids_the_ticket() {
    let mut eng = engine_with(20, &[]);
    let armed = Rc::new(Cell::new(false));
    let trigger = Rc::clone(&armed);
    eng.subscribe(move |e| {
        if trigger.get() && *e == EngineEvent::StateChanged {
            Directive::LockSettlement
        } else {
            Directive::Continue
        }
    });
    eng.start_round().unwrap();
    eng.start_betting_phase().unwrap();
    armed.set(true);

    assert!(eng.begin_enemy_think().is_none());
    assert!(!eng.is_enemy_thinking());
    assert!(eng.is_settlement_locked());
}

#[test]
fn skipped_phase_turns_ticket_stale() {
    let mut eng = engine_with(20, &[EnemyDecision::Raise]);
    eng.start_round().unwrap();
    eng.start_betting_phase().unwrap();
    let ticket = eng.begin_enemy_think().expect("enemy turn");

    eng.skip_phase().unwrap();
    assert_eq!(eng.phase(), Phase::Flop);
    assert!(!eng.is_enemy_thinking());

    let before = eng.snapshot();
    assert_eq!(eng.finish_enemy_think(ticket).unwrap(), None);
    assert_eq!(eng.snapshot(), before);
    assert_eq!(eng.turn(), TurnState::Dealing);
}

#[test]
fn ticket_from_previous_round_is_discarded() {
    let mut eng = engine_with(20, &[]);
    eng.start_round().unwrap();
    eng.start_betting_phase().unwrap();
    let old = eng.begin_enemy_think().expect("enemy turn");
    eng.start_round().unwrap();
    eng.start_betting_phase().unwrap();
    assert_eq!(eng.finish_enemy_think(old).unwrap(), None);
    assert_eq!(eng.turn(), TurnState::EnemyTurn);
    assert!(eng.run_enemy_turn().unwrap().is_some());
}

#[test]
fn only_one_enemy_raise_per_phase() {
    let mut eng = engine_with(20, &[EnemyDecision::Raise, EnemyDecision::Raise]);
    eng.start_round().unwrap();
    eng.start_betting_phase().unwrap();

    assert_eq!(eng.run_enemy_turn().unwrap(), Some(EnemyDecision::Raise));
    assert!(eng.enemy_raised_this_phase());
    eng.raise(Actor::Player).unwrap();
    assert_eq!(eng.global_stake(), 4);

    // second raise request degrades to a call and closes the phase
    assert_eq!(eng.run_enemy_turn().unwrap(), Some(EnemyDecision::Call));
    assert_eq!(eng.phase(), Phase::Flop);
    assert!(!eng.enemy_raised_this_phase());
    assert_pot_invariant(&eng);
}

#[test]
fn raise_request_while_all_in_becomes_call() {
    let mut eng = engine_with(1, &[EnemyDecision::Raise]);
    eng.start_round().unwrap();
    assert!(eng.is_all_in());
    eng.start_betting_phase().unwrap();
    assert_eq!(eng.run_enemy_turn().unwrap(), Some(EnemyDecision::Call));
}

#[test]
fn delay_is_drawn_inside_the_window() {
    let config = TableConfig {
        seed: Some(9),
        think_time: ThinkTime {
            min_ms: 300,
            max_ms: 400,
        },
        ..TableConfig::default()
    };
    let mut eng = BettingEngine::new(
        config,
        HandEvaluator::new(),
        Box::new(Scripted::default()),
    )
    .unwrap();
    for _ in 0..20 {
        eng.start_round().unwrap();
        eng.start_betting_phase().unwrap();
        let ticket = eng.begin_enemy_think().expect("enemy turn");
        assert!(ticket.delay() >= Duration::from_millis(300));
        assert!(ticket.delay() <= Duration::from_millis(400));
        eng.finish_enemy_think(ticket).unwrap();
    }
}

#[test]
fn no_think_outside_enemy_turn() {
    let mut eng = engine_with(20, &[]);
    assert!(eng.begin_enemy_think().is_none());
    eng.start_round().unwrap();
    assert!(eng.begin_enemy_think().is_none());
    assert_eq!(eng.run_enemy_turn().unwrap(), None);
}
