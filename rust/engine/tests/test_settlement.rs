mod support;

use std::cell::RefCell;
use std::rc::Rc;

use maskcard_engine::config::Ability;
use maskcard_engine::errors::GameError;
use maskcard_engine::events::{Directive, EngineEvent};
use maskcard_engine::game::TurnState;
use maskcard_engine::logger::SettlementReason;
use maskcard_engine::player::Actor;
use maskcard_engine::policy::EnemyDecision;

use support::*;

const ENEMY_WINS: ([&str; 2], [&str; 2], [&str; 5]) = (
    ["2c", "7d"],
    ["As", "Ah"],
    ["Kd", "9s", "5h", "3c", "Jd"],
);

#[test]
fn fold_lock_freezes_round_until_manual_settlement() {
    let mut eng = engine_with(20, &[]);
    eng.subscribe(|e| match e {
        EngineEvent::Fold { .. } => Directive::LockSettlement,
        _ => Directive::Continue,
    });
    let events = record_events(&mut eng);
    eng.start_round().unwrap();
    eng.start_betting_phase().unwrap();
    eng.run_enemy_turn().unwrap();
    eng.fold(Actor::Player).unwrap();

    assert!(eng.is_settlement_locked());
    assert_eq!(eng.turn(), TurnState::Settlement);
    assert_eq!(eng.pot(), 2);
    assert_eq!(eng.round(), 1);
    assert_eq!(eng.call(Actor::Player), Err(GameError::SettlementLocked));
    assert_eq!(eng.start_betting_phase(), Err(GameError::SettlementLocked));
    assert_eq!(eng.skip_phase(), Err(GameError::SettlementLocked));
    assert!(!events
        .borrow()
        .iter()
        .any(|e| matches!(e, EngineEvent::RoundSettled { .. })));

    // the rule decided the folding player wins after all
    eng.player_wins().unwrap();
    assert!(!eng.is_settlement_locked());
    assert_eq!(eng.round(), 2);
    assert_eq!(eng.player().chips(), 20);
    let manual = events.borrow().iter().any(|e| {
        matches!(e, EngineEvent::RoundSettled { winner: Actor::Player, record, .. }
            if record.reason == Some(SettlementReason::Manual))
    });
    assert!(manual);
}

#[test]
fn lock_on_settled_round_holds_restart_without_resettling() {
    let mut eng = engine_with(20, &[EnemyDecision::Fold]);
    let settlements = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&settlements);
    eng.subscribe(move |e| match e {
        EngineEvent::RoundSettled { winner, pot, record } => {
            seen.borrow_mut().push((record.round, *winner, *pot));
            Directive::LockSettlement
        }
        _ => Directive::Continue,
    });
    eng.start_round().unwrap();
    eng.start_betting_phase().unwrap();
    assert_eq!(eng.run_enemy_turn().unwrap(), Some(EnemyDecision::Fold));

    assert!(eng.is_settlement_locked());
    assert_eq!(eng.round(), 1);
    assert_eq!(eng.pot(), 0);
    assert_eq!(eng.player().chips(), 21);

    eng.enemy_wins().unwrap();
    assert_eq!(*settlements.borrow(), vec![(1, Actor::Player, 2)]);
    assert!(!eng.is_settlement_locked());
    assert_eq!(eng.round(), 2);
    // round 1's award stands; round 2 has posted its forced bet
    assert_eq!(eng.player().chips(), 20);
    assert_eq!(eng.enemy().chips(), -2);
    assert_pot_invariant(&eng);
}

#[test]
fn explicit_lock_blocks_enemy_think() {
    let mut eng = engine_with(20, &[]);
    eng.start_round().unwrap();
    eng.start_betting_phase().unwrap();
    eng.lock_settlement();
    assert!(eng.begin_enemy_think().is_none());
    eng.enemy_wins().unwrap();
    assert_eq!(eng.enemy().chips(), 0);
    assert_eq!(eng.turn(), TurnState::Dealing);
}

#[test]
fn last_stand_then_game_over() {
    let mut eng = engine_with(1, &[]);
    let events = record_events(&mut eng);

    eng.start_round().unwrap();
    let (p, e, b) = ENEMY_WINS;
    eng.replace_cards(deal(p, e, b)).unwrap();
    // already all-in, so one skip reaches the showdown
    eng.skip_phase().unwrap();
    // lost everything: exactly zero is not game over
    assert_eq!(eng.round(), 2);
    assert!(!eng.is_game_over());
    assert_eq!(eng.player().chips(), -1);
    assert!(eng.is_all_in());
    let board = eng.cards().unwrap().board;
    assert!(events
        .borrow()
        .contains(&EngineEvent::ChipsNegative { chips: -1, board }));

    eng.replace_cards(deal(p, e, b)).unwrap();
    eng.skip_phase().unwrap();
    assert!(eng.is_game_over());
    assert!(events.borrow().contains(&EngineEvent::GameOver { chips: -1 }));
    assert_eq!(eng.start_round(), Err(GameError::GameOver));
    assert_eq!(eng.skip_phase(), Err(GameError::GameOver));
    assert_eq!(eng.pot(), 0);

    eng.reset_game().unwrap();
    assert!(!eng.is_game_over());
    assert_eq!(eng.round(), 1);
    assert_eq!(eng.player().chips(), 0);
}

#[test]
fn last_stand_win_recovers() {
    let mut eng = engine_with(1, &[]);
    eng.start_round().unwrap();
    let (p, e, b) = ENEMY_WINS;
    eng.replace_cards(deal(p, e, b)).unwrap();
    eng.skip_phase().unwrap();
    assert_eq!(eng.player().chips(), -1);

    // the player holds the aces this time
    eng.replace_cards(deal(e, p, b)).unwrap();
    eng.skip_phase().unwrap();
    assert!(!eng.is_game_over());
    // -1 + pot of 2, then the next forced bet
    assert_eq!(eng.player().chips(), 0);
}

#[test]
fn abilities_spend_configured_costs() {
    let mut eng = engine_with(20, &[]);
    eng.start_round().unwrap();
    assert!(eng.try_use_ability(Ability::Swap));
    assert_eq!(eng.player().chips(), 16);
    assert!(eng.try_use_ability(Ability::Peek));
    assert_eq!(eng.player().chips(), 14);
    assert!(!eng.try_spend_chips(15));
    assert!(!eng.try_spend_chips(-1));
    assert!(eng.try_spend_chips(14));
    assert_eq!(eng.player().chips(), 0);
    assert!(!eng.try_use_ability(Ability::Burn));
    assert_pot_invariant(&eng);
}

#[test]
fn replace_cards_rejected_before_deal() {
    let mut eng = engine_with(20, &[]);
    let (p, e, b) = ENEMY_WINS;
    assert_eq!(eng.replace_cards(deal(p, e, b)), Err(GameError::RoundNotDealt));
}
