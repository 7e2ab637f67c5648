mod support;

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use maskcard_engine::events::{Directive, EngineEvent};
use maskcard_engine::logger::{RoundLogger, RoundRecord, SettlementReason};
use maskcard_engine::player::{Actor, PlayerAction};
use maskcard_engine::policy::EnemyDecision;

use support::*;

#[test]
fn settled_rounds_are_written_as_jsonl() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("logs").join("rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");

    let mut eng = engine_with(20, &[EnemyDecision::Raise, EnemyDecision::Fold]);
    let settled: Rc<RefCell<Vec<RoundRecord>>> = Rc::default();
    let sink = Rc::clone(&settled);
    eng.subscribe(move |e| {
        if let EngineEvent::RoundSettled { record, .. } = e {
            sink.borrow_mut().push((**record).clone());
        }
        Directive::Continue
    });

    eng.start_round().unwrap();
    eng.start_betting_phase().unwrap();
    eng.run_enemy_turn().unwrap();
    eng.call(Actor::Player).unwrap();
    eng.start_betting_phase().unwrap();
    eng.run_enemy_turn().unwrap();

    for rec in settled.borrow().iter() {
        logger.write(rec).unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains('\r'));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let v: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    let id = v["round_id"].as_str().unwrap();
    assert_eq!(id.len(), 15);
    assert!(id.ends_with("-000001"));
    assert_eq!(v["winner"], "Player");
    assert!(v["ts"].as_str().is_some());

    let back: RoundRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(back.round, 1);
    assert_eq!(back.seed, Some(42));
    assert_eq!(back.reason, Some(SettlementReason::Fold));
    assert_eq!(back.pot, 4);
    assert_eq!(back.board.len(), 5);
    assert_eq!(back.contributed(), back.pot);
    let kinds: Vec<PlayerAction> = back.actions.iter().map(|a| a.action).collect();
    assert_eq!(
        kinds,
        vec![
            PlayerAction::ForcedBet,
            PlayerAction::ForcedBet,
            PlayerAction::Raise,
            PlayerAction::Call,
            PlayerAction::Fold
        ]
    );
}

#[test]
fn round_record_tracks_actions_in_progress() {
    let mut eng = engine_with(20, &[]);
    eng.start_round().unwrap();
    let rec = eng.round_record();
    assert_eq!(rec.round, 1);
    assert_eq!(rec.actions.len(), 2);
    assert_eq!(rec.winner, None);
    assert_eq!(rec.player_hole.len(), 2);
    assert_eq!(rec.contributed(), eng.pot());
}
