#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Mutex;

use maskcard_engine::cards::Card;
use maskcard_engine::config::{TableConfig, ThinkTime};
use maskcard_engine::engine::BettingEngine;
use maskcard_engine::events::{Directive, EngineEvent};
use maskcard_engine::game::DealtCards;
use maskcard_engine::hand::HandEvaluator;
use maskcard_engine::policy::{DecisionPolicy, EnemyDecision};
use rand::RngCore;

/// Plays back queued decisions, then calls forever.
#[derive(Default)]
pub struct Scripted(Mutex<VecDeque<EnemyDecision>>);

impl Scripted {
    pub fn new(decisions: &[EnemyDecision]) -> Self {
        Self(Mutex::new(decisions.iter().copied().collect()))
    }
}

impl DecisionPolicy for Scripted {
    fn decide(&self, _visible: &[Card], _rng: &mut dyn RngCore) -> EnemyDecision {
        self.0
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or(EnemyDecision::Call)
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

pub fn config(initial_chips: i64) -> TableConfig {
    TableConfig {
        initial_chips,
        seed: Some(42),
        think_time: ThinkTime::instant(),
        ..TableConfig::default()
    }
}

pub fn engine_with(initial_chips: i64, decisions: &[EnemyDecision]) -> BettingEngine {
    BettingEngine::new(
        config(initial_chips),
        HandEvaluator::new(),
        Box::new(Scripted::new(decisions)),
    )
    .expect("valid config")
}

pub fn cards(notation: &[&str]) -> Vec<Card> {
    notation
        .iter()
        .map(|s| s.parse::<Card>().expect("card"))
        .collect()
}

pub fn deal(player: [&str; 2], enemy: [&str; 2], board: [&str; 5]) -> DealtCards {
    let p = |s: &str| s.parse::<Card>().expect("card");
    DealtCards {
        player: player.map(p),
        enemy: enemy.map(p),
        board: board.map(p),
    }
}

/// Records every event the engine fires.
pub fn record_events(engine: &mut BettingEngine) -> Rc<RefCell<Vec<EngineEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    engine.subscribe(move |e| {
        sink.borrow_mut().push(e.clone());
        Directive::Continue
    });
    log
}

pub fn assert_pot_invariant(engine: &BettingEngine) {
    assert_eq!(
        engine.pot(),
        engine.player().committed_this_round() + engine.enemy().committed_this_round(),
        "pot must equal both seats' commitments"
    );
}

/// Opens betting and lets both sides check through the current phase.
pub fn check_through_phase(engine: &mut BettingEngine) {
    use maskcard_engine::player::Actor;
    engine.start_betting_phase().expect("open betting");
    engine.run_enemy_turn().expect("enemy acts");
    assert_pot_invariant(engine);
    engine.call(Actor::Player).expect("player checks");
    assert_pot_invariant(engine);
}
