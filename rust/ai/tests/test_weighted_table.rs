use maskcard_ai::create_policy;
use maskcard_engine::config::{TableConfig, ThinkTime};
use maskcard_engine::engine::BettingEngine;
use maskcard_engine::game::{Phase, TurnState};
use maskcard_engine::hand::HandEvaluator;
use maskcard_engine::player::Actor;
use maskcard_engine::policy::EnemyDecision;

fn table(seed: u64) -> BettingEngine {
    let config = TableConfig {
        seed: Some(seed),
        think_time: ThinkTime::instant(),
        ..TableConfig::default()
    };
    let policy = create_policy("weighted").expect("weighted policy");
    BettingEngine::new(config, HandEvaluator::new(), policy).expect("engine")
}

/// Drives the human seat as a caller until `rounds` rounds were played or
/// the game ends. Returns every decision the enemy made.
fn play(engine: &mut BettingEngine, rounds: u32) -> Vec<EnemyDecision> {
    let mut decisions = Vec::new();
    engine.start_round().expect("first round");
    while engine.round() <= rounds && !engine.is_game_over() {
        match engine.turn() {
            TurnState::Dealing => engine.start_betting_phase().expect("open"),
            TurnState::EnemyTurn => {
                if let Some(d) = engine.run_enemy_turn().expect("enemy") {
                    decisions.push(d);
                }
            }
            TurnState::PlayerTurn => engine.call(Actor::Player).expect("call"),
            TurnState::Settlement => break,
        }
        assert_eq!(
            engine.pot(),
            engine.player().committed_this_round() + engine.enemy().committed_this_round()
        );
        assert_ne!(engine.phase(), Phase::Showdown);
    }
    decisions
}

#[test]
fn seeded_weighted_tables_replay_identically() {
    let mut a = table(77);
    let mut b = table(77);
    let da = play(&mut a, 25);
    let db = play(&mut b, 25);
    assert!(!da.is_empty());
    assert_eq!(da, db);
    assert_eq!(a.player().chips(), b.player().chips());
}

#[test]
fn weighted_enemy_never_raises_twice_in_a_phase() {
    let mut engine = table(3);
    engine.start_round().unwrap();
    for _ in 0..500 {
        if engine.is_game_over() {
            break;
        }
        match engine.turn() {
            TurnState::Dealing => engine.start_betting_phase().unwrap(),
            TurnState::EnemyTurn => {
                let raised_before = engine.enemy_raised_this_phase();
                let d = engine.run_enemy_turn().unwrap();
                if raised_before {
                    assert_ne!(d, Some(EnemyDecision::Raise));
                }
            }
            TurnState::PlayerTurn => {
                // re-raise when affordable to give the enemy a second chance
                if engine.can_raise() {
                    engine.raise(Actor::Player).unwrap();
                } else {
                    engine.call(Actor::Player).unwrap();
                }
            }
            TurnState::Settlement => break,
        }
    }
}

#[test]
fn unknown_policy_name_is_rejected() {
    assert!(create_policy("weighted").is_some());
    assert!(create_policy("Passive").is_some());
    assert!(create_policy("oracle").is_none());
}
