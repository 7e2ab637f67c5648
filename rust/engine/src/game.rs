use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::{Actor, Seat};

/// Betting phase of a round. Ordered; only a new round moves it backwards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Phase {
    /// Hole cards dealt, board hidden
    Preflop,
    /// Three community cards visible
    Flop,
    /// Fourth community card visible
    Turn,
    /// Fifth community card visible
    River,
    /// Hands compared; terminal for the round
    Showdown,
}

impl Phase {
    pub fn next(self) -> Phase {
        match self {
            Phase::Preflop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River | Phase::Showdown => Phase::Showdown,
        }
    }

    /// Number of community cards face up during this phase.
    pub fn visible_board(self) -> usize {
        match self {
            Phase::Preflop => 0,
            Phase::Flop => 3,
            Phase::Turn => 4,
            Phase::River | Phase::Showdown => 5,
        }
    }
}

/// Who the table is waiting on.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the card collaborator to finish revealing this phase
    Dealing,
    PlayerTurn,
    EnemyTurn,
    /// Round resolved, or frozen by a settlement lock
    Settlement,
}

impl TurnState {
    pub fn for_actor(actor: Actor) -> TurnState {
        match actor {
            Actor::Player => TurnState::PlayerTurn,
            Actor::Enemy => TurnState::EnemyTurn,
        }
    }

    pub fn actor(self) -> Option<Actor> {
        match self {
            TurnState::PlayerTurn => Some(Actor::Player),
            TurnState::EnemyTurn => Some(Actor::Enemy),
            TurnState::Dealing | TurnState::Settlement => None,
        }
    }
}

/// The nine cards of one round: two hole cards per side and five board cards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct DealtCards {
    pub player: [Card; 2],
    pub enemy: [Card; 2],
    pub board: [Card; 5],
}

impl DealtCards {
    pub fn hole(&self, actor: Actor) -> [Card; 2] {
        match actor {
            Actor::Player => self.player,
            Actor::Enemy => self.enemy,
        }
    }

    /// Hole cards plus the full board.
    pub fn pool(&self, actor: Actor) -> [Card; 7] {
        let [a, b] = self.hole(actor);
        let [c, d, e, f, g] = self.board;
        [a, b, c, d, e, f, g]
    }
}

/// Read-only view of the table for display collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub round: u32,
    pub phase: Phase,
    pub turn: TurnState,
    pub pot: i64,
    pub global_stake: i64,
    pub player: Seat,
    pub enemy: Seat,
    pub is_all_in: bool,
    pub settlement_locked: bool,
    pub enemy_thinking: bool,
    pub game_over: bool,
    pub visible_board: Vec<Card>,
    pub player_hole: Option<[Card; 2]>,
}
