use std::fmt;

use serde::{Deserialize, Serialize};

/// The two sides of the table.
///
/// `Player` is the human seat, `Enemy` the automated opponent backed by the house.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Actor {
    Player,
    Enemy,
}

impl Actor {
    pub fn opponent(self) -> Actor {
        match self {
            Actor::Player => Actor::Enemy,
            Actor::Enemy => Actor::Player,
        }
    }

    pub fn is_player(self) -> bool {
        self == Actor::Player
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Player => f.write_str("player"),
            Actor::Enemy => f.write_str("enemy"),
        }
    }
}

/// Represents a betting action as recorded in round history.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Forced contribution posted at round start
    ForcedBet,
    /// Double the global stake
    Raise,
    /// Match the opponent's contribution (a free check when already level)
    Call,
    /// Forfeit the round
    Fold,
}

/// Default starting chips for the human seat
pub const STARTING_CHIPS: i64 = 20;

/// Chips and per-phase betting state of one seat.
///
/// For the human seat `chips` is the spendable stack; it only dips below
/// zero through a last-stand forced bet. For the enemy seat it is the
/// house ledger: it starts at zero, goes down as the enemy contributes and is
/// never checked for affordability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    chips: i64,
    contributed_this_phase: i64,
    committed_this_round: i64,
    acted_this_phase: bool,
}

impl Seat {
    pub fn new(chips: i64) -> Self {
        Self {
            chips,
            ..Self::default()
        }
    }

    pub fn chips(&self) -> i64 {
        self.chips
    }
    pub fn contributed_this_phase(&self) -> i64 {
        self.contributed_this_phase
    }
    pub fn committed_this_round(&self) -> i64 {
        self.committed_this_round
    }
    pub fn acted_this_phase(&self) -> bool {
        self.acted_this_phase
    }

    /// Moves `amount` from the stack into this phase's contribution.
    pub(crate) fn pay(&mut self, amount: i64) {
        self.chips -= amount;
        self.contributed_this_phase += amount;
        self.committed_this_round += amount;
    }

    pub(crate) fn add_chips(&mut self, amount: i64) {
        self.chips += amount;
    }

    pub(crate) fn mark_acted(&mut self) {
        self.acted_this_phase = true;
    }

    pub(crate) fn reset_phase(&mut self) {
        self.contributed_this_phase = 0;
        self.acted_this_phase = false;
    }

    pub(crate) fn reset_round(&mut self) {
        self.reset_phase();
        self.committed_this_round = 0;
    }
}
