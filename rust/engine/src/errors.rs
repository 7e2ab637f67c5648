use thiserror::Error;

use crate::game::TurnState;
use crate::player::Actor;

/// Rejections from [`crate::engine::BettingEngine`] action methods.
///
/// A rejected action never mutates table state and never notifies observers,
/// so callers that only care about the happy path may discard these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("It's not {actor}'s turn")]
    NotYourTurn { actor: Actor },
    #[error("Stakes are frozen: a player is all-in")]
    AllInLocked,
    #[error("Insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: i64, available: i64 },
    #[error("Settlement is locked by an external rule")]
    SettlementLocked,
    #[error("Enemy is still deciding")]
    EnemyThinking,
    #[error("Betting can only open from Dealing (current: {turn:?})")]
    NotDealing { turn: TurnState },
    #[error("No round has been dealt yet")]
    RoundNotDealt,
    #[error("Round already reached showdown")]
    RoundOver,
    #[error("Game over: player is bust")]
    GameOver,
    #[error("Deck exhausted while dealing")]
    DeckExhausted,
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Hand(#[from] HandError),
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum HandError {
    #[error("Need at least 5 evaluable cards, found {found}")]
    InsufficientCards { found: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Empty card notation")]
    Empty,
    #[error("Unknown suit '{0}'")]
    UnknownSuit(char),
    #[error("Unknown rank '{0}'")]
    UnknownRank(String),
}
