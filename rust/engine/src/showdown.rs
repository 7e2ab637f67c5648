//! Head-to-head comparison of two card pools at the end of a round.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::HandError;
use crate::hand::{EvaluatedHand, HandEvaluator, HandType};

/// Result of comparing side A against side B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownOutcome {
    pub best_a: EvaluatedHand,
    pub best_b: EvaluatedHand,
    /// Side A wins ties.
    pub a_wins: bool,
}

impl ShowdownOutcome {
    pub fn type_a(&self) -> HandType {
        self.best_a.hand_type
    }

    pub fn type_b(&self) -> HandType {
        self.best_b.hand_type
    }

    /// Both best hands score identically; `a_wins` was decided by seat order.
    pub fn is_tie(&self) -> bool {
        self.best_a.hand_type == self.best_b.hand_type
            && self.best_a.tiebreak == self.best_b.tiebreak
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShowdownResolver {
    evaluator: HandEvaluator,
}

impl ShowdownResolver {
    pub fn new(evaluator: HandEvaluator) -> Self {
        Self { evaluator }
    }

    /// Evaluates both pools and picks a winner. Ties go to side A.
    pub fn resolve(&self, side_a: &[Card], side_b: &[Card]) -> Result<ShowdownOutcome, HandError> {
        let best_a = self.evaluator.best(side_a)?;
        let best_b = self.evaluator.best(side_b)?;
        let a_wins = !self.evaluator.compare(&best_a, &best_b).is_lt();
        Ok(ShowdownOutcome {
            best_a,
            best_b,
            a_wins,
        })
    }
}
