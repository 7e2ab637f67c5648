//! Rate-table enemy policy.
//!
//! The enemy looks at its hole cards plus the face-up board, classifies them
//! with the shared [`HandEvaluator`] and samples an action from the matching
//! row of a [`RateTable`]. Rows for incomplete hands (fewer than five known
//! cards) fold less and raise less than the rows for complete hands.

use maskcard_engine::cards::Card;
use maskcard_engine::hand::{Classification, HandEvaluator, HandType};
use maskcard_engine::policy::{DecisionPolicy, EnemyDecision};
use rand::{Rng, RngCore};

/// Relative weights of the three enemy actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub raise: f64,
    pub call: f64,
    pub fold: f64,
}

impl Rates {
    pub const fn new(raise: f64, call: f64, fold: f64) -> Self {
        Self { raise, call, fold }
    }

    /// Scales the weights to sum to 1. Negative weights count as zero; an
    /// all-zero row stays all zero.
    pub fn normalized(&self) -> Rates {
        let raise = self.raise.max(0.0);
        let call = self.call.max(0.0);
        let fold = self.fold.max(0.0);
        let total = raise + call + fold;
        if total <= 0.0 {
            return Rates::new(0.0, 0.0, 0.0);
        }
        Rates::new(raise / total, call / total, fold / total)
    }
}

/// Picks an action for a uniform `draw` in `[0, 1)`.
///
/// Buckets run Raise, then Fold, then Call; anything past the fold bucket is
/// a call, which also covers an all-zero row.
pub fn pick(rates: &Rates, draw: f64) -> EnemyDecision {
    let r = rates.normalized();
    if draw < r.raise {
        EnemyDecision::Raise
    } else if draw < r.raise + r.fold {
        EnemyDecision::Fold
    } else {
        EnemyDecision::Call
    }
}

/// Action weights per hand type, split by whether the hand is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    complete: [Rates; 10],
    partial: [Rates; 10],
}

impl Default for RateTable {
    fn default() -> Self {
        let complete = [
            Rates::new(0.05, 0.55, 0.40), // high card
            Rates::new(0.15, 0.70, 0.15), // one pair
            Rates::new(0.30, 0.65, 0.05), // two pair
            Rates::new(0.45, 0.55, 0.0),  // trips
            Rates::new(0.55, 0.45, 0.0),  // straight
            Rates::new(0.60, 0.40, 0.0),  // flush
            Rates::new(0.70, 0.30, 0.0),  // full house
            Rates::new(0.85, 0.15, 0.0),  // quads
            Rates::new(0.90, 0.10, 0.0),  // straight flush
            Rates::new(1.0, 0.0, 0.0),    // royal flush
        ];
        // straight / flush rows stand for draws here
        let partial = [
            Rates::new(0.05, 0.85, 0.10),
            Rates::new(0.25, 0.75, 0.0),
            Rates::new(0.35, 0.65, 0.0),
            Rates::new(0.50, 0.50, 0.0),
            Rates::new(0.10, 0.85, 0.05),
            Rates::new(0.15, 0.85, 0.0),
            complete[6],
            Rates::new(0.60, 0.40, 0.0),
            complete[8],
            complete[9],
        ];
        Self { complete, partial }
    }
}

impl RateTable {
    pub fn rates(&self, class: Classification) -> Rates {
        let row = class.hand_type.rank() as usize;
        if class.complete {
            self.complete[row]
        } else {
            self.partial[row]
        }
    }

    pub fn set(&mut self, hand_type: HandType, complete: bool, rates: Rates) {
        let row = hand_type.rank() as usize;
        if complete {
            self.complete[row] = rates;
        } else {
            self.partial[row] = rates;
        }
    }
}

/// Samples enemy actions from a [`RateTable`].
///
/// # Example
///
/// ```rust
/// use maskcard_ai::weighted::{Rates, RateTable, WeightedPolicy};
/// use maskcard_engine::cards::Card;
/// use maskcard_engine::hand::{HandEvaluator, HandType};
/// use maskcard_engine::policy::{DecisionPolicy, EnemyDecision};
/// use rand::SeedableRng;
///
/// let mut table = RateTable::default();
/// table.set(HandType::OnePair, false, Rates::new(0.0, 0.0, 1.0));
/// let policy = WeightedPolicy::with_table(HandEvaluator::new(), table);
///
/// let visible: [Card; 2] = ["9s".parse().unwrap(), "9d".parse().unwrap()];
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// assert_eq!(policy.decide(&visible, &mut rng), EnemyDecision::Fold);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedPolicy {
    evaluator: HandEvaluator,
    table: RateTable,
}

impl WeightedPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(evaluator: HandEvaluator, table: RateTable) -> Self {
        Self { evaluator, table }
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Normalized weights this policy would sample from for `visible`.
    pub fn rates(&self, visible: &[Card]) -> Rates {
        self.table
            .rates(self.evaluator.classify(visible))
            .normalized()
    }
}

impl DecisionPolicy for WeightedPolicy {
    fn decide(&self, visible: &[Card], rng: &mut dyn RngCore) -> EnemyDecision {
        let draw: f64 = rng.random();
        pick(&self.rates(visible), draw)
    }

    fn name(&self) -> &str {
        "WeightedPolicy"
    }
}
