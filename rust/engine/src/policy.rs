use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EnemyDecision {
    Raise,
    Call,
    Fold,
}

/// Decision-making seam for the automated seat.
///
/// The engine hands over the enemy's hole cards followed by the board cards
/// currently face up, and a random source owned by the engine so that a
/// seeded table replays identically.
///
/// # Example Implementation
///
/// ```rust
/// use maskcard_engine::cards::Card;
/// use maskcard_engine::policy::{DecisionPolicy, EnemyDecision};
/// use rand::RngCore;
///
/// struct AlwaysFold;
///
/// impl DecisionPolicy for AlwaysFold {
///     fn decide(&self, _visible: &[Card], _rng: &mut dyn RngCore) -> EnemyDecision {
///         EnemyDecision::Fold
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysFold"
///     }
/// }
/// ```
pub trait DecisionPolicy: Send + Sync {
    fn decide(&self, visible: &[Card], rng: &mut dyn RngCore) -> EnemyDecision;

    fn name(&self) -> &str;
}

/// Calls every time. Keeps the table moving without any randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassivePolicy;

impl DecisionPolicy for PassivePolicy {
    fn decide(&self, _visible: &[Card], _rng: &mut dyn RngCore) -> EnemyDecision {
        EnemyDecision::Call
    }

    fn name(&self) -> &str {
        "PassivePolicy"
    }
}
