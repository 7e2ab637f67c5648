//! # maskcard-ai: Enemy Decision Policies
//!
//! Implementations of [`DecisionPolicy`] for the automated enemy seat.
//!
//! ## Core Components
//!
//! - [`weighted`] - Rate-table policy sampling raise / call / fold by hand strength
//! - [`create_policy`] - Factory function for creating policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use maskcard_ai::create_policy;
//! use maskcard_engine::cards::Card;
//! use rand::SeedableRng;
//!
//! let policy = create_policy("weighted").expect("known policy");
//! let visible: Vec<Card> = ["As", "Ah"].iter().map(|s| s.parse().unwrap()).collect();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let decision = policy.decide(&visible, &mut rng);
//! println!("{} chose {:?}", policy.name(), decision);
//! ```
//!
//! ## Policy Types
//!
//! - `"weighted"` - [`weighted::WeightedPolicy`] with the default rate table
//! - `"passive"` - [`PassivePolicy`], calls every time

use maskcard_engine::policy::{DecisionPolicy, PassivePolicy};

pub mod weighted;

/// Names accepted by [`create_policy`].
pub const POLICY_NAMES: [&str; 2] = ["weighted", "passive"];

/// Factory function to create enemy policies by name.
///
/// Returns `None` for unknown names so callers can report them as input errors.
///
/// # Example
///
/// ```rust
/// use maskcard_ai::create_policy;
///
/// let policy = create_policy("weighted").unwrap();
/// assert_eq!(policy.name(), "WeightedPolicy");
/// assert!(create_policy("psychic").is_none());
/// ```
pub fn create_policy(name: &str) -> Option<Box<dyn DecisionPolicy>> {
    match name.to_ascii_lowercase().as_str() {
        "weighted" => Some(Box::new(weighted::WeightedPolicy::new())),
        "passive" => Some(Box::new(PassivePolicy)),
        _ => None,
    }
}
