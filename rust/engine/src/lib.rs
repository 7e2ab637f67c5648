//! # maskcard-engine: Heads-up Card Table Core
//!
//! A deterministic heads-up poker engine: a human seat against an automated
//! enemy backed by the house. Provides hand evaluation, the betting state
//! machine, showdown resolution and round records, with seeded RNG so that a
//! table replays identically.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card, Jokers) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Best-of-five hand evaluation, comparison and partial classification
//! - [`engine`] - The betting state machine and the enemy think cycle
//! - [`game`] - Phases, turn states, dealt cards and table snapshots
//! - [`player`] - Actors, seats and recorded actions
//! - [`rules`] - Raise and call sizing
//! - [`showdown`] - Head-to-head resolution, ties to side A
//! - [`policy`] - The enemy decision seam
//! - [`events`] - Observer notifications and settlement directives
//! - [`config`] - Table configuration
//! - [`logger`] - RoundRecord serialization and JSONL logging
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use maskcard_engine::cards::Card;
//! use maskcard_engine::hand::{HandEvaluator, HandType};
//!
//! let cards: Vec<Card> = ["Ah", "Kh", "Qh", "Jh", "10h", "2c", "3d"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let best = HandEvaluator::new().best(&cards).unwrap();
//! assert_eq!(best.hand_type, HandType::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use maskcard_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let mut deck1 = Deck::new_with_seed(42, true);
//! let mut deck2 = Deck::new_with_seed(42, true);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.deal_card(), deck2.deal_card());
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod policy;
pub mod rules;
pub mod showdown;
