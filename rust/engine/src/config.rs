use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::STARTING_CHIPS;

/// Scalar inputs supplied by the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Human seat's stack at game start
    pub initial_chips: i64,
    /// Forced contribution from each side at round start, also the opening stake
    pub forced_bet: i64,
    pub think_time: ThinkTime,
    /// Deal from a 54-card deck with two Jokers
    pub include_jokers: bool,
    /// Seeds the deck and decision RNG streams; fresh entropy when absent
    pub seed: Option<u64>,
    pub abilities: AbilityCosts,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_chips: STARTING_CHIPS,
            forced_bet: 1,
            think_time: ThinkTime::default(),
            include_jokers: true,
            seed: None,
            abilities: AbilityCosts::default(),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.initial_chips <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "initial_chips must be positive, got {}",
                self.initial_chips
            )));
        }
        if self.forced_bet <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "forced_bet must be positive, got {}",
                self.forced_bet
            )));
        }
        if self.think_time.min_ms > self.think_time.max_ms {
            return Err(GameError::InvalidConfig(format!(
                "think_time.min_ms ({}) exceeds think_time.max_ms ({})",
                self.think_time.min_ms, self.think_time.max_ms
            )));
        }
        for ability in Ability::all() {
            if self.abilities.cost(ability) < 0 {
                return Err(GameError::InvalidConfig(format!(
                    "{:?} cost must not be negative",
                    ability
                )));
            }
        }
        Ok(())
    }
}

/// Window the enemy "thinks" for before acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThinkTime {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for ThinkTime {
    fn default() -> Self {
        Self {
            min_ms: 300,
            max_ms: 400,
        }
    }
}

impl ThinkTime {
    pub fn instant() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }
}

/// Card abilities the player can buy with chips outside of betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Look at one hidden card
    Peek,
    /// Swap a hole card with a board card
    Swap,
    /// Burn a board card
    Burn,
    /// Draw a replacement card
    Draw,
    /// Remove a card from play
    Delete,
}

impl Ability {
    pub fn all() -> [Ability; 5] {
        [
            Ability::Peek,
            Ability::Swap,
            Ability::Burn,
            Ability::Draw,
            Ability::Delete,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityCosts {
    pub peek: i64,
    pub swap: i64,
    pub burn: i64,
    pub draw: i64,
    pub delete: i64,
}

impl Default for AbilityCosts {
    fn default() -> Self {
        Self {
            peek: 2,
            swap: 3,
            burn: 1,
            draw: 2,
            delete: 4,
        }
    }
}

impl AbilityCosts {
    pub fn cost(&self, ability: Ability) -> i64 {
        match ability {
            Ability::Peek => self.peek,
            Ability::Swap => self.swap,
            Ability::Burn => self.burn,
            Ability::Draw => self.draw,
            Ability::Delete => self.delete,
        }
    }
}
