//! Notifications fired by the betting engine and the observer list that receives them.

use std::fmt;

use serde::Serialize;

use crate::cards::Card;
use crate::game::Phase;
use crate::logger::RoundRecord;
use crate::player::Actor;
use crate::showdown::ShowdownOutcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EngineEvent {
    RoundStarted { round: u32 },
    PhaseChanged(Phase),
    /// Fired once after every successful mutation
    StateChanged,
    /// Fired once per round, when the round first goes all-in
    AllIn { actor: Actor },
    /// Fired before the fold is resolved so a rule can lock settlement
    Fold { player_folded: bool },
    ShowdownResolved(ShowdownOutcome),
    /// A Joker became visible in a hand or on the board
    JokerRevealed {
        in_player_hand: bool,
        in_enemy_hand: bool,
        on_board: bool,
    },
    RoundSettled {
        winner: Actor,
        pot: i64,
        record: Box<RoundRecord>,
    },
    /// The last-stand forced bet pushed the player below zero. Carries the
    /// whole board, which is laid open for that round.
    ChipsNegative { chips: i64, board: [Card; 5] },
    GameOver { chips: i64 },
}

/// What an observer asks the engine to do after seeing an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Directive {
    #[default]
    Continue,
    /// Freeze the round; the observer takes over resolving it
    LockSettlement,
}

pub type Observer = Box<dyn FnMut(&EngineEvent) -> Directive>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Observers invoked synchronously in registration order.
#[derive(Default)]
pub struct Observers {
    next_id: usize,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Delivers `event` to every observer; any lock request wins.
    pub fn notify(&mut self, event: &EngineEvent) -> Directive {
        tracing::trace!(event = ?event, observers = self.entries.len(), "notifying observers");
        let mut directive = Directive::Continue;
        for (_, observer) in self.entries.iter_mut() {
            if observer(event) == Directive::LockSettlement {
                directive = Directive::LockSettlement;
            }
        }
        directive
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
