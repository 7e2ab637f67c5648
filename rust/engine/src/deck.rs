use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    include_jokers: bool,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64, include_jokers: bool) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(include_jokers),
            position: 0,
            include_jokers,
            rng,
        }
    }

    /// Gathers every card back and shuffles the full deck.
    pub fn shuffle(&mut self) {
        self.cards = full_deck(self.include_jokers);
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_order() {
        let mut a = Deck::new_with_seed(7, true);
        let mut b = Deck::new_with_seed(7, true);
        a.shuffle();
        b.shuffle();
        let da: Vec<Card> = std::iter::from_fn(|| a.deal_card()).collect();
        let db: Vec<Card> = std::iter::from_fn(|| b.deal_card()).collect();
        assert_eq!(da.len(), 54);
        assert_eq!(da, db);
    }

    #[test]
    fn dealing_exhausts() {
        let mut d = Deck::new_with_seed(1, false);
        d.shuffle();
        for _ in 0..52 {
            assert!(d.deal_card().is_some());
        }
        assert_eq!(d.remaining(), 0);
        assert!(d.deal_card().is_none());
    }
}
