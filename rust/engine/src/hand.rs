use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::errors::HandError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandType {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandType {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn all() -> [HandType; 10] {
        [
            HandType::HighCard,
            HandType::OnePair,
            HandType::TwoPair,
            HandType::ThreeOfAKind,
            HandType::Straight,
            HandType::Flush,
            HandType::FullHouse,
            HandType::FourOfAKind,
            HandType::StraightFlush,
            HandType::RoyalFlush,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            HandType::HighCard => "High Card",
            HandType::OnePair => "One Pair",
            HandType::TwoPair => "Two Pair",
            HandType::ThreeOfAKind => "Three of a Kind",
            HandType::Straight => "Straight",
            HandType::Flush => "Flush",
            HandType::FullHouse => "Full House",
            HandType::FourOfAKind => "Four of a Kind",
            HandType::StraightFlush => "Straight Flush",
            HandType::RoyalFlush => "Royal Flush",
        }
    }
}

/// The strongest five cards found for a pool, with the score used to break
/// ties inside the same [`HandType`].
///
/// `tiebreak` is only comparable between hands of the same type. One Pair
/// encodes the pair rank alone, so pairs of equal rank with different
/// kickers compare equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedHand {
    pub hand_type: HandType,
    // grouped cards first (quads, trips, pairs), then kickers high -> low
    pub cards: [Card; 5],
    pub tiebreak: u32,
}

/// Orders two evaluated hands: hand type first, then tiebreak score.
/// `Ordering::Less` means `a` is strictly weaker than `b`.
pub fn compare_hands(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    match a.hand_type.cmp(&b.hand_type) {
        Ordering::Equal => a.tiebreak.cmp(&b.tiebreak),
        ord => ord,
    }
}

/// Coarse strength of a possibly incomplete card set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub hand_type: HandType,
    /// True when five or more evaluable cards were known and `hand_type` is exact.
    pub complete: bool,
}

/// Stateless poker hand evaluator.
///
/// One instance is built by the application and handed to the betting
/// engine, the showdown resolver and the enemy policy.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HandEvaluator;

impl HandEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Finds the best five-card hand in `cards` by scoring every five-card subset.
    ///
    /// Jokers are removed first. Fails when fewer than five cards remain.
    pub fn best(&self, cards: &[Card]) -> Result<EvaluatedHand, HandError> {
        let pool = evaluable(cards);
        if pool.len() < 5 {
            return Err(HandError::InsufficientCards { found: pool.len() });
        }
        let mut best: Option<EvaluatedHand> = None;
        for subset in five_card_subsets(&pool) {
            let hand = evaluate_five(&subset);
            match &best {
                Some(current) if !compare_hands(&hand, current).is_gt() => {}
                _ => best = Some(hand),
            }
        }
        best.ok_or(HandError::InsufficientCards { found: pool.len() })
    }

    pub fn compare(&self, a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
        compare_hands(a, b)
    }

    /// Classifies a partial hand for decision making.
    ///
    /// With five or more evaluable cards this is the exact best hand type.
    /// With fewer it counts groups and draws instead: quads, trips, two pair,
    /// three suited cards (reported as `Flush`), a three-card run (reported
    /// as `Straight`), one pair, high card.
    pub fn classify(&self, cards: &[Card]) -> Classification {
        let pool = evaluable(cards);
        if pool.len() >= 5 {
            if let Ok(hand) = self.best(&pool) {
                return Classification {
                    hand_type: hand.hand_type,
                    complete: true,
                };
            }
        }

        let mut rank_counts = [0u8; 17];
        let mut suit_counts = [0u8; 4];
        for c in &pool {
            rank_counts[c.rank.value() as usize] += 1;
            suit_counts[suit_index(c.suit)] += 1;
        }
        let top = rank_counts.iter().copied().max().unwrap_or(0);
        let pairs = rank_counts.iter().filter(|&&n| n == 2).count();
        let max_suit = suit_counts.iter().copied().max().unwrap_or(0);

        let hand_type = if top >= 4 {
            HandType::FourOfAKind
        } else if top == 3 {
            HandType::ThreeOfAKind
        } else if pairs >= 2 {
            HandType::TwoPair
        } else if max_suit >= 3 {
            HandType::Flush
        } else if longest_run(&rank_counts) >= 3 {
            HandType::Straight
        } else if top == 2 {
            HandType::OnePair
        } else {
            HandType::HighCard
        };
        Classification {
            hand_type,
            complete: false,
        }
    }
}

/// Scores exactly five cards.
///
/// Callers are expected to strip Jokers first; [`HandEvaluator::best`] does.
pub fn evaluate_five(cards: &[Card; 5]) -> EvaluatedHand {
    let mut sorted = *cards;
    sorted.sort_unstable_by(|a, b| b.rank.cmp(&a.rank).then(a.suit.cmp(&b.suit)));

    let mut rank_counts = [0u8; 17];
    for c in &sorted {
        rank_counts[c.rank.value() as usize] += 1;
    }
    let groups = rank_groups(&rank_counts);
    let arranged = arrange(&sorted, &groups);

    let is_flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let straight_high = if groups.len() == 5 && sorted[0].rank.value() - sorted[4].rank.value() == 4
    {
        Some(sorted[0].rank.value() as u32)
    } else {
        None
    };
    let lowest = sorted[4].rank.value() as u32;
    let (top_count, top_rank) = groups[0];

    let (hand_type, tiebreak) = if let (true, Some(high)) = (is_flush, straight_high) {
        if high == 14 {
            (HandType::RoyalFlush, high)
        } else {
            (HandType::StraightFlush, high)
        }
    } else if top_count == 4 {
        (HandType::FourOfAKind, top_rank * 10 + groups[1].1)
    } else if top_count == 3 && groups[1].0 == 2 {
        (
            HandType::FullHouse,
            top_rank * 1000 + groups[1].1 * 10 + lowest,
        )
    } else if is_flush {
        // positional score; ranks above 9 spill into the next digit, so two
        // flushes can order differently from a card-by-card comparison
        let weighted = sorted
            .iter()
            .fold(0u32, |acc, c| acc * 10 + c.rank.value() as u32);
        (HandType::Flush, weighted)
    } else if let Some(high) = straight_high {
        (HandType::Straight, high)
    } else if top_count == 3 {
        // groups after the trips are singles, highest first
        (HandType::ThreeOfAKind, top_rank * 10 + groups[1].1)
    } else if top_count == 2 && groups[1].0 == 2 {
        (
            HandType::TwoPair,
            top_rank * 100 + groups[1].1 * 10 + groups[2].1,
        )
    } else if top_count == 2 {
        (HandType::OnePair, top_rank)
    } else {
        (HandType::HighCard, top_rank)
    };

    EvaluatedHand {
        hand_type,
        cards: arranged,
        tiebreak,
    }
}

/// Every five-card subset of `cards`, in index order. C(7,5) = 21 for a full pool.
pub fn five_card_subsets(cards: &[Card]) -> Vec<[Card; 5]> {
    let n = cards.len();
    let mut out = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        out.push([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
    out
}

fn evaluable(cards: &[Card]) -> Vec<Card> {
    cards.iter().copied().filter(|c| !c.is_joker()).collect()
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Spades => 0,
        Suit::Hearts => 1,
        Suit::Clubs => 2,
        Suit::Diamonds => 3,
    }
}

// (count, rank) ordered by count desc, then rank desc
fn rank_groups(rank_counts: &[u8; 17]) -> Vec<(u8, u32)> {
    let mut groups: Vec<(u8, u32)> = rank_counts
        .iter()
        .enumerate()
        .filter(|(_, n)| **n > 0)
        .map(|(r, n)| (*n, r as u32))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

fn arrange(sorted: &[Card; 5], groups: &[(u8, u32)]) -> [Card; 5] {
    let mut out = *sorted;
    let mut i = 0;
    for &(_, rank) in groups {
        for c in sorted.iter().filter(|c| c.rank.value() as u32 == rank) {
            out[i] = *c;
            i += 1;
        }
    }
    out
}

fn longest_run(rank_counts: &[u8; 17]) -> usize {
    let mut best = 0;
    let mut run = 0;
    for &count in &rank_counts[2..=14] {
        if count > 0 {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}
