use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CardParseError;

/// Represents one of the four suits of the table deck.
/// Jokers carry a suit too, but it never matters for evaluation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
        }
    }
}

/// Represents the rank (face value) of a card from Two through Ace, plus the Joker.
/// Ace only plays high. The Joker orders above every numeric rank but is
/// left out of hand evaluation entirely.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
    /// Joker (16), handled by game-event rules rather than the evaluator
    Joker = 16,
}

impl Rank {
    /// Numeric value used for straights and tiebreak scores.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Rank> {
        let rank = match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            16 => Rank::Joker,
            _ => return None,
        };
        Some(rank)
    }

    pub fn is_joker(self) -> bool {
        self == Rank::Joker
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Joker => "JK",
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are immutable values; two cards with the same suit and rank are the same card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Two through Ace, or Joker)
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Parses short card notation: `As`, `Td`, `10h`, `2c`. Jokers are written
/// `JKs`/`JKh` (or `JK♠`/`JK♥`, as displayed); a bare `JK` is the spades Joker.
/// Suit letters are `s h c d`; the unicode suit symbols are accepted too.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("jk") || s.eq_ignore_ascii_case("joker") {
            return Ok(Card::new(Suit::Spades, Rank::Joker));
        }
        let mut chars: Vec<char> = s.chars().collect();
        let suit_char = chars.pop().ok_or(CardParseError::Empty)?;
        let suit = match suit_char.to_ascii_lowercase() {
            's' | '♠' => Suit::Spades,
            'h' | '♥' => Suit::Hearts,
            'c' | '♣' => Suit::Clubs,
            'd' | '♦' => Suit::Diamonds,
            other => return Err(CardParseError::UnknownSuit(other)),
        };
        let rank_str: String = chars.into_iter().collect();
        let rank = match rank_str.to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "JK" | "JOKER" => Rank::Joker,
            _ => return Err(CardParseError::UnknownRank(rank_str)),
        };
        Ok(Card::new(suit, rank))
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// The 52 standard cards, followed by two Jokers when `include_jokers` is set.
pub fn full_deck(include_jokers: bool) -> Vec<Card> {
    let mut v = Vec::with_capacity(54);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    if include_jokers {
        v.push(Card::new(Suit::Spades, Rank::Joker));
        v.push(Card::new(Suit::Hearts, Rank::Joker));
    }
    v
}
