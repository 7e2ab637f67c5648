//! Card, board and table formatters for terminal display.
//!
//! Pure functions turning engine values into the strings the `play`, `sim`
//! and `eval` commands print. Suits use Unicode symbols with an ASCII
//! fallback for terminals that cannot render them.
//!
//! ## Example
//!
//! ```rust
//! use maskcard_engine::cards::{Card, Rank, Suit};
//! use maskcard_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Suit::Spades, Rank::Ace);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use maskcard_engine::cards::{Card, Rank, Suit};
use maskcard_engine::game::{Phase, TableSnapshot};
use maskcard_engine::hand::EvaluatedHand;
use maskcard_engine::policy::EnemyDecision;
use maskcard_engine::showdown::ShowdownOutcome;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix-like systems are
/// assumed to support Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a string (2-9, T, J, Q, K, A, JK).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
        Rank::Joker => "JK",
    }
    .to_string()
}

/// Format a Card as rank followed by suit. Jokers keep their suit (`JK♥`)
/// so the two deck Jokers stay distinguishable.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a list of cards as `[A♠ K♥ Q♦]`.
pub fn format_board(cards: &[Card]) -> String {
    let cards_str: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", cards_str.join(" "))
}

pub fn format_phase(phase: Phase) -> &'static str {
    match phase {
        Phase::Preflop => "Preflop",
        Phase::Flop => "Flop",
        Phase::Turn => "Turn",
        Phase::River => "River",
        Phase::Showdown => "Showdown",
    }
}

pub fn format_decision(decision: EnemyDecision) -> &'static str {
    match decision {
        EnemyDecision::Raise => "raise",
        EnemyDecision::Call => "call",
        EnemyDecision::Fold => "fold",
    }
}

/// Format an evaluated hand as `Full House [K♠ K♥ K♦ 2♣ 2♠]`.
pub fn format_hand(hand: &EvaluatedHand) -> String {
    format!("{} {}", hand.hand_type.name(), format_board(&hand.cards))
}

/// One status line describing the table.
pub fn format_snapshot(s: &TableSnapshot) -> String {
    let mut line = format!(
        "Round {} | {} | Pot: {} | Stake: {} | Chips: {}",
        s.round,
        format_phase(s.phase),
        s.pot,
        s.global_stake,
        s.player.chips()
    );
    if s.is_all_in {
        line.push_str(" | ALL-IN");
    }
    line
}

/// Two lines comparing both sides' best hands.
pub fn format_showdown(outcome: &ShowdownOutcome) -> String {
    let verdict = if outcome.is_tie() {
        "Tie (player wins ties)"
    } else if outcome.a_wins {
        "Player wins"
    } else {
        "Enemy wins"
    };
    format!(
        "Player: {}\nEnemy:  {}\n{}",
        format_hand(&outcome.best_a),
        format_hand(&outcome.best_b),
        verdict
    )
}
