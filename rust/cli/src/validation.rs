//! Input parsing and validation for interactive commands.
//!
//! Functions here return structured results (`ParseResult`, `Result`) so that
//! command handlers can print a clear message and re-prompt instead of failing.

use maskcard_engine::cards::{Card, full_deck};
use maskcard_engine::errors::CardParseError;

/// A command the human seat can issue at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Raise,
    Call,
    Fold,
    /// Spend chips to look at one of the enemy's hole cards
    Peek,
}

/// Result of parsing one line of prompt input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid command parsed from input
    Action(PlayerCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a table command.
///
/// Accepts the following input formats (case-insensitive):
/// - "r" or "raise" → Raise (doubles the global stake)
/// - "c", "call" or "check" → Call
/// - "f" or "fold" → Fold
/// - "p" or "peek" → Peek
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use maskcard_cli::validation::{parse_player_action, ParseResult, PlayerCommand};
/// assert_eq!(
///     parse_player_action("Raise"),
///     ParseResult::Action(PlayerCommand::Raise)
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("bet 5") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if parts.len() > 1 {
        return ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Stakes are fixed; valid actions: raise, call, fold, peek, q",
            input
        ));
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "r" | "raise" => ParseResult::Action(PlayerCommand::Raise),
        "c" | "call" | "check" => ParseResult::Action(PlayerCommand::Call),
        "f" | "fold" => ParseResult::Action(PlayerCommand::Fold),
        "p" | "peek" => ParseResult::Action(PlayerCommand::Peek),
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: raise, call, fold, peek, q",
            other
        )),
    }
}

/// Parse card notations (`As`, `10h`, `JKh`, ...) for the `eval` command.
///
/// The same physical card may not appear twice. A bare `JK` takes whichever
/// of the deck's two Jokers is still free.
pub fn parse_cards(inputs: &[String]) -> Result<Vec<Card>, String> {
    let jokers: Vec<Card> = full_deck(true).into_iter().filter(|c| c.is_joker()).collect();
    let mut cards = Vec::with_capacity(inputs.len());
    for raw in inputs {
        let mut card: Card = raw
            .parse()
            .map_err(|e: CardParseError| format!("'{}': {}", raw, e))?;
        if is_bare_joker(raw) {
            card = jokers
                .iter()
                .copied()
                .find(|j| !cards.contains(j))
                .ok_or_else(|| "At most two Jokers are in the deck".to_string())?;
        }
        if cards.contains(&card) {
            return Err(format!("Duplicate card '{}'", raw));
        }
        cards.push(card);
    }
    Ok(cards)
}

fn is_bare_joker(raw: &str) -> bool {
    let raw = raw.trim();
    raw.eq_ignore_ascii_case("jk") || raw.eq_ignore_ascii_case("joker")
}
