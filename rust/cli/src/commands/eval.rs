//! # Eval Command
//!
//! Evaluates a set of cards given in short notation. With five or more
//! non-Joker cards it prints the best five-card hand; with fewer it prints
//! the partial classification the enemy policy would see.

use std::io::Write;

use maskcard_engine::errors::GameError;
use maskcard_engine::hand::HandEvaluator;

use crate::error::CliError;
use crate::formatters::{format_board, format_hand};
use crate::validation::parse_cards;

pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards).map_err(CliError::InvalidInput)?;
    let evaluator = HandEvaluator::new();

    writeln!(out, "Cards: {}", format_board(&cards))?;
    let evaluable = cards.iter().filter(|c| !c.is_joker()).count();
    if evaluable >= 5 {
        let best = evaluator.best(&cards).map_err(GameError::from)?;
        writeln!(out, "Best: {}", format_hand(&best))?;
        writeln!(out, "Tiebreak: {}", best.tiebreak)?;
    } else {
        let class = evaluator.classify(&cards);
        writeln!(
            out,
            "Partial: {} ({} of 5 cards known)",
            class.hand_type.name(),
            evaluable
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(cards: &[&str]) -> Result<String, CliError> {
        let cards: Vec<String> = cards.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        handle_eval_command(&cards, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn royal_flush_among_seven() {
        let out = eval(&["As", "Ks", "Qs", "Js", "10s", "2c", "3d"]).unwrap();
        assert!(out.contains("Best: Royal Flush"));
    }

    #[test]
    fn jokers_are_ignored() {
        let out = eval(&["JK", "9h", "9d", "9c", "4s", "4h"]).unwrap();
        assert!(out.contains("Best: Full House"));
    }

    #[test]
    fn short_sets_are_classified() {
        let out = eval(&["7h", "7d", "JK"]).unwrap();
        assert!(out.contains("Partial: One Pair (2 of 5 cards known)"));
    }

    #[test]
    fn bad_notation_is_input_error() {
        assert!(matches!(eval(&["Xq"]), Err(CliError::InvalidInput(_))));
    }
}
