use crate::errors::GameError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    /// Move the global stake to `new_stake`, paying `cost` now
    Raise { new_stake: i64, cost: i64 },
    /// Pay `cost` to match the opponent (zero for a check)
    Call { cost: i64 },
    /// Pay whatever is left; the round is all-in from here on
    AllIn { cost: i64 },
}

impl ValidatedAction {
    pub fn cost(&self) -> i64 {
        match self {
            ValidatedAction::Raise { cost, .. }
            | ValidatedAction::Call { cost }
            | ValidatedAction::AllIn { cost } => *cost,
        }
    }
}

/// Sizes a raise by the human player.
///
/// The stake doubles; the player pays the gap between the new stake and what
/// they already put in this phase. Raising is refused outright (never
/// shortened to an all-in) when that gap exceeds the stack.
///
/// # Errors
///
/// - [`GameError::AllInLocked`] - the round is already all-in
/// - [`GameError::InsufficientChips`] - the raise costs more than `chips`
///
/// # Examples
///
/// ```
/// use maskcard_engine::rules::{validate_player_raise, ValidatedAction};
///
/// // stake 2, nothing contributed yet this phase: raise to 4 costs 4
/// let v = validate_player_raise(2, 0, 10, false).unwrap();
/// assert_eq!(v, ValidatedAction::Raise { new_stake: 4, cost: 4 });
///
/// // stake 1 already matched: raise to 2 costs 1 more
/// let v = validate_player_raise(1, 1, 10, false).unwrap();
/// assert_eq!(v, ValidatedAction::Raise { new_stake: 2, cost: 1 });
/// ```
///
/// ```
/// use maskcard_engine::errors::GameError;
/// use maskcard_engine::rules::validate_player_raise;
///
/// let err = validate_player_raise(8, 0, 10, false).unwrap_err();
/// assert_eq!(err, GameError::InsufficientChips { needed: 16, available: 10 });
/// ```
pub fn validate_player_raise(
    stake: i64,
    contributed: i64,
    chips: i64,
    all_in: bool,
) -> Result<ValidatedAction, GameError> {
    if all_in {
        return Err(GameError::AllInLocked);
    }
    let new_stake = stake * 2;
    let cost = new_stake - contributed;
    if cost > chips {
        return Err(GameError::InsufficientChips {
            needed: cost,
            available: chips,
        });
    }
    Ok(ValidatedAction::Raise { new_stake, cost })
}

/// Sizes a raise by the enemy.
///
/// The enemy has an unlimited bankroll, so its raise is capped instead of the
/// player's: the target never exceeds what the player could match with every
/// chip they have left. A capped raise leaves the player facing an all-in call.
///
/// # Examples
///
/// ```
/// use maskcard_engine::rules::{size_enemy_raise, ValidatedAction};
///
/// // plenty of chips behind: plain doubling
/// let v = size_enemy_raise(2, 0, 20, 0, false).unwrap();
/// assert_eq!(v, ValidatedAction::Raise { new_stake: 4, cost: 4 });
///
/// // player has 3 chips and 1 in the pot: the raise tops out at 4
/// let v = size_enemy_raise(4, 1, 3, 1, false).unwrap();
/// assert_eq!(v, ValidatedAction::Raise { new_stake: 4, cost: 3 });
/// ```
pub fn size_enemy_raise(
    stake: i64,
    enemy_contributed: i64,
    player_chips: i64,
    player_contributed: i64,
    all_in: bool,
) -> Result<ValidatedAction, GameError> {
    if all_in {
        return Err(GameError::AllInLocked);
    }
    let ceiling = player_chips + player_contributed;
    let target = (stake * 2).min(ceiling).max(enemy_contributed);
    Ok(ValidatedAction::Raise {
        new_stake: target,
        cost: target - enemy_contributed,
    })
}

/// Sizes a call.
///
/// `needed` is the opponent's contribution minus the caller's. `chips` is
/// `None` for the house seat, which always pays in full. A human call that
/// would take the whole stack (or more) becomes an all-in for what is left.
///
/// # Examples
///
/// ```
/// use maskcard_engine::rules::{validate_call, ValidatedAction};
///
/// assert_eq!(validate_call(0, Some(5)), ValidatedAction::Call { cost: 0 });
/// assert_eq!(validate_call(2, Some(5)), ValidatedAction::Call { cost: 2 });
/// assert_eq!(validate_call(8, Some(5)), ValidatedAction::AllIn { cost: 5 });
/// assert_eq!(validate_call(8, None), ValidatedAction::Call { cost: 8 });
/// ```
pub fn validate_call(needed: i64, chips: Option<i64>) -> ValidatedAction {
    if needed <= 0 {
        return ValidatedAction::Call { cost: 0 };
    }
    match chips {
        Some(chips) if chips <= needed => ValidatedAction::AllIn {
            cost: chips.max(0),
        },
        _ => ValidatedAction::Call { cost: needed },
    }
}

/// Forced contribution for the human seat at round start.
///
/// Capped by the stack while chips remain. With an empty stack the full bet
/// is posted anyway and the stack goes negative, which is what later ends the
/// game if that round is lost.
pub fn player_forced_bet(forced_bet: i64, chips: i64) -> i64 {
    if chips > 0 {
        forced_bet.min(chips)
    } else {
        forced_bet
    }
}
