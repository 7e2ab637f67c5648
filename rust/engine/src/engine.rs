use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;
use crate::config::{Ability, TableConfig};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::{Directive, EngineEvent, Observers, SubscriptionId};
use crate::game::{DealtCards, Phase, TableSnapshot, TurnState};
use crate::hand::HandEvaluator;
use crate::logger::{ActionRecord, RoundRecord, SettlementReason, ShowdownInfo};
use crate::player::{Actor, PlayerAction, Seat};
use crate::policy::{DecisionPolicy, EnemyDecision};
use crate::rules::{
    player_forced_bet, size_enemy_raise, validate_call, validate_player_raise, ValidatedAction,
};
use crate::showdown::{ShowdownOutcome, ShowdownResolver};

/// Mixed into the table seed so the decision stream differs from the deck stream.
const DECISION_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// A pending enemy deliberation.
///
/// Obtained from [`BettingEngine::begin_enemy_think`]; the driver waits
/// [`ThinkTicket::delay`] and then hands the ticket back to
/// [`BettingEngine::finish_enemy_think`]. Any phase advance, round restart,
/// settlement or lock in between turns the ticket stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkTicket {
    id: u64,
    epoch: u64,
    delay: Duration,
}

impl ThinkTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Heads-up betting state machine between the human player and the enemy.
///
/// Owns the deck, both seats, the pot and the round's cards. Hand strength
/// comes from the injected [`HandEvaluator`], enemy choices from the injected
/// [`DecisionPolicy`]. Collaborators watch the table through
/// [`BettingEngine::subscribe`] and [`BettingEngine::snapshot`].
///
/// # Examples
///
/// ```
/// use maskcard_engine::config::{TableConfig, ThinkTime};
/// use maskcard_engine::engine::BettingEngine;
/// use maskcard_engine::game::{Phase, TurnState};
/// use maskcard_engine::hand::HandEvaluator;
/// use maskcard_engine::player::Actor;
/// use maskcard_engine::policy::PassivePolicy;
///
/// let config = TableConfig {
///     seed: Some(7),
///     think_time: ThinkTime::instant(),
///     ..TableConfig::default()
/// };
/// let mut engine =
///     BettingEngine::new(config, HandEvaluator::new(), Box::new(PassivePolicy)).unwrap();
/// engine.start_round().unwrap();
/// assert_eq!(engine.pot(), 2);
///
/// engine.start_betting_phase().unwrap();
/// engine.run_enemy_turn().unwrap();
/// assert_eq!(engine.turn(), TurnState::PlayerTurn);
///
/// engine.call(Actor::Player).unwrap();
/// assert_eq!(engine.phase(), Phase::Flop);
/// ```
pub struct BettingEngine {
    config: TableConfig,
    seed: u64,
    evaluator: HandEvaluator,
    resolver: ShowdownResolver,
    policy: Box<dyn DecisionPolicy>,
    rng: ChaCha20Rng,
    deck: Deck,
    cards: Option<DealtCards>,
    player: Seat,
    enemy: Seat,
    pot: i64,
    global_stake: i64,
    phase: Phase,
    turn: TurnState,
    is_all_in: bool,
    settlement_locked: bool,
    /// The pot of the current round has already been awarded
    round_settled: bool,
    enemy_raised_this_phase: bool,
    game_over: bool,
    round: u32,
    /// Bumped whenever a pending think must be invalidated
    epoch: u64,
    next_ticket: u64,
    thinking: Option<ThinkTicket>,
    observers: Observers,
    record: RoundRecord,
    last_showdown: Option<ShowdownOutcome>,
}

impl BettingEngine {
    pub fn new(
        config: TableConfig,
        evaluator: HandEvaluator,
        policy: Box<dyn DecisionPolicy>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let deck = Deck::new_with_seed(seed, config.include_jokers);
        let rng = ChaCha20Rng::seed_from_u64(seed ^ DECISION_STREAM);
        Ok(Self {
            seed,
            evaluator,
            resolver: ShowdownResolver::new(evaluator),
            policy,
            rng,
            deck,
            cards: None,
            player: Seat::new(config.initial_chips),
            enemy: Seat::new(0),
            pot: 0,
            global_stake: config.forced_bet,
            phase: Phase::Preflop,
            turn: TurnState::Dealing,
            is_all_in: false,
            settlement_locked: false,
            round_settled: false,
            enemy_raised_this_phase: false,
            game_over: false,
            round: 0,
            epoch: 0,
            next_ticket: 0,
            thinking: None,
            observers: Observers::default(),
            record: RoundRecord::new(0, config.seed),
            last_showdown: None,
            config,
        })
    }

    // ---- observers ----

    /// Registers an observer. Observers run synchronously, in registration
    /// order, and may answer [`Directive::LockSettlement`] to freeze the round.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&EngineEvent) -> Directive + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn emit(&mut self, event: EngineEvent) {
        if self.observers.notify(&event) == Directive::LockSettlement {
            self.apply_lock();
        }
    }

    fn apply_lock(&mut self) {
        if !self.settlement_locked {
            tracing::debug!(round = self.round, "settlement locked");
        }
        self.settlement_locked = true;
        self.turn = TurnState::Settlement;
        self.cancel_think();
    }

    fn cancel_think(&mut self) {
        self.epoch += 1;
        self.thinking = None;
    }

    // ---- round lifecycle ----

    /// Shuffles, deals a fresh round and posts both forced bets.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if self.game_over {
            tracing::debug!("start_round refused: game over");
            return Err(GameError::GameOver);
        }
        self.cancel_think();
        self.deck.shuffle();
        let cards = self.deal()?;

        self.cards = Some(cards);
        self.player.reset_round();
        self.enemy.reset_round();
        self.pot = 0;
        self.is_all_in = false;
        self.settlement_locked = false;
        self.round_settled = false;
        self.enemy_raised_this_phase = false;
        self.last_showdown = None;
        self.phase = Phase::Preflop;
        self.turn = TurnState::Dealing;
        self.round += 1;

        self.record = RoundRecord::new(self.round, self.config.seed);
        self.record.player_hole = cards.player.to_vec();
        self.record.enemy_hole = cards.enemy.to_vec();
        self.record.board = cards.board.to_vec();

        let forced = self.config.forced_bet;
        self.enemy.pay(forced);
        self.record_action(Actor::Enemy, PlayerAction::ForcedBet, forced);
        let player_bet = player_forced_bet(forced, self.player.chips());
        self.player.pay(player_bet);
        self.record_action(Actor::Player, PlayerAction::ForcedBet, player_bet);
        self.pot = forced + player_bet;
        self.global_stake = forced;

        tracing::info!(
            round = self.round,
            player_chips = self.player.chips(),
            pot = self.pot,
            "round started"
        );
        self.emit(EngineEvent::RoundStarted { round: self.round });
        self.emit(EngineEvent::PhaseChanged(Phase::Preflop));
        let chips = self.player.chips();
        if chips < 0 {
            tracing::warn!(round = self.round, chips, "player chips negative after forced bet");
            self.emit(EngineEvent::ChipsNegative {
                chips,
                board: cards.board,
            });
        }
        if chips <= 0 {
            self.mark_all_in(Actor::Player);
        }
        let in_player_hand = cards.player.iter().any(Card::is_joker);
        let in_enemy_hand = cards.enemy.iter().any(Card::is_joker);
        if in_player_hand || in_enemy_hand {
            self.emit(EngineEvent::JokerRevealed {
                in_player_hand,
                in_enemy_hand,
                on_board: false,
            });
        }
        self.emit(EngineEvent::StateChanged);
        Ok(())
    }

    fn deal(&mut self) -> Result<DealtCards, GameError> {
        let deck = &mut self.deck;
        let mut next = || deck.deal_card().ok_or(GameError::DeckExhausted);
        Ok(DealtCards {
            player: [next()?, next()?],
            enemy: [next()?, next()?],
            board: [next()?, next()?, next()?, next()?, next()?],
        })
    }

    /// Opens betting for the current phase. The enemy always acts first.
    pub fn start_betting_phase(&mut self) -> Result<(), GameError> {
        let check = if self.game_over {
            Err(GameError::GameOver)
        } else if self.cards.is_none() {
            Err(GameError::RoundNotDealt)
        } else if self.settlement_locked {
            Err(GameError::SettlementLocked)
        } else if self.phase == Phase::Showdown {
            Err(GameError::RoundOver)
        } else if self.turn != TurnState::Dealing {
            Err(GameError::NotDealing { turn: self.turn })
        } else {
            Ok(())
        };
        if let Err(e) = check {
            tracing::debug!(error = %e, "start_betting_phase rejected");
            return Err(e);
        }
        self.turn = TurnState::EnemyTurn;
        tracing::debug!(round = self.round, phase = ?self.phase, "betting opened");
        self.emit(EngineEvent::StateChanged);
        Ok(())
    }

    /// Restores the starting stack and clears game over, then deals a new round.
    pub fn reset_game(&mut self) -> Result<(), GameError> {
        self.player = Seat::new(self.config.initial_chips);
        self.enemy = Seat::new(0);
        self.pot = 0;
        self.game_over = false;
        self.round = 0;
        tracing::info!(chips = self.config.initial_chips, "game reset");
        self.start_round()
    }

    // ---- betting actions ----

    fn check_betting(&self, actor: Actor, action: &str) -> Result<(), GameError> {
        let check = if self.game_over {
            Err(GameError::GameOver)
        } else if self.cards.is_none() {
            Err(GameError::RoundNotDealt)
        } else if self.settlement_locked {
            Err(GameError::SettlementLocked)
        } else if self.phase == Phase::Showdown {
            Err(GameError::RoundOver)
        } else if self.thinking.is_some() {
            Err(GameError::EnemyThinking)
        } else if self.turn != TurnState::for_actor(actor) {
            Err(GameError::NotYourTurn { actor })
        } else {
            Ok(())
        };
        if let Err(e) = &check {
            tracing::debug!(%actor, action, error = %e, "action rejected");
        }
        check
    }

    /// Doubles the global stake.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotYourTurn`] and the other table guards
    /// - [`GameError::AllInLocked`] - the round is already all-in
    /// - [`GameError::InsufficientChips`] - the player cannot cover the raise
    pub fn raise(&mut self, actor: Actor) -> Result<(), GameError> {
        self.check_betting(actor, "raise")?;
        let sized = match actor {
            Actor::Player => validate_player_raise(
                self.global_stake,
                self.player.contributed_this_phase(),
                self.player.chips(),
                self.is_all_in,
            ),
            Actor::Enemy => size_enemy_raise(
                self.global_stake,
                self.enemy.contributed_this_phase(),
                self.player.chips(),
                self.player.contributed_this_phase(),
                self.is_all_in,
            ),
        };
        let validated = sized.inspect_err(|e| {
            tracing::debug!(%actor, error = %e, "raise rejected");
        })?;
        let cost = validated.cost();
        let target = match validated {
            ValidatedAction::Raise { new_stake, .. } => new_stake,
            _ => self.global_stake,
        };

        self.seat_mut(actor).pay(cost);
        self.seat_mut(actor).mark_acted();
        self.pot += cost;
        self.global_stake = self.global_stake.max(target);
        self.record_action(actor, PlayerAction::Raise, cost);
        tracing::debug!(%actor, cost, stake = self.global_stake, "raise");

        match actor {
            Actor::Player if self.player.chips() <= 0 => self.mark_all_in(Actor::Player),
            Actor::Enemy => self.enemy_raised_this_phase = true,
            _ => {}
        }
        self.pass_turn(actor);
        self.emit(EngineEvent::StateChanged);
        Ok(())
    }

    /// Matches the opponent's contribution; a player who cannot cover it goes all-in.
    pub fn call(&mut self, actor: Actor) -> Result<(), GameError> {
        self.check_betting(actor, "call")?;
        let (own, other) = match actor {
            Actor::Player => (&self.player, &self.enemy),
            Actor::Enemy => (&self.enemy, &self.player),
        };
        let needed = other.contributed_this_phase() - own.contributed_this_phase();
        let chips = actor.is_player().then(|| own.chips());
        let validated = validate_call(needed, chips);
        let cost = validated.cost();

        self.seat_mut(actor).pay(cost);
        self.seat_mut(actor).mark_acted();
        self.pot += cost;
        self.record_action(actor, PlayerAction::Call, cost);
        tracing::debug!(%actor, cost, "call");
        if matches!(validated, ValidatedAction::AllIn { .. }) {
            self.mark_all_in(actor);
        }

        if !self.try_advance_phase()? {
            self.pass_turn(actor);
        }
        self.emit(EngineEvent::StateChanged);
        Ok(())
    }

    /// Forfeits the round unless an observer locks settlement on the fold.
    pub fn fold(&mut self, actor: Actor) -> Result<(), GameError> {
        self.check_betting(actor, "fold")?;
        self.record_action(actor, PlayerAction::Fold, 0);
        tracing::debug!(%actor, "fold");
        self.emit(EngineEvent::Fold {
            player_folded: actor.is_player(),
        });
        if !self.settlement_locked {
            self.settle(actor.opponent(), SettlementReason::Fold)?;
        }
        self.emit(EngineEvent::StateChanged);
        Ok(())
    }

    /// Forces the next phase regardless of contribution parity.
    pub fn skip_phase(&mut self) -> Result<(), GameError> {
        let check = if self.game_over {
            Err(GameError::GameOver)
        } else if self.cards.is_none() {
            Err(GameError::RoundNotDealt)
        } else if self.settlement_locked {
            Err(GameError::SettlementLocked)
        } else if self.phase == Phase::Showdown {
            Err(GameError::RoundOver)
        } else {
            Ok(())
        };
        if let Err(e) = check {
            tracing::debug!(error = %e, "skip_phase rejected");
            return Err(e);
        }
        self.advance_phase()?;
        self.emit(EngineEvent::StateChanged);
        Ok(())
    }

    fn seat_mut(&mut self, actor: Actor) -> &mut Seat {
        match actor {
            Actor::Player => &mut self.player,
            Actor::Enemy => &mut self.enemy,
        }
    }

    fn pass_turn(&mut self, actor: Actor) {
        if !self.settlement_locked {
            self.turn = TurnState::for_actor(actor.opponent());
        }
    }

    fn mark_all_in(&mut self, actor: Actor) {
        if self.is_all_in {
            return;
        }
        self.is_all_in = true;
        tracing::debug!(%actor, round = self.round, "all-in");
        self.emit(EngineEvent::AllIn { actor });
    }

    fn record_action(&mut self, actor: Actor, action: PlayerAction, amount: i64) {
        self.record.actions.push(ActionRecord {
            actor,
            phase: self.phase,
            action,
            amount,
        });
    }

    // ---- phase progression ----

    fn try_advance_phase(&mut self) -> Result<bool, GameError> {
        if self.settlement_locked {
            return Ok(false);
        }
        let both_acted = self.player.acted_this_phase() && self.enemy.acted_this_phase();
        let level =
            self.player.contributed_this_phase() == self.enemy.contributed_this_phase();
        if both_acted && (level || self.is_all_in) {
            self.advance_phase()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn advance_phase(&mut self) -> Result<(), GameError> {
        self.cancel_think();
        self.player.reset_phase();
        self.enemy.reset_phase();
        self.enemy_raised_this_phase = false;
        let from = self.phase;
        self.phase = if self.is_all_in {
            Phase::Showdown
        } else {
            from.next()
        };
        self.turn = TurnState::Dealing;
        tracing::debug!(round = self.round, ?from, to = ?self.phase, "phase advanced");
        self.emit(EngineEvent::PhaseChanged(self.phase));

        if let Some(cards) = self.cards {
            let revealed = &cards.board[from.visible_board()..self.phase.visible_board()];
            if revealed.iter().any(Card::is_joker) {
                self.emit(EngineEvent::JokerRevealed {
                    in_player_hand: false,
                    in_enemy_hand: false,
                    on_board: true,
                });
            }
        }

        if self.phase == Phase::Showdown && !self.settlement_locked {
            self.resolve_showdown()?;
        }
        Ok(())
    }

    fn resolve_showdown(&mut self) -> Result<(), GameError> {
        let cards = self.cards.ok_or(GameError::RoundNotDealt)?;
        let outcome = self
            .resolver
            .resolve(&cards.pool(Actor::Player), &cards.pool(Actor::Enemy))
            .inspect_err(|e| {
                tracing::error!(round = self.round, error = %e, "showdown evaluation failed");
            })?;
        self.last_showdown = Some(outcome);
        self.record.showdown = Some(ShowdownInfo {
            player_hand: outcome.type_a(),
            player_best: outcome.best_a.cards.to_vec(),
            enemy_hand: outcome.type_b(),
            enemy_best: outcome.best_b.cards.to_vec(),
            tie: outcome.is_tie(),
        });
        tracing::debug!(
            round = self.round,
            player = outcome.type_a().name(),
            enemy = outcome.type_b().name(),
            player_wins = outcome.a_wins,
            "showdown"
        );
        self.emit(EngineEvent::ShowdownResolved(outcome));
        if self.settlement_locked {
            return Ok(());
        }
        let winner = if outcome.a_wins {
            Actor::Player
        } else {
            Actor::Enemy
        };
        self.settle(winner, SettlementReason::Showdown)
    }

    // ---- settlement ----

    /// Awards the pot to the player. Also releases a settlement lock.
    pub fn player_wins(&mut self) -> Result<(), GameError> {
        self.settle_manually(Actor::Player)
    }

    /// Awards the pot to the enemy. Also releases a settlement lock.
    pub fn enemy_wins(&mut self) -> Result<(), GameError> {
        self.settle_manually(Actor::Enemy)
    }

    fn settle_manually(&mut self, winner: Actor) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        if self.cards.is_none() {
            return Err(GameError::RoundNotDealt);
        }
        if self.round_settled {
            // pot already awarded; only the held restart is left
            tracing::debug!(round = self.round, %winner, "releasing lock on a settled round");
            self.settlement_locked = false;
            self.end_settlement()?;
        } else {
            self.settle(winner, SettlementReason::Manual)?;
        }
        self.emit(EngineEvent::StateChanged);
        Ok(())
    }

    fn settle(&mut self, winner: Actor, reason: SettlementReason) -> Result<(), GameError> {
        let pot = self.pot;
        self.seat_mut(winner).add_chips(pot);
        self.round_settled = true;
        self.settlement_locked = false;
        self.turn = TurnState::Settlement;
        self.cancel_think();

        let mut record = self.record.clone();
        record.pot = pot;
        record.winner = Some(winner);
        record.reason = Some(reason);
        self.record = record.clone();
        tracing::info!(
            round = self.round,
            %winner,
            pot,
            ?reason,
            player_chips = self.player.chips(),
            "round settled"
        );
        self.emit(EngineEvent::RoundSettled {
            winner,
            pot,
            record: Box::new(record),
        });
        self.end_settlement()
    }

    fn end_settlement(&mut self) -> Result<(), GameError> {
        self.pot = 0;
        self.player.reset_round();
        self.enemy.reset_round();
        let chips = self.player.chips();
        if chips < 0 {
            self.game_over = true;
            self.turn = TurnState::Settlement;
            tracing::warn!(round = self.round, chips, "game over");
            self.emit(EngineEvent::GameOver { chips });
            return Ok(());
        }
        if self.settlement_locked {
            tracing::debug!(round = self.round, "restart held by settlement lock");
            return Ok(());
        }
        self.start_round()
    }

    /// Freezes the round in [`TurnState::Settlement`] until
    /// [`BettingEngine::player_wins`] or [`BettingEngine::enemy_wins`] is called.
    pub fn lock_settlement(&mut self) {
        if self.game_over || self.cards.is_none() {
            return;
        }
        self.apply_lock();
        self.emit(EngineEvent::StateChanged);
    }

    // ---- chips & cards ----

    /// Spends chips outside of betting. Refused (returns `false`) when the
    /// amount is negative or exceeds the stack.
    pub fn try_spend_chips(&mut self, amount: i64) -> bool {
        if amount < 0 || self.player.chips() < amount {
            tracing::debug!(amount, chips = self.player.chips(), "spend refused");
            return false;
        }
        self.player.add_chips(-amount);
        self.emit(EngineEvent::StateChanged);
        true
    }

    pub fn try_use_ability(&mut self, ability: Ability) -> bool {
        let cost = self.config.abilities.cost(ability);
        let spent = self.try_spend_chips(cost);
        tracing::debug!(?ability, cost, spent, "ability");
        spent
    }

    /// Replaces the round's cards, e.g. after a swap or draw ability.
    pub fn replace_cards(&mut self, cards: DealtCards) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        if self.cards.is_none() {
            return Err(GameError::RoundNotDealt);
        }
        if self.phase == Phase::Showdown {
            return Err(GameError::RoundOver);
        }
        self.cards = Some(cards);
        self.record.player_hole = cards.player.to_vec();
        self.record.enemy_hole = cards.enemy.to_vec();
        self.record.board = cards.board.to_vec();
        self.emit(EngineEvent::StateChanged);
        Ok(())
    }

    fn betting_open(&self) -> bool {
        !self.game_over
            && self.cards.is_some()
            && !self.settlement_locked
            && self.thinking.is_none()
            && self.phase != Phase::Showdown
    }

    pub fn can_raise(&self) -> bool {
        self.turn == TurnState::PlayerTurn
            && self.betting_open()
            && validate_player_raise(
                self.global_stake,
                self.player.contributed_this_phase(),
                self.player.chips(),
                self.is_all_in,
            )
            .is_ok()
    }

    pub fn can_call(&self) -> bool {
        self.turn == TurnState::PlayerTurn && self.betting_open()
    }

    // ---- enemy think cycle ----

    /// Starts an enemy deliberation if it is the enemy's turn and none is pending.
    pub fn begin_enemy_think(&mut self) -> Option<ThinkTicket> {
        if self.turn != TurnState::EnemyTurn
            || self.phase == Phase::Showdown
            || self.settlement_locked
            || self.game_over
            || self.thinking.is_some()
        {
            return None;
        }
        let window = self.config.think_time;
        let ms = self.rng.random_range(window.min_ms..=window.max_ms);
        self.next_ticket += 1;
        let ticket = ThinkTicket {
            id: self.next_ticket,
            epoch: self.epoch,
            delay: Duration::from_millis(ms),
        };
        self.thinking = Some(ticket);
        tracing::debug!(ticket = ticket.id, delay_ms = ms, "enemy thinking");
        self.emit(EngineEvent::StateChanged);
        // an observer may have locked the table on the notification
        self.thinking
    }

    /// Completes a deliberation: consults the policy and applies its decision.
    ///
    /// Returns `Ok(None)` when the ticket went stale while the driver waited.
    pub fn finish_enemy_think(
        &mut self,
        ticket: ThinkTicket,
    ) -> Result<Option<EnemyDecision>, GameError> {
        if self.thinking != Some(ticket) {
            tracing::debug!(ticket = ticket.id, "discarding stale think ticket");
            return Ok(None);
        }
        self.thinking = None;
        if ticket.epoch != self.epoch
            || self.turn != TurnState::EnemyTurn
            || self.settlement_locked
            || self.phase == Phase::Showdown
            || self.game_over
        {
            tracing::debug!(ticket = ticket.id, "table moved on while enemy was thinking");
            return Ok(None);
        }

        let visible = self.enemy_visible_cards();
        let mut decision = self.policy.decide(&visible, &mut self.rng);
        if decision == EnemyDecision::Raise && (self.enemy_raised_this_phase || self.is_all_in) {
            decision = EnemyDecision::Call;
        }
        tracing::debug!(policy = self.policy.name(), ?decision, "enemy decided");
        match decision {
            EnemyDecision::Raise => self.raise(Actor::Enemy)?,
            EnemyDecision::Call => self.call(Actor::Enemy)?,
            EnemyDecision::Fold => self.fold(Actor::Enemy)?,
        }
        Ok(Some(decision))
    }

    /// Runs a full think cycle without waiting.
    pub fn run_enemy_turn(&mut self) -> Result<Option<EnemyDecision>, GameError> {
        match self.begin_enemy_think() {
            Some(ticket) => self.finish_enemy_think(ticket),
            None => Ok(None),
        }
    }

    // ---- read-only view ----

    pub fn visible_board(&self) -> Vec<Card> {
        match &self.cards {
            Some(cards) => cards.board[..self.phase.visible_board()].to_vec(),
            None => Vec::new(),
        }
    }

    /// The enemy's hole cards followed by the face-up board.
    pub fn enemy_visible_cards(&self) -> Vec<Card> {
        match &self.cards {
            Some(cards) => {
                let mut v = cards.enemy.to_vec();
                v.extend_from_slice(&cards.board[..self.phase.visible_board()]);
                v
            }
            None => Vec::new(),
        }
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            round: self.round,
            phase: self.phase,
            turn: self.turn,
            pot: self.pot,
            global_stake: self.global_stake,
            player: self.player.clone(),
            enemy: self.enemy.clone(),
            is_all_in: self.is_all_in,
            settlement_locked: self.settlement_locked,
            enemy_thinking: self.thinking.is_some(),
            game_over: self.game_over,
            visible_board: self.visible_board(),
            player_hole: self.cards.map(|c| c.player),
        }
    }

    pub fn last_showdown(&self) -> Option<&ShowdownOutcome> {
        self.last_showdown.as_ref()
    }

    /// History of the current round, or the last settled one.
    pub fn round_record(&self) -> &RoundRecord {
        &self.record
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    /// Seed actually in use, drawn from entropy when the config has none.
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn evaluator(&self) -> &HandEvaluator {
        &self.evaluator
    }
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }
    pub fn cards(&self) -> Option<&DealtCards> {
        self.cards.as_ref()
    }
    pub fn player(&self) -> &Seat {
        &self.player
    }
    pub fn enemy(&self) -> &Seat {
        &self.enemy
    }
    pub fn pot(&self) -> i64 {
        self.pot
    }
    pub fn global_stake(&self) -> i64 {
        self.global_stake
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn turn(&self) -> TurnState {
        self.turn
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }
    pub fn is_settlement_locked(&self) -> bool {
        self.settlement_locked
    }
    pub fn is_enemy_thinking(&self) -> bool {
        self.thinking.is_some()
    }
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
    pub fn enemy_raised_this_phase(&self) -> bool {
        self.enemy_raised_this_phase
    }
}
