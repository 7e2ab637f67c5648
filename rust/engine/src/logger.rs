use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::hand::HandType;
use crate::player::{Actor, PlayerAction};

/// Records a single betting action during a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub actor: Actor,
    /// The phase when this action occurred
    pub phase: Phase,
    pub action: PlayerAction,
    /// Chips moved into the pot by this action
    pub amount: i64,
}

/// How a round's pot was awarded.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum SettlementReason {
    Fold,
    Showdown,
    /// Resolved by an external rule through `player_wins` / `enemy_wins`
    Manual,
}

/// Showdown details kept with the round record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub player_hand: HandType,
    pub player_best: Vec<Card>,
    pub enemy_hand: HandType,
    pub enemy_best: Vec<Card>,
    /// Both hands scored the same and the tie went to the player
    #[serde(default)]
    pub tie: bool,
}

/// Complete record of one round: cards, actions and outcome.
/// Serialized to JSONL for round history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number within the game, starting at 1
    pub round: u32,
    /// Seed the table was built with (enables deterministic replay)
    pub seed: Option<u64>,
    pub player_hole: Vec<Card>,
    pub enemy_hole: Vec<Card>,
    pub board: Vec<Card>,
    /// Chronological list of all actions, forced bets included
    pub actions: Vec<ActionRecord>,
    pub pot: i64,
    pub winner: Option<Actor>,
    pub reason: Option<SettlementReason>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
    /// Timestamp of settlement (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn new(round: u32, seed: Option<u64>) -> Self {
        Self {
            round,
            seed,
            player_hole: Vec::new(),
            enemy_hole: Vec::new(),
            board: Vec::new(),
            actions: Vec::new(),
            pot: 0,
            winner: None,
            reason: None,
            showdown: None,
            ts: None,
        }
    }

    /// Sum of every recorded contribution.
    pub fn contributed(&self) -> i64 {
        self.actions.iter().map(|a| a.amount).sum()
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// One JSON object per line, keyed by a `YYYYMMDD-NNNNNN` round id.
#[derive(Serialize)]
struct LoggedRound<'a> {
    round_id: String,
    #[serde(flatten)]
    record: &'a RoundRecord,
}

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&LoggedRound {
            round_id: self.next_id(),
            record: &rec,
        })
        .map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut logger = RoundLogger::with_seq_for_test("20260101");
        assert_eq!(logger.next_id(), "20260101-000001");
        assert_eq!(logger.next_id(), "20260101-000002");
    }

    #[test]
    fn contributed_sums_actions() {
        let mut rec = RoundRecord::new(1, Some(3));
        rec.actions.push(ActionRecord {
            actor: Actor::Player,
            phase: Phase::Preflop,
            action: PlayerAction::ForcedBet,
            amount: 1,
        });
        rec.actions.push(ActionRecord {
            actor: Actor::Enemy,
            phase: Phase::Preflop,
            action: PlayerAction::Raise,
            amount: 2,
        });
        assert_eq!(rec.contributed(), 3);
    }
}
