//! Flat round/match records handed to the storage layer.

use crate::models::game::GameType;
use crate::models::player::PlayerId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    #[default]
    Pending,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    /// Only bye matches start out completed.
    Completed,
}

/// One persisted round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub id: Uuid,
    pub tournament_id: TournamentId,
    pub round_number: u32,
    pub round_name: String,
    pub game_type: GameType,
    pub prize_per_round: f64,
    pub status: RoundStatus,
}

/// One persisted match. For a bye, the real player is always player 1 and
/// is already recorded as the winner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub tournament_id: TournamentId,
    pub round_id: Uuid,
    pub round_number: u32,
    /// 1-based position within the round.
    pub match_number: u32,
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: Option<PlayerId>,
    pub player2_name: Option<String>,
    pub is_bye: bool,
    pub payout_amount: f64,
    pub status: MatchStatus,
    pub winner_id: Option<PlayerId>,
    pub winner_name: Option<String>,
}

/// Everything the storage layer needs to persist a bracket.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseObjects {
    pub rounds: Vec<RoundRecord>,
    pub matches: Vec<MatchRecord>,
}
