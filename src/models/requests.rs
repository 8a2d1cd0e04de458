use serde::{Deserialize, Serialize};
use validator::Validate;

use super::domain::{PlayerId, TournamentId};

/// Request to register a player into a tournament
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPlayerRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(alias = "tournament_id", rename = "tournamentId")]
    pub tournament_id: TournamentId,
}

/// Request to report a match result
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReportMatchRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "winner_id", rename = "winnerId")]
    pub winner_id: PlayerId,
    #[validate(range(min = 1))]
    #[serde(alias = "loser_id", rename = "loserId")]
    pub loser_id: PlayerId,
    #[serde(alias = "tournament_id", rename = "tournamentId")]
    pub tournament_id: TournamentId,
}

/// Request to record a confirmed bye for a round
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordByeRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "player_id", rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(alias = "tournament_id", rename = "tournamentId")]
    pub tournament_id: TournamentId,
}

/// Query scoping a bulk operation to one tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentScope {
    #[serde(default, alias = "tournament_id", rename = "tournamentId")]
    pub tournament_id: Option<TournamentId>,
}
