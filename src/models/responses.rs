use serde::{Deserialize, Serialize};

use super::domain::{ByeAssignment, Pairing, PlayerId, StandingEntry, TournamentId};

/// Response for player registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPlayerResponse {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    pub name: String,
    #[serde(rename = "tournamentId")]
    pub tournament_id: TournamentId,
}

/// Response for a reported match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMatchResponse {
    pub success: bool,
    #[serde(rename = "matchId")]
    pub match_id: i32,
}

/// Response for the standings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    #[serde(rename = "tournamentId")]
    pub tournament_id: TournamentId,
    pub standings: Vec<StandingEntry>,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Response for the pairings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingsResponse {
    #[serde(rename = "tournamentId")]
    pub tournament_id: TournamentId,
    pub pairings: Vec<Pairing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bye: Option<ByeAssignment>,
}

/// Response for the player count endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCountResponse {
    #[serde(rename = "tournamentId", skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<TournamentId>,
    pub count: i64,
}

/// Response for a recorded bye
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordByeResponse {
    pub success: bool,
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "tournamentId")]
    pub tournament_id: TournamentId,
}

/// Response for bulk delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(rename = "rowsDeleted")]
    pub rows_deleted: u64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
