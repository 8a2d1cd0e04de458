use serde::{Deserialize, Serialize};

/// Database-assigned player identifier, unique across the system.
pub type PlayerId = i32;

/// Tournament namespace identifier.
pub type TournamentId = i32;

/// A registered player. Immutable once created; belongs to exactly one
/// tournament (entering another tournament means registering again).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(rename = "tournamentId")]
    pub tournament_id: TournamentId,
    #[serde(default)]
    pub registered_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// One reported match result. Append-only; the historical record from
/// which standings and rematch checks are derived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "winnerId")]
    pub winner_id: PlayerId,
    #[serde(rename = "loserId")]
    pub loser_id: PlayerId,
}

/// A player's place in the current ranking. Derived on every call,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

/// A proposed opponent assignment for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    #[serde(rename = "player1Id")]
    pub player1_id: PlayerId,
    #[serde(rename = "player1Name")]
    pub player1_name: String,
    #[serde(rename = "player2Id")]
    pub player2_id: PlayerId,
    #[serde(rename = "player2Name")]
    pub player2_name: String,
}

/// The player sitting out an odd-sized round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByeAssignment {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "playerName")]
    pub player_name: String,
}

/// A complete next-round proposal: floor(N/2) pairings plus at most one bye.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingRound {
    pub pairings: Vec<Pairing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bye: Option<ByeAssignment>,
}
