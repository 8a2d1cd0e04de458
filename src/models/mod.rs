// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ByeAssignment, MatchRecord, Pairing, PairingRound, Player, PlayerId, StandingEntry,
    TournamentId,
};
pub use requests::{RecordByeRequest, RegisterPlayerRequest, ReportMatchRequest, TournamentScope};
pub use responses::{
    DeleteResponse, ErrorResponse, HealthResponse, PairingsResponse, PlayerCountResponse,
    RecordByeResponse, RegisterPlayerResponse, ReportMatchResponse, StandingsResponse,
};
