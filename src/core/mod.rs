// Core algorithm exports
pub mod history;
pub mod pairing;
pub mod standings;

pub use history::MatchHistory;
pub use pairing::{swiss_pairings, PairingError};
pub use standings::rank_players;
