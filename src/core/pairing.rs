use std::collections::HashSet;

use thiserror::Error;

use crate::core::history::MatchHistory;
use crate::core::standings::rank_players;
use crate::models::{
    ByeAssignment, MatchRecord, Pairing, PairingRound, Player, PlayerId, StandingEntry,
};

/// Errors the pairing computation can surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    #[error("pairing requires at least two registered players, found {0}")]
    InsufficientPlayers(usize),

    #[error("no unplayed opponent remains for player {player_id} at rank {rank}")]
    Exhausted { player_id: PlayerId, rank: usize },
}

/// Propose the next round of a Swiss-system tournament.
///
/// Pure computation over a snapshot of registered players, match history,
/// and previously awarded byes; calling it twice over the same snapshot
/// yields the same round. Nothing is written here — the caller records the
/// bye once the round is confirmed.
///
/// # Algorithm
/// Players are ranked by [`rank_players`] and paired adjacently: rank 1
/// vs rank 2, rank 3 vs rank 4, and so on. When an adjacent pair has
/// already met, the nearest lower-ranked player the leader has not faced
/// is pulled up into the slot and everyone in between shifts down one
/// place. With an odd field, the lowest-ranked player without a prior
/// bye sits out before pairing begins.
///
/// # Errors
/// [`PairingError::InsufficientPlayers`] below two registered players.
/// [`PairingError::Exhausted`] when the greedy forward scan finds no
/// unplayed opponent — possible in histories where a whole rank band has
/// already met (a rematch is never emitted silently in its place).
pub fn swiss_pairings(
    players: &[Player],
    matches: &[MatchRecord],
    byes: &[PlayerId],
) -> Result<PairingRound, PairingError> {
    if players.len() < 2 {
        return Err(PairingError::InsufficientPlayers(players.len()));
    }

    let mut ordered = rank_players(players, matches);
    let history = MatchHistory::from_matches(matches);

    let bye = if ordered.len() % 2 == 1 {
        Some(take_bye_recipient(&mut ordered, byes))
    } else {
        None
    };

    let mut pairings = Vec::with_capacity(ordered.len() / 2);
    let mut i = 0;
    while i + 1 < ordered.len() {
        if history.have_played(ordered[i].id, ordered[i + 1].id) {
            let replacement = (i + 2..ordered.len())
                .find(|&j| !history.have_played(ordered[i].id, ordered[j].id))
                .ok_or(PairingError::Exhausted {
                    player_id: ordered[i].id,
                    rank: i + 1,
                })?;
            let candidate = ordered.remove(replacement);
            ordered.insert(i + 1, candidate);
        }

        pairings.push(Pairing {
            player1_id: ordered[i].id,
            player1_name: ordered[i].name.clone(),
            player2_id: ordered[i + 1].id,
            player2_name: ordered[i + 1].name.clone(),
        });
        i += 2;
    }

    Ok(PairingRound { pairings, bye })
}

/// Remove and return the round's bye recipient: the lowest-ranked player
/// without a recorded bye, or the lowest-ranked player outright once
/// everyone has had one.
fn take_bye_recipient(ordered: &mut Vec<StandingEntry>, byes: &[PlayerId]) -> ByeAssignment {
    let prior: HashSet<PlayerId> = byes.iter().copied().collect();
    let index = ordered
        .iter()
        .rposition(|entry| !prior.contains(&entry.id))
        .unwrap_or(ordered.len() - 1);
    let entry = ordered.remove(index);
    ByeAssignment {
        player_id: entry.id,
        player_name: entry.name,
    }
}
