use std::collections::HashMap;

use crate::models::{MatchRecord, Player, PlayerId, StandingEntry};

/// Rank a tournament's players by win count.
///
/// Pure computation over a snapshot of the registered players and the
/// match history. Every registered player appears in the result, with
/// zeros if they have not played yet.
///
/// # Ordering
/// Wins descending; equal wins fall back to the lower player id so the
/// order is total and reproducible run to run.
pub fn rank_players(players: &[Player], matches: &[MatchRecord]) -> Vec<StandingEntry> {
    let mut tallies: HashMap<PlayerId, (u32, u32)> = HashMap::with_capacity(players.len());
    for player in players {
        tallies.insert(player.id, (0, 0));
    }

    // (wins, played) per player; matches referencing unregistered ids
    // are ignored rather than invented into the standings.
    for record in matches {
        if let Some(tally) = tallies.get_mut(&record.winner_id) {
            tally.0 += 1;
            tally.1 += 1;
        }
        if let Some(tally) = tallies.get_mut(&record.loser_id) {
            tally.1 += 1;
        }
    }

    let mut standings: Vec<StandingEntry> = players
        .iter()
        .map(|player| {
            let (wins, played) = tallies.get(&player.id).copied().unwrap_or((0, 0));
            StandingEntry {
                id: player.id,
                name: player.name.clone(),
                wins,
                matches: played,
            }
        })
        .collect();

    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id)));

    standings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_player(id: PlayerId, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            tournament_id: 1,
            registered_at: None,
        }
    }

    #[test]
    fn test_empty_tournament() {
        let standings = rank_players(&[], &[]);
        assert!(standings.is_empty());
    }

    #[test]
    fn test_no_matches_orders_by_id() {
        let players = vec![
            create_player(3, "Carol"),
            create_player(1, "Alice"),
            create_player(2, "Bob"),
        ];

        let standings = rank_players(&players, &[]);

        let ids: Vec<PlayerId> = standings.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(standings.iter().all(|e| e.wins == 0 && e.matches == 0));
    }

    #[test]
    fn test_winners_rank_above_losers() {
        let players = vec![
            create_player(1, "Alice"),
            create_player(2, "Bob"),
            create_player(3, "Carol"),
            create_player(4, "Dave"),
        ];
        let matches = vec![
            MatchRecord {
                winner_id: 1,
                loser_id: 2,
            },
            MatchRecord {
                winner_id: 3,
                loser_id: 4,
            },
        ];

        let standings = rank_players(&players, &matches);

        let ids: Vec<PlayerId> = standings.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
        assert_eq!(standings[0].wins, 1);
        assert_eq!(standings[2].wins, 0);
        assert!(standings.iter().all(|e| e.matches == 1));
    }

    #[test]
    fn test_wins_sum_to_match_count() {
        let players = vec![
            create_player(1, "Alice"),
            create_player(2, "Bob"),
            create_player(3, "Carol"),
            create_player(4, "Dave"),
        ];
        let matches = vec![
            MatchRecord {
                winner_id: 1,
                loser_id: 2,
            },
            MatchRecord {
                winner_id: 1,
                loser_id: 3,
            },
            MatchRecord {
                winner_id: 4,
                loser_id: 1,
            },
            MatchRecord {
                winner_id: 2,
                loser_id: 3,
            },
        ];

        let standings = rank_players(&players, &matches);

        let total_wins: u32 = standings.iter().map(|e| e.wins).sum();
        assert_eq!(total_wins as usize, matches.len());
        assert!(standings.iter().all(|e| e.wins <= e.matches));
    }

    #[test]
    fn test_idempotent_for_same_snapshot() {
        let players = vec![
            create_player(1, "Alice"),
            create_player(2, "Bob"),
            create_player(3, "Carol"),
        ];
        let matches = vec![MatchRecord {
            winner_id: 2,
            loser_id: 3,
        }];

        let first = rank_players(&players, &matches);
        let second = rank_players(&players, &matches);

        assert_eq!(first, second);
    }
}
