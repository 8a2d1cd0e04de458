use std::collections::HashSet;

use crate::models::{MatchRecord, PlayerId};

/// Orientation-free record of which players have already met.
///
/// Built once per pairing call from the tournament's match list; the
/// pairing walk queries it for every candidate pair.
#[derive(Debug, Default)]
pub struct MatchHistory {
    played: HashSet<(PlayerId, PlayerId)>,
}

impl MatchHistory {
    pub fn from_matches(matches: &[MatchRecord]) -> Self {
        let mut played = HashSet::with_capacity(matches.len());
        for record in matches {
            played.insert(pair_key(record.winner_id, record.loser_id));
        }
        Self { played }
    }

    /// True if the two players have met, in either win/loss orientation.
    pub fn have_played(&self, a: PlayerId, b: PlayerId) -> bool {
        self.played.contains(&pair_key(a, b))
    }
}

#[inline]
fn pair_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let history = MatchHistory::from_matches(&[]);
        assert!(!history.have_played(1, 2));
    }

    #[test]
    fn test_orientation_ignored() {
        let matches = vec![MatchRecord {
            winner_id: 2,
            loser_id: 5,
        }];
        let history = MatchHistory::from_matches(&matches);

        assert!(history.have_played(2, 5));
        assert!(history.have_played(5, 2));
        assert!(!history.have_played(2, 3));
    }

    #[test]
    fn test_repeat_results_collapse() {
        // The same pair reported twice still counts as one prior meeting.
        let matches = vec![
            MatchRecord {
                winner_id: 1,
                loser_id: 2,
            },
            MatchRecord {
                winner_id: 2,
                loser_id: 1,
            },
        ];
        let history = MatchHistory::from_matches(&matches);

        assert!(history.have_played(1, 2));
    }
}
