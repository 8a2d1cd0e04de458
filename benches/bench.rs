// Criterion benchmarks for Swisspair

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swisspair::core::{history::MatchHistory, pairing::swiss_pairings, standings::rank_players};
use swisspair::models::{MatchRecord, Player, PlayerId};

fn create_players(count: usize) -> Vec<Player> {
    (1..=count as PlayerId)
        .map(|id| Player {
            id,
            name: format!("Player {}", id),
            tournament_id: 1,
            registered_at: None,
        })
        .collect()
}

/// Play out full rounds with the higher-ranked player always winning,
/// producing a realistic mid-tournament history.
fn play_rounds(players: &[Player], rounds: usize) -> Vec<MatchRecord> {
    let mut matches = Vec::new();
    for _ in 0..rounds {
        let round = match swiss_pairings(players, &matches, &[]) {
            Ok(round) => round,
            Err(_) => break,
        };
        for pairing in &round.pairings {
            matches.push(MatchRecord {
                winner_id: pairing.player1_id,
                loser_id: pairing.player2_id,
            });
        }
    }
    matches
}

fn bench_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("standings");

    for player_count in [16, 64, 256, 1024].iter() {
        let players = create_players(*player_count);
        let matches = play_rounds(&players, 3);

        group.bench_with_input(
            BenchmarkId::new("rank_players", player_count),
            player_count,
            |b, _| {
                b.iter(|| rank_players(black_box(&players), black_box(&matches)));
            },
        );
    }

    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairing");

    for player_count in [16, 64, 256, 1024].iter() {
        let players = create_players(*player_count);
        let matches = play_rounds(&players, 3);

        group.bench_with_input(
            BenchmarkId::new("swiss_pairings", player_count),
            player_count,
            |b, _| {
                b.iter(|| {
                    swiss_pairings(black_box(&players), black_box(&matches), black_box(&[]))
                });
            },
        );
    }

    group.finish();
}

fn bench_history_build(c: &mut Criterion) {
    let players = create_players(256);
    let matches = play_rounds(&players, 5);

    c.bench_function("match_history_from_256_players", |b| {
        b.iter(|| MatchHistory::from_matches(black_box(&matches)));
    });
}

criterion_group!(benches, bench_standings, bench_pairing, bench_history_build);

criterion_main!(benches);
