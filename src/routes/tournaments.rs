use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{rank_players, swiss_pairings, PairingError};
use crate::models::{
    DeleteResponse, ErrorResponse, HealthResponse, PairingsResponse, PlayerCountResponse,
    RecordByeRequest, RecordByeResponse, RegisterPlayerRequest, RegisterPlayerResponse,
    ReportMatchRequest, ReportMatchResponse, StandingsResponse, TournamentId, TournamentScope,
};
use crate::services::{PostgresClient, StorageError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
}

/// Configure all tournament-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/players", web::post().to(register_player))
        .route("/players", web::delete().to(clear_players))
        .route("/players/count", web::get().to(count_players))
        .route("/matches", web::post().to(report_match))
        .route("/matches", web::delete().to(clear_matches))
        .route("/byes", web::post().to(record_bye))
        .route(
            "/tournaments/{tournament_id}/standings",
            web::get().to(standings),
        )
        .route(
            "/tournaments/{tournament_id}/pairings",
            web::get().to(pairings),
        );
}

/// Map a storage failure onto the uniform error body
fn storage_error(context: &str, err: StorageError) -> HttpResponse {
    match err {
        StorageError::Validation(message) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message,
            status_code: 400,
        }),
        StorageError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message,
            status_code: 404,
        }),
        other => {
            tracing::error!("{}: {}", context, other);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: context.to_string(),
                message: other.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Register a player endpoint
///
/// POST /api/v1/players
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "tournamentId": 1
/// }
/// ```
async fn register_player(
    state: web::Data<AppState>,
    req: web::Json<RegisterPlayerRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .postgres
        .create_player(&req.name, req.tournament_id)
        .await
    {
        Ok(player_id) => {
            tracing::info!(
                "Registered player {} ({}) in tournament {}",
                player_id,
                req.name,
                req.tournament_id
            );
            HttpResponse::Ok().json(RegisterPlayerResponse {
                player_id,
                name: req.name.clone(),
                tournament_id: req.tournament_id,
            })
        }
        Err(e) => storage_error("Failed to register player", e),
    }
}

/// Player count endpoint
///
/// GET /api/v1/players/count?tournamentId={id}
async fn count_players(
    state: web::Data<AppState>,
    query: web::Query<TournamentScope>,
) -> impl Responder {
    match state.postgres.count_players(query.tournament_id).await {
        Ok(count) => HttpResponse::Ok().json(PlayerCountResponse {
            tournament_id: query.tournament_id,
            count,
        }),
        Err(e) => storage_error("Failed to count players", e),
    }
}

/// Bulk-clear players endpoint, used by test/reset flows
///
/// DELETE /api/v1/players?tournamentId={id}
async fn clear_players(
    state: web::Data<AppState>,
    query: web::Query<TournamentScope>,
) -> impl Responder {
    match state.postgres.delete_players(query.tournament_id).await {
        Ok(rows_deleted) => HttpResponse::Ok().json(DeleteResponse {
            success: true,
            rows_deleted,
        }),
        Err(e) => storage_error("Failed to clear players", e),
    }
}

/// Report match endpoint
///
/// POST /api/v1/matches
///
/// Request body:
/// ```json
/// {
///   "winnerId": 1,
///   "loserId": 2,
///   "tournamentId": 1
/// }
/// ```
async fn report_match(
    state: web::Data<AppState>,
    req: web::Json<ReportMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .postgres
        .record_match(req.winner_id, req.loser_id, req.tournament_id)
        .await
    {
        Ok(match_id) => {
            tracing::info!(
                "Match {}: {} beat {} (tournament {})",
                match_id,
                req.winner_id,
                req.loser_id,
                req.tournament_id
            );
            HttpResponse::Ok().json(ReportMatchResponse {
                success: true,
                match_id,
            })
        }
        Err(e) => storage_error("Failed to record match", e),
    }
}

/// Bulk-clear matches endpoint, used by test/reset flows
///
/// DELETE /api/v1/matches?tournamentId={id}
async fn clear_matches(
    state: web::Data<AppState>,
    query: web::Query<TournamentScope>,
) -> impl Responder {
    match state.postgres.delete_matches(query.tournament_id).await {
        Ok(rows_deleted) => HttpResponse::Ok().json(DeleteResponse {
            success: true,
            rows_deleted,
        }),
        Err(e) => storage_error("Failed to clear matches", e),
    }
}

/// Record bye endpoint
///
/// POST /api/v1/byes
///
/// Called when a round's results are confirmed, so the next pairing call
/// skips the recipient. Recording the same bye twice is a no-op.
async fn record_bye(
    state: web::Data<AppState>,
    req: web::Json<RecordByeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state
        .postgres
        .record_bye(req.player_id, req.tournament_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(RecordByeResponse {
            success: true,
            player_id: req.player_id,
            tournament_id: req.tournament_id,
        }),
        Err(e) => storage_error("Failed to record bye", e),
    }
}

/// Standings endpoint
///
/// GET /api/v1/tournaments/{id}/standings
///
/// Returns every registered player ranked by wins (ties broken by the
/// lower id). A tournament with no players yields an empty list.
async fn standings(state: web::Data<AppState>, path: web::Path<TournamentId>) -> impl Responder {
    let tournament_id = path.into_inner();

    let players = match state.postgres.fetch_players(tournament_id).await {
        Ok(players) => players,
        Err(e) => return storage_error("Failed to fetch players", e),
    };

    let matches = match state.postgres.fetch_matches(tournament_id).await {
        Ok(matches) => matches,
        Err(e) => return storage_error("Failed to fetch matches", e),
    };

    let ranked = rank_players(&players, &matches);

    tracing::debug!(
        "Standings for tournament {}: {} players, {} matches",
        tournament_id,
        ranked.len(),
        matches.len()
    );

    HttpResponse::Ok().json(StandingsResponse {
        tournament_id,
        standings: ranked,
        total_matches: matches.len(),
    })
}

/// Pairings endpoint
///
/// GET /api/v1/tournaments/{id}/pairings
///
/// Derives the next round from the current standings and match history.
/// Repeating the call without new results returns the same round.
async fn pairings(state: web::Data<AppState>, path: web::Path<TournamentId>) -> impl Responder {
    let tournament_id = path.into_inner();

    let players = match state.postgres.fetch_players(tournament_id).await {
        Ok(players) => players,
        Err(e) => return storage_error("Failed to fetch players", e),
    };

    let matches = match state.postgres.fetch_matches(tournament_id).await {
        Ok(matches) => matches,
        Err(e) => return storage_error("Failed to fetch matches", e),
    };

    let byes = match state.postgres.fetch_byes(tournament_id).await {
        Ok(byes) => byes,
        Err(e) => return storage_error("Failed to fetch byes", e),
    };

    match swiss_pairings(&players, &matches, &byes) {
        Ok(round) => {
            tracing::info!(
                "Paired tournament {}: {} pairings, bye: {:?}",
                tournament_id,
                round.pairings.len(),
                round.bye.as_ref().map(|b| b.player_id)
            );
            HttpResponse::Ok().json(PairingsResponse {
                tournament_id,
                pairings: round.pairings,
                bye: round.bye,
            })
        }
        Err(e @ PairingError::InsufficientPlayers(_)) => {
            HttpResponse::Conflict().json(ErrorResponse {
                error: "Insufficient players".to_string(),
                message: e.to_string(),
                status_code: 409,
            })
        }
        Err(e @ PairingError::Exhausted { .. }) => {
            tracing::warn!("Pairing tournament {} failed: {}", tournament_id, e);
            HttpResponse::Conflict().json(ErrorResponse {
                error: "Pairing exhausted".to_string(),
                message: e.to_string(),
                status_code: 409,
            })
        }
    }
}
