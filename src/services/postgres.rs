use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::{MatchRecord, Player, PlayerId, TournamentId};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// PostgreSQL client owning the players, matches, and byes tables.
///
/// This is the single storage collaborator: registration and match
/// reports write through it, and the standings/pairing engines read
/// their snapshots from it. The client itself keeps no state beyond the
/// connection pool, so every call sees the database as it is.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StorageError> {
        tracing::info!("Connecting to PostgreSQL with URL: {}", url);

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Register a player into a tournament and return the assigned id
    pub async fn create_player(
        &self,
        name: &str,
        tournament_id: TournamentId,
    ) -> Result<PlayerId, StorageError> {
        let query = r#"
            INSERT INTO players (name, tournament_id)
            VALUES ($1, $2)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(name)
            .bind(tournament_id)
            .fetch_one(&self.pool)
            .await?;

        let player_id: PlayerId = row.get("id");

        tracing::debug!(
            "Registered player {} ({}) in tournament {}",
            player_id,
            name,
            tournament_id
        );

        Ok(player_id)
    }

    /// Bulk-clear player records, optionally scoped to one tournament.
    ///
    /// Matches and byes referencing the deleted players go with them
    /// (foreign keys cascade). Used by test/reset flows.
    pub async fn delete_players(
        &self,
        tournament_id: Option<TournamentId>,
    ) -> Result<u64, StorageError> {
        let result = match tournament_id {
            Some(id) => {
                sqlx::query("DELETE FROM players WHERE tournament_id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
            None => sqlx::query("DELETE FROM players").execute(&self.pool).await?,
        };

        tracing::info!(
            "Cleared {} players (tournament: {:?})",
            result.rows_affected(),
            tournament_id
        );

        Ok(result.rows_affected())
    }

    /// Bulk-clear match records, optionally scoped to one tournament.
    ///
    /// Bye records are round artifacts like matches, so the same reset
    /// clears them too. Used by test/reset flows.
    pub async fn delete_matches(
        &self,
        tournament_id: Option<TournamentId>,
    ) -> Result<u64, StorageError> {
        let result = match tournament_id {
            Some(id) => {
                sqlx::query("DELETE FROM byes WHERE tournament_id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
                sqlx::query("DELETE FROM matches WHERE tournament_id = $1")
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("DELETE FROM byes").execute(&self.pool).await?;
                sqlx::query("DELETE FROM matches").execute(&self.pool).await?
            }
        };

        tracing::info!(
            "Cleared {} matches (tournament: {:?})",
            result.rows_affected(),
            tournament_id
        );

        Ok(result.rows_affected())
    }

    /// Count registered players, optionally scoped to one tournament
    pub async fn count_players(
        &self,
        tournament_id: Option<TournamentId>,
    ) -> Result<i64, StorageError> {
        let row = match tournament_id {
            Some(id) => {
                sqlx::query("SELECT COUNT(id) AS count FROM players WHERE tournament_id = $1")
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("SELECT COUNT(id) AS count FROM players")
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(row.get("count"))
    }

    /// Append one immutable match record.
    ///
    /// Rejects self-matches and ids that are not registered in the given
    /// tournament; cross-tournament results never enter the history.
    pub async fn record_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
        tournament_id: TournamentId,
    ) -> Result<i32, StorageError> {
        if winner_id == loser_id {
            return Err(StorageError::Validation(format!(
                "player {} cannot play themselves",
                winner_id
            )));
        }

        let registered = sqlx::query(
            r#"
            SELECT id FROM players
            WHERE id IN ($1, $2) AND tournament_id = $3
        "#,
        )
        .bind(winner_id)
        .bind(loser_id)
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await?;

        if registered.len() != 2 {
            return Err(StorageError::Validation(format!(
                "players {} and {} must both be registered in tournament {}",
                winner_id, loser_id, tournament_id
            )));
        }

        let query = r#"
            INSERT INTO matches (winner_id, loser_id, tournament_id)
            VALUES ($1, $2, $3)
            RETURNING match_id
        "#;

        let row = sqlx::query(query)
            .bind(winner_id)
            .bind(loser_id)
            .bind(tournament_id)
            .fetch_one(&self.pool)
            .await?;

        let match_id: i32 = row.get("match_id");

        tracing::debug!(
            "Recorded match {}: {} beat {} (tournament {})",
            match_id,
            winner_id,
            loser_id,
            tournament_id
        );

        Ok(match_id)
    }

    /// Fetch the registered players of a tournament, id ascending
    pub async fn fetch_players(
        &self,
        tournament_id: TournamentId,
    ) -> Result<Vec<Player>, StorageError> {
        let query = r#"
            SELECT id, name, tournament_id, registered_at
            FROM players
            WHERE tournament_id = $1
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(tournament_id)
            .fetch_all(&self.pool)
            .await?;

        let players = rows
            .iter()
            .map(|row| Player {
                id: row.get("id"),
                name: row.get("name"),
                tournament_id: row.get("tournament_id"),
                registered_at: row.get("registered_at"),
            })
            .collect();

        Ok(players)
    }

    /// Fetch a tournament's match history in insertion order
    pub async fn fetch_matches(
        &self,
        tournament_id: TournamentId,
    ) -> Result<Vec<MatchRecord>, StorageError> {
        let query = r#"
            SELECT winner_id, loser_id
            FROM matches
            WHERE tournament_id = $1
            ORDER BY match_id
        "#;

        let rows = sqlx::query(query)
            .bind(tournament_id)
            .fetch_all(&self.pool)
            .await?;

        let matches = rows
            .iter()
            .map(|row| MatchRecord {
                winner_id: row.get("winner_id"),
                loser_id: row.get("loser_id"),
            })
            .collect();

        Ok(matches)
    }

    /// Record that a player received a bye in this tournament.
    ///
    /// Uses INSERT ... ON CONFLICT so confirming the same round twice
    /// stays a no-op.
    pub async fn record_bye(
        &self,
        player_id: PlayerId,
        tournament_id: TournamentId,
    ) -> Result<(), StorageError> {
        let registered = sqlx::query("SELECT id FROM players WHERE id = $1 AND tournament_id = $2")
            .bind(player_id)
            .bind(tournament_id)
            .fetch_optional(&self.pool)
            .await?;

        if registered.is_none() {
            return Err(StorageError::Validation(format!(
                "player {} is not registered in tournament {}",
                player_id, tournament_id
            )));
        }

        let query = r#"
            INSERT INTO byes (tournament_id, player_id)
            VALUES ($1, $2)
            ON CONFLICT (tournament_id, player_id) DO NOTHING
        "#;

        sqlx::query(query)
            .bind(tournament_id)
            .bind(player_id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            "Recorded bye for player {} in tournament {}",
            player_id,
            tournament_id
        );

        Ok(())
    }

    /// Get the players who have already received a bye in a tournament
    pub async fn fetch_byes(
        &self,
        tournament_id: TournamentId,
    ) -> Result<Vec<PlayerId>, StorageError> {
        let query = r#"
            SELECT player_id
            FROM byes
            WHERE tournament_id = $1
        "#;

        let rows = sqlx::query(query)
            .bind(tournament_id)
            .fetch_all(&self.pool)
            .await?;

        let bye_ids: Vec<PlayerId> = rows.iter().map(|row| row.get("player_id")).collect();

        Ok(bye_ids)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StorageError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = StorageError::Validation("player 3 cannot play themselves".to_string());
        assert_eq!(
            err.to_string(),
            "Validation failed: player 3 cannot play themselves"
        );
    }
}
