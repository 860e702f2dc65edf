//! Repository for the `concertos` table.

use festival_core::rules::DEFAULT_CONCERT_DURATION_MINUTES;
use festival_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::concerto::{Concerto, ConcertoFilter, CreateConcerto, UpdateConcerto};
use crate::models::palco::Palco;

const COLUMNS: &str = "id, data_hora, duracao_minutos, palco_id";

/// Provides CRUD operations for concerts, plus the stage-scoped queries
/// behind `/palcos/{id}/concertos`.
pub struct ConcertoRepo;

impl ConcertoRepo {
    /// Insert a new concert. A `palco_id` that does not exist fails with a
    /// foreign-key violation.
    pub async fn create<'e, E>(executor: E, input: &CreateConcerto) -> Result<Concerto, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO concertos (data_hora, duracao_minutos, palco_id)
             VALUES ($1, COALESCE($2, $4), $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Concerto>(&query)
            .bind(input.data_hora)
            .bind(input.duracao_minutos)
            .bind(input.palco_id)
            .bind(DEFAULT_CONCERT_DURATION_MINUTES)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Concerto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM concertos WHERE id = $1");
        sqlx::query_as::<_, Concerto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The stage a concert is held on. `None` both when the concert has no
    /// stage and when the concert does not exist.
    pub async fn find_palco(pool: &PgPool, concerto_id: DbId) -> Result<Option<Palco>, sqlx::Error> {
        sqlx::query_as::<_, Palco>(
            "SELECT p.id, p.nome, p.capacidade, p.localizacao, p.responsavel
             FROM concertos c
             JOIN palcos p ON p.id = c.palco_id
             WHERE c.id = $1",
        )
        .bind(concerto_id)
        .fetch_optional(pool)
        .await
    }

    /// List concerts in start order, optionally restricted to one stage.
    pub async fn list(
        pool: &PgPool,
        filter: &ConcertoFilter,
    ) -> Result<Vec<Concerto>, sqlx::Error> {
        match filter.palco_id {
            Some(palco_id) => Self::list_by_palco(pool, palco_id).await,
            None => {
                let query = format!("SELECT {COLUMNS} FROM concertos ORDER BY data_hora, id");
                sqlx::query_as::<_, Concerto>(&query).fetch_all(pool).await
            }
        }
    }

    /// List the concerts held on one stage.
    pub async fn list_by_palco(pool: &PgPool, palco_id: DbId) -> Result<Vec<Concerto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM concertos WHERE palco_id = $1 ORDER BY data_hora, id"
        );
        sqlx::query_as::<_, Concerto>(&query)
            .bind(palco_id)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &ConcertoFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM concertos WHERE ($1::bigint IS NULL OR palco_id = $1)",
        )
        .bind(filter.palco_id)
        .fetch_one(pool)
        .await
    }

    /// Partial update. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateConcerto,
    ) -> Result<Option<Concerto>, sqlx::Error> {
        let query = format!(
            "UPDATE concertos SET
                data_hora = COALESCE($2, data_hora),
                duracao_minutos = COALESCE($3, duracao_minutos),
                palco_id = COALESCE($4, palco_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Concerto>(&query)
            .bind(id)
            .bind(input.data_hora)
            .bind(input.duracao_minutos)
            .bind(input.palco_id)
            .fetch_optional(pool)
            .await
    }

    /// Full replace for `PUT`. A missing `palco_id` detaches the concert
    /// from its stage and a missing duration resets it to the default.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateConcerto,
    ) -> Result<Option<Concerto>, sqlx::Error> {
        let query = format!(
            "UPDATE concertos SET
                data_hora = $2,
                duracao_minutos = COALESCE($3, $5),
                palco_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Concerto>(&query)
            .bind(id)
            .bind(input.data_hora)
            .bind(input.duracao_minutos)
            .bind(input.palco_id)
            .bind(DEFAULT_CONCERT_DURATION_MINUTES)
            .fetch_optional(pool)
            .await
    }

    /// Apply the same partial update to every concert matching `filter`
    /// (all concerts when it is empty). Returns the number of rows changed.
    pub async fn update_all(
        pool: &PgPool,
        filter: &ConcertoFilter,
        input: &UpdateConcerto,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE concertos SET
                data_hora = COALESCE($2, data_hora),
                duracao_minutos = COALESCE($3, duracao_minutos),
                palco_id = COALESCE($4, palco_id)
             WHERE ($1::bigint IS NULL OR palco_id = $1)",
        )
        .bind(filter.palco_id)
        .bind(input.data_hora)
        .bind(input.duracao_minutos)
        .bind(input.palco_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Apply the same partial update to every concert on a stage.
    pub async fn update_by_palco(
        pool: &PgPool,
        palco_id: DbId,
        input: &UpdateConcerto,
    ) -> Result<u64, sqlx::Error> {
        let filter = ConcertoFilter {
            palco_id: Some(palco_id),
        };
        Self::update_all(pool, &filter, input).await
    }

    /// Delete a concert and, by cascade, its lineup rows.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Concerto>, sqlx::Error> {
        let query = format!("DELETE FROM concertos WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Concerto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete every concert on a stage. Returns the number of rows removed.
    pub async fn delete_by_palco(pool: &PgPool, palco_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM concertos WHERE palco_id = $1")
            .bind(palco_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
