//! Repository for the `bilhetes` table.

use festival_core::rules::DEFAULT_TICKET_STATE;
use festival_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::bilhete::{Bilhete, BilheteFilter, CreateBilhete, UpdateBilhete};

const COLUMNS: &str = "id, tipo, preco, estado";

/// Matches rows against an optional `tipo` ($1) and `estado` ($2).
const FILTER: &str = "($1::text IS NULL OR tipo = $1) AND ($2::text IS NULL OR estado = $2)";

/// Provides CRUD operations for tickets.
pub struct BilheteRepo;

impl BilheteRepo {
    /// Insert a new ticket. `estado` defaults to `disponivel`.
    pub async fn create<'e, E>(executor: E, input: &CreateBilhete) -> Result<Bilhete, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO bilhetes (tipo, preco, estado)
             VALUES ($1, $2, COALESCE($3, $4))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bilhete>(&query)
            .bind(&input.tipo)
            .bind(input.preco)
            .bind(&input.estado)
            .bind(DEFAULT_TICKET_STATE)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Bilhete>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bilhetes WHERE id = $1");
        sqlx::query_as::<_, Bilhete>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, filter: &BilheteFilter) -> Result<Vec<Bilhete>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bilhetes WHERE {FILTER} ORDER BY id");
        sqlx::query_as::<_, Bilhete>(&query)
            .bind(&filter.tipo)
            .bind(&filter.estado)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &BilheteFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM bilhetes WHERE {FILTER}");
        sqlx::query_scalar(&query)
            .bind(&filter.tipo)
            .bind(&filter.estado)
            .fetch_one(pool)
            .await
    }

    /// Partial update. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBilhete,
    ) -> Result<Option<Bilhete>, sqlx::Error> {
        let query = format!(
            "UPDATE bilhetes SET
                tipo = COALESCE($2, tipo),
                preco = COALESCE($3, preco),
                estado = COALESCE($4, estado)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bilhete>(&query)
            .bind(id)
            .bind(&input.tipo)
            .bind(input.preco)
            .bind(&input.estado)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every column of a ticket. An omitted `estado` resets it to
    /// `disponivel`.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateBilhete,
    ) -> Result<Option<Bilhete>, sqlx::Error> {
        let query = format!(
            "UPDATE bilhetes SET
                tipo = $2,
                preco = $3,
                estado = COALESCE($4, $5)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bilhete>(&query)
            .bind(id)
            .bind(&input.tipo)
            .bind(input.preco)
            .bind(&input.estado)
            .bind(DEFAULT_TICKET_STATE)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update to every ticket matching `filter`.
    /// Returns the number of rows changed.
    pub async fn update_all(
        pool: &PgPool,
        filter: &BilheteFilter,
        input: &UpdateBilhete,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE bilhetes SET
                tipo = COALESCE($3, tipo),
                preco = COALESCE($4, preco),
                estado = COALESCE($5, estado)
             WHERE {FILTER}"
        );
        let result = sqlx::query(&query)
            .bind(&filter.tipo)
            .bind(&filter.estado)
            .bind(&input.tipo)
            .bind(input.preco)
            .bind(&input.estado)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Bilhete>, sqlx::Error> {
        let query = format!("DELETE FROM bilhetes WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Bilhete>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
