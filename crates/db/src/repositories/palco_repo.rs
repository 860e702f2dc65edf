//! Repository for the `palcos` table.

use festival_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::palco::{CreatePalco, Palco, UpdatePalco};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, capacidade, localizacao, responsavel";

/// Provides CRUD operations for stages.
pub struct PalcoRepo;

impl PalcoRepo {
    /// Insert a new stage, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreatePalco) -> Result<Palco, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO palcos (nome, capacidade, localizacao, responsavel)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Palco>(&query)
            .bind(&input.nome)
            .bind(input.capacidade)
            .bind(&input.localizacao)
            .bind(&input.responsavel)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Palco>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM palcos WHERE id = $1");
        sqlx::query_as::<_, Palco>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all stages ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Palco>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM palcos ORDER BY id");
        sqlx::query_as::<_, Palco>(&query).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM palcos")
            .fetch_one(pool)
            .await
    }

    /// Update a stage. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePalco,
    ) -> Result<Option<Palco>, sqlx::Error> {
        let query = format!(
            "UPDATE palcos SET
                nome = COALESCE($2, nome),
                capacidade = COALESCE($3, capacidade),
                localizacao = COALESCE($4, localizacao),
                responsavel = COALESCE($5, responsavel)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Palco>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(input.capacidade)
            .bind(&input.localizacao)
            .bind(&input.responsavel)
            .fetch_optional(pool)
            .await
    }

    /// Full replace for `PUT`: optional columns missing from `input` are
    /// cleared.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreatePalco,
    ) -> Result<Option<Palco>, sqlx::Error> {
        let query = format!(
            "UPDATE palcos SET
                nome = $2,
                capacidade = $3,
                localizacao = $4,
                responsavel = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Palco>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(input.capacidade)
            .bind(&input.localizacao)
            .bind(&input.responsavel)
            .fetch_optional(pool)
            .await
    }

    /// Apply the same partial update to every stage. Returns the number of
    /// rows changed.
    pub async fn update_all(pool: &PgPool, input: &UpdatePalco) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE palcos SET
                nome = COALESCE($1, nome),
                capacidade = COALESCE($2, capacidade),
                localizacao = COALESCE($3, localizacao),
                responsavel = COALESCE($4, responsavel)",
        )
        .bind(&input.nome)
        .bind(input.capacidade)
        .bind(&input.localizacao)
        .bind(&input.responsavel)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a stage, returning the removed row.
    ///
    /// Concerts on this stage are kept with `palco_id` set to NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Palco>, sqlx::Error> {
        let query = format!("DELETE FROM palcos WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Palco>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
