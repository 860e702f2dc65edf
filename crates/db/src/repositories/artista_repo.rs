//! Repository for the `artistas` table.

use festival_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::artista::{Artista, ArtistaFilter, CreateArtista, UpdateArtista};

const COLUMNS: &str = "id, nome, genero, pais_origem, cachet";

/// Provides CRUD operations for artists.
pub struct ArtistaRepo;

impl ArtistaRepo {
    pub async fn create<'e, E>(executor: E, input: &CreateArtista) -> Result<Artista, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO artistas (nome, genero, pais_origem, cachet)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artista>(&query)
            .bind(&input.nome)
            .bind(&input.genero)
            .bind(&input.pais_origem)
            .bind(input.cachet)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artista>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artistas WHERE id = $1");
        sqlx::query_as::<_, Artista>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List artists ordered by ID, optionally restricted to one genre.
    pub async fn list(pool: &PgPool, filter: &ArtistaFilter) -> Result<Vec<Artista>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artistas
             WHERE ($1::text IS NULL OR genero = $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Artista>(&query)
            .bind(&filter.genero)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &ArtistaFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM artistas WHERE ($1::text IS NULL OR genero = $1)")
            .bind(&filter.genero)
            .fetch_one(pool)
            .await
    }

    /// Partial update. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtista,
    ) -> Result<Option<Artista>, sqlx::Error> {
        let query = format!(
            "UPDATE artistas SET
                nome = COALESCE($2, nome),
                genero = COALESCE($3, genero),
                pais_origem = COALESCE($4, pais_origem),
                cachet = COALESCE($5, cachet)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artista>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.genero)
            .bind(&input.pais_origem)
            .bind(input.cachet)
            .fetch_optional(pool)
            .await
    }

    /// Full replace for `PUT`: optional columns missing from `input` are
    /// cleared.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateArtista,
    ) -> Result<Option<Artista>, sqlx::Error> {
        let query = format!(
            "UPDATE artistas SET
                nome = $2,
                genero = $3,
                pais_origem = $4,
                cachet = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artista>(&query)
            .bind(id)
            .bind(&input.nome)
            .bind(&input.genero)
            .bind(&input.pais_origem)
            .bind(input.cachet)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist and, by cascade, its lineup rows.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Artista>, sqlx::Error> {
        let query = format!("DELETE FROM artistas WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Artista>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
