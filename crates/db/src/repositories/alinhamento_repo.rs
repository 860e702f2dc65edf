//! Repository for the `alinhamento` junction table (concert lineups).
//!
//! Adding the same artist to a concert twice is a no-op: the first row and
//! its `ordem_atuacao` are kept and reported back as
//! [`LineupInsert::AlreadyPresent`].

use festival_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::alinhamento::{
    AddArtistaToConcerto, Alinhamento, ArtistaNoAlinhamento, LineupInsert,
};

const COLUMNS: &str = "concerto_id, artista_id, ordem_atuacao";

/// Provides data access for concert lineups.
pub struct AlinhamentoRepo;

impl AlinhamentoRepo {
    /// Add an artist to a concert.
    ///
    /// Runs in one transaction. Both referenced rows are locked `FOR SHARE`
    /// before the insert so neither can be deleted until commit. Without an
    /// explicit `ordem_atuacao` the concert row is locked `FOR UPDATE`
    /// instead, so concurrent appends take distinct slots. A missing
    /// concert or artist returns early; dropping the transaction rolls it
    /// back, so nothing is written.
    pub async fn add_artist_to_concert(
        pool: &PgPool,
        concerto_id: DbId,
        input: &AddArtistaToConcerto,
    ) -> Result<LineupInsert, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Appending reads MAX(ordem_atuacao), so concurrent appends to the
        // same concert must queue on the concert row.
        let lock = if input.ordem_atuacao.is_none() {
            "SELECT id FROM concertos WHERE id = $1 FOR UPDATE"
        } else {
            "SELECT id FROM concertos WHERE id = $1 FOR SHARE"
        };
        let concerto: Option<DbId> = sqlx::query_scalar(lock)
            .bind(concerto_id)
            .fetch_optional(&mut *tx)
            .await?;
        if concerto.is_none() {
            return Ok(LineupInsert::MissingConcert);
        }

        let artista: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM artistas WHERE id = $1 FOR SHARE")
                .bind(input.artista_id)
                .fetch_optional(&mut *tx)
                .await?;
        if artista.is_none() {
            return Ok(LineupInsert::MissingArtist);
        }

        let inserted =
            Self::insert_if_absent(&mut *tx, concerto_id, input.artista_id, input.ordem_atuacao)
                .await?;

        let outcome = match inserted {
            Some(row) => LineupInsert::Created(row),
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM alinhamento WHERE concerto_id = $1 AND artista_id = $2"
                );
                let existing = sqlx::query_as::<_, Alinhamento>(&query)
                    .bind(concerto_id)
                    .bind(input.artista_id)
                    .fetch_one(&mut *tx)
                    .await?;
                LineupInsert::AlreadyPresent(existing)
            }
        };

        tx.commit().await?;
        Ok(outcome)
    }

    /// Insert a lineup row unless the pair already exists.
    ///
    /// Returns `None` when the pair was already present. An `ordem` of
    /// `None` takes the slot after the concert's current last one. Foreign
    /// keys are enforced by the database, not checked here.
    pub async fn insert_if_absent<'e, E>(
        executor: E,
        concerto_id: DbId,
        artista_id: DbId,
        ordem: Option<i32>,
    ) -> Result<Option<Alinhamento>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO alinhamento (concerto_id, artista_id, ordem_atuacao)
             VALUES ($1, $2, COALESCE($3, (
                 SELECT COALESCE(MAX(ordem_atuacao), 0) + 1
                 FROM alinhamento WHERE concerto_id = $1
             )))
             ON CONFLICT (concerto_id, artista_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alinhamento>(&query)
            .bind(concerto_id)
            .bind(artista_id)
            .bind(ordem)
            .fetch_optional(executor)
            .await
    }

    /// List the artists of a concert, in performance order.
    ///
    /// Returns `None` if the concert does not exist and an empty list if it
    /// exists without a lineup. Ties on `ordem_atuacao` break by artist id.
    pub async fn list_artists_for_concert(
        pool: &PgPool,
        concerto_id: DbId,
    ) -> Result<Option<Vec<ArtistaNoAlinhamento>>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM concertos WHERE id = $1)")
                .bind(concerto_id)
                .fetch_one(&mut *conn)
                .await?;
        if !exists {
            return Ok(None);
        }

        let artistas = sqlx::query_as::<_, ArtistaNoAlinhamento>(
            "SELECT a.id, a.nome, a.genero, a.pais_origem, a.cachet, al.ordem_atuacao
             FROM artistas a
             INNER JOIN alinhamento al ON al.artista_id = a.id
             WHERE al.concerto_id = $1
             ORDER BY al.ordem_atuacao ASC, a.id ASC",
        )
        .bind(concerto_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(Some(artistas))
    }

    /// Remove an artist from a concert. Returns `true` if a row was removed.
    pub async fn remove_artist_from_concert(
        pool: &PgPool,
        concerto_id: DbId,
        artista_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM alinhamento WHERE concerto_id = $1 AND artista_id = $2")
                .bind(concerto_id)
                .bind(artista_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
