//! Lineup (concert/artist junction) model and DTOs.

use festival_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::artista::Artista;

/// A row from the `alinhamento` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Alinhamento {
    pub concerto_id: DbId,
    pub artista_id: DbId,
    pub ordem_atuacao: i32,
}

/// Body of `POST /concertos/{id}/artistas`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddArtistaToConcerto {
    pub artista_id: DbId,
    /// Defaults to one past the current last slot of the concert.
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub ordem_atuacao: Option<i32>,
}

/// An artist as listed for a concert: the artist row plus its slot.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ArtistaNoAlinhamento {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub artista: Artista,
    pub ordem_atuacao: i32,
}

/// Result of adding an artist to a concert.
#[derive(Debug, Clone, PartialEq)]
pub enum LineupInsert {
    /// A new lineup row was written.
    Created(Alinhamento),
    /// The pair already existed; the stored row is returned unchanged.
    AlreadyPresent(Alinhamento),
    MissingConcert,
    MissingArtist,
}
