//! Concert entity model and DTOs.
//!
//! `data_hora` also accepts `data` on input, and any of the formats
//! understood by [`festival_core::datetime::parse`].

use festival_core::types::{DbId, LocalDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `concertos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Concerto {
    pub id: DbId,
    #[serde(with = "festival_core::datetime")]
    pub data_hora: LocalDateTime,
    pub duracao_minutos: i32,
    /// `None` once the stage has been deleted, or if never assigned.
    pub palco_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateConcerto {
    #[serde(alias = "data", with = "festival_core::datetime")]
    pub data_hora: LocalDateTime,
    /// Defaults to 60 if omitted.
    #[validate(range(min = 1, message = "must be a positive number of minutes"))]
    pub duracao_minutos: Option<i32>,
    pub palco_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateConcerto {
    #[serde(
        default,
        alias = "data",
        deserialize_with = "festival_core::datetime::option::deserialize"
    )]
    pub data_hora: Option<LocalDateTime>,
    #[validate(range(min = 1, message = "must be a positive number of minutes"))]
    pub duracao_minutos: Option<i32>,
    pub palco_id: Option<DbId>,
}

/// `?palco_id=` filter for listing, counting and bulk updates of
/// concerts. An empty value means no filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConcertoFilter {
    #[serde(default, deserialize_with = "festival_core::query::empty_as_none")]
    pub palco_id: Option<DbId>,
}
