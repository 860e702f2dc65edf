//! Artist entity model and DTOs.

use festival_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `artistas` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Artista {
    pub id: DbId,
    pub nome: String,
    pub genero: Option<String>,
    pub pais_origem: Option<String>,
    /// Booking fee.
    pub cachet: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtista {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub nome: String,
    #[validate(length(max = 50))]
    pub genero: Option<String>,
    #[validate(length(max = 50))]
    pub pais_origem: Option<String>,
    #[validate(custom(function = "festival_core::rules::validate_amount"))]
    pub cachet: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateArtista {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub nome: Option<String>,
    #[validate(length(max = 50))]
    pub genero: Option<String>,
    #[validate(length(max = 50))]
    pub pais_origem: Option<String>,
    #[validate(custom(function = "festival_core::rules::validate_amount"))]
    pub cachet: Option<Decimal>,
}

/// `GET /artistas?genero=` filter. An empty value means no filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistaFilter {
    #[serde(default, deserialize_with = "festival_core::query::empty_as_none")]
    pub genero: Option<String>,
}
