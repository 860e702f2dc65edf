//! Stage entity model and DTOs.

use festival_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `palcos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Palco {
    pub id: DbId,
    pub nome: String,
    pub capacidade: i32,
    pub localizacao: Option<String>,
    pub responsavel: Option<String>,
}

/// DTO for creating a stage.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePalco {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub nome: String,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub capacidade: i32,
    #[validate(length(max = 100))]
    pub localizacao: Option<String>,
    #[validate(length(max = 100))]
    pub responsavel: Option<String>,
}

/// DTO for updating a stage. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePalco {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub nome: Option<String>,
    #[validate(range(min = 1, message = "must be a positive integer"))]
    pub capacidade: Option<i32>,
    #[validate(length(max = 100))]
    pub localizacao: Option<String>,
    #[validate(length(max = 100))]
    pub responsavel: Option<String>,
}
