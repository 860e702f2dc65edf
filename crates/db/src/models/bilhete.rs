//! Ticket entity model and DTOs.
//!
//! Tickets are standalone rows with no link to concerts or stages.

use festival_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `bilhetes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Bilhete {
    pub id: DbId,
    /// `"VIP"` or `"Geral"`.
    pub tipo: String,
    pub preco: Decimal,
    /// `"disponivel"`, `"reservado"` or `"vendido"`.
    pub estado: String,
}

/// DTO for creating a ticket, also used as the full body of `PUT /bilhetes/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBilhete {
    #[validate(custom(function = "festival_core::rules::validate_ticket_type"))]
    pub tipo: String,
    #[validate(custom(function = "festival_core::rules::validate_amount"))]
    pub preco: Decimal,
    /// Defaults to `"disponivel"` if omitted.
    #[validate(custom(function = "festival_core::rules::validate_ticket_state"))]
    pub estado: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBilhete {
    #[validate(custom(function = "festival_core::rules::validate_ticket_type"))]
    pub tipo: Option<String>,
    #[validate(custom(function = "festival_core::rules::validate_amount"))]
    pub preco: Option<Decimal>,
    #[validate(custom(function = "festival_core::rules::validate_ticket_state"))]
    pub estado: Option<String>,
}

/// `?tipo=&estado=` filter for listing, counting and bulk updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BilheteFilter {
    #[serde(default, deserialize_with = "festival_core::query::empty_as_none")]
    pub tipo: Option<String>,
    #[serde(default, deserialize_with = "festival_core::query::empty_as_none")]
    pub estado: Option<String>,
}
