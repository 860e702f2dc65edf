//! Handlers for the `/palcos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use festival_core::error::CoreError;
use festival_core::types::DbId;
use festival_db::models::palco::{CreatePalco, Palco, UpdatePalco};
use festival_db::repositories::PalcoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::response::CountResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Palco",
        id,
    })
}

/// POST /palcos
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePalco>,
) -> AppResult<(StatusCode, Json<Palco>)> {
    let palco = PalcoRepo::create(&state.pool, &input).await?;
    tracing::info!(id = palco.id, "Palco created");
    Ok((StatusCode::CREATED, Json(palco)))
}

/// GET /palcos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Palco>>> {
    let palcos = PalcoRepo::list(&state.pool).await?;
    Ok(Json(palcos))
}

/// GET /palcos/count
pub async fn count(State(state): State<AppState>) -> AppResult<Json<CountResponse>> {
    let count = PalcoRepo::count(&state.pool).await?;
    Ok(Json(CountResponse::new(count)))
}

/// GET /palcos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Palco>> {
    let palco = PalcoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(palco))
}

/// PATCH /palcos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePalco>,
) -> AppResult<Json<Palco>> {
    let palco = PalcoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(palco))
}

/// PUT /palcos/{id}
///
/// Replaces the whole row; optional fields left out of the body are cleared.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreatePalco>,
) -> AppResult<Json<Palco>> {
    let row = PalcoRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// PATCH /palcos
///
/// Applies the partial update to every stage and returns how many changed.
pub async fn update_all(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdatePalco>,
) -> AppResult<Json<CountResponse>> {
    let count = PalcoRepo::update_all(&state.pool, &input).await?;
    tracing::info!(count, "Palcos bulk-updated");
    Ok(Json(CountResponse::new(count)))
}

/// DELETE /palcos/{id}
///
/// Concerts on the stage are kept and detached (`palco_id` becomes null).
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Palco>> {
    let palco = PalcoRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Palco deleted");
    Ok(Json(palco))
}
