//! Handlers for the `/bilhetes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use festival_core::error::CoreError;
use festival_core::types::DbId;
use festival_db::models::bilhete::{Bilhete, BilheteFilter, CreateBilhete, UpdateBilhete};
use festival_db::repositories::BilheteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, ValidatedJson};
use crate::response::CountResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Bilhete",
        id,
    })
}

/// POST /bilhetes
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateBilhete>,
) -> AppResult<(StatusCode, Json<Bilhete>)> {
    let bilhete = BilheteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(bilhete)))
}

/// GET /bilhetes?tipo=&estado=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<BilheteFilter>,
) -> AppResult<Json<Vec<Bilhete>>> {
    let bilhetes = BilheteRepo::list(&state.pool, &filter).await?;
    Ok(Json(bilhetes))
}

/// GET /bilhetes/count?tipo=&estado=
pub async fn count(
    State(state): State<AppState>,
    Query(filter): Query<BilheteFilter>,
) -> AppResult<Json<CountResponse>> {
    let count = BilheteRepo::count(&state.pool, &filter).await?;
    Ok(Json(CountResponse::new(count)))
}

/// PATCH /bilhetes?tipo=&estado=
///
/// Applies the partial update to every matching ticket (all tickets when no
/// filter is given) and returns how many changed.
pub async fn update_all(
    State(state): State<AppState>,
    Query(filter): Query<BilheteFilter>,
    ValidatedJson(input): ValidatedJson<UpdateBilhete>,
) -> AppResult<Json<CountResponse>> {
    let count = BilheteRepo::update_all(&state.pool, &filter, &input).await?;
    tracing::info!(count, ?filter, "Bilhetes bulk-updated");
    Ok(Json(CountResponse::new(count)))
}

/// GET /bilhetes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Bilhete>> {
    let bilhete = BilheteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(bilhete))
}

/// PATCH /bilhetes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateBilhete>,
) -> AppResult<Json<Bilhete>> {
    let bilhete = BilheteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(bilhete))
}

/// PUT /bilhetes/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateBilhete>,
) -> AppResult<Json<Bilhete>> {
    let bilhete = BilheteRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(bilhete))
}

/// DELETE /bilhetes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Bilhete>> {
    let bilhete = BilheteRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(bilhete))
}
