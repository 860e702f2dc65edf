//! Handlers for the `/concertos` resource and the stage-scoped
//! `/palcos/{palco_id}/concertos` routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use festival_core::error::CoreError;
use festival_core::types::DbId;
use festival_db::models::concerto::{Concerto, ConcertoFilter, CreateConcerto, UpdateConcerto};
use festival_db::models::palco::Palco;
use festival_db::repositories::{ConcertoRepo, PalcoRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, ValidatedJson};
use crate::response::CountResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Concerto",
        id,
    })
}

/// Verify that a stage exists, returning NotFound if it does not.
async fn ensure_palco_exists(pool: &sqlx::PgPool, palco_id: DbId) -> AppResult<()> {
    if PalcoRepo::find_by_id(pool, palco_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Palco",
            id: palco_id,
        }));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Concert CRUD
// ---------------------------------------------------------------------------

/// POST /concertos
///
/// An unknown `palco_id` is rejected by the foreign key (409).
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateConcerto>,
) -> AppResult<(StatusCode, Json<Concerto>)> {
    let concerto = ConcertoRepo::create(&state.pool, &input).await?;
    tracing::info!(id = concerto.id, palco_id = ?concerto.palco_id, "Concerto created");
    Ok((StatusCode::CREATED, Json(concerto)))
}

/// GET /concertos?palco_id=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ConcertoFilter>,
) -> AppResult<Json<Vec<Concerto>>> {
    let concertos = ConcertoRepo::list(&state.pool, &filter).await?;
    Ok(Json(concertos))
}

/// GET /concertos/count?palco_id=
pub async fn count(
    State(state): State<AppState>,
    Query(filter): Query<ConcertoFilter>,
) -> AppResult<Json<CountResponse>> {
    let count = ConcertoRepo::count(&state.pool, &filter).await?;
    Ok(Json(CountResponse::new(count)))
}

/// GET /concertos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Concerto>> {
    let concerto = ConcertoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(concerto))
}

/// PATCH /concertos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateConcerto>,
) -> AppResult<Json<Concerto>> {
    let concerto = ConcertoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(concerto))
}

/// PUT /concertos/{id}
///
/// Replaces the whole row; optional fields left out of the body are cleared.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateConcerto>,
) -> AppResult<Json<Concerto>> {
    let row = ConcertoRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// PATCH /concertos?palco_id=
///
/// Applies the partial update to every matching concert (all concerts when
/// no filter is given) and returns how many changed.
pub async fn update_all(
    State(state): State<AppState>,
    Query(filter): Query<ConcertoFilter>,
    ValidatedJson(input): ValidatedJson<UpdateConcerto>,
) -> AppResult<Json<CountResponse>> {
    let count = ConcertoRepo::update_all(&state.pool, &filter, &input).await?;
    tracing::info!(count, ?filter, "Concertos bulk-updated");
    Ok(Json(CountResponse::new(count)))
}

/// DELETE /concertos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Concerto>> {
    let concerto = ConcertoRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Concerto deleted");
    Ok(Json(concerto))
}

/// GET /concertos/{id}/palco
///
/// The stage the concert is held on, or `null` if it has none.
pub async fn get_palco(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Option<Palco>>> {
    if ConcertoRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id));
    }
    let palco = ConcertoRepo::find_palco(&state.pool, id).await?;
    Ok(Json(palco))
}

// ---------------------------------------------------------------------------
// Stage-scoped routes
// ---------------------------------------------------------------------------

/// GET /palcos/{palco_id}/concertos
pub async fn list_by_palco(
    State(state): State<AppState>,
    Path(palco_id): Path<DbId>,
) -> AppResult<Json<Vec<Concerto>>> {
    ensure_palco_exists(&state.pool, palco_id).await?;
    let concertos = ConcertoRepo::list_by_palco(&state.pool, palco_id).await?;
    Ok(Json(concertos))
}

/// POST /palcos/{palco_id}/concertos
///
/// Any `palco_id` in the body is overridden by the path.
pub async fn create_for_palco(
    State(state): State<AppState>,
    Path(palco_id): Path<DbId>,
    ValidatedJson(mut input): ValidatedJson<CreateConcerto>,
) -> AppResult<(StatusCode, Json<Concerto>)> {
    ensure_palco_exists(&state.pool, palco_id).await?;
    input.palco_id = Some(palco_id);
    let concerto = ConcertoRepo::create(&state.pool, &input).await?;
    tracing::info!(id = concerto.id, palco_id, "Concerto created");
    Ok((StatusCode::CREATED, Json(concerto)))
}

/// PATCH /palcos/{palco_id}/concertos
pub async fn update_by_palco(
    State(state): State<AppState>,
    Path(palco_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateConcerto>,
) -> AppResult<Json<CountResponse>> {
    ensure_palco_exists(&state.pool, palco_id).await?;
    let count = ConcertoRepo::update_by_palco(&state.pool, palco_id, &input).await?;
    Ok(Json(CountResponse::new(count)))
}

/// DELETE /palcos/{palco_id}/concertos
pub async fn delete_by_palco(
    State(state): State<AppState>,
    Path(palco_id): Path<DbId>,
) -> AppResult<Json<CountResponse>> {
    ensure_palco_exists(&state.pool, palco_id).await?;
    let count = ConcertoRepo::delete_by_palco(&state.pool, palco_id).await?;
    tracing::info!(palco_id, count, "Concertos deleted for palco");
    Ok(Json(CountResponse::new(count)))
}
