//! Handlers for the `/artistas` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use festival_core::error::CoreError;
use festival_core::types::DbId;
use festival_db::models::artista::{Artista, ArtistaFilter, CreateArtista, UpdateArtista};
use festival_db::repositories::ArtistaRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, ValidatedJson};
use crate::response::CountResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artista",
        id,
    })
}

/// POST /artistas
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateArtista>,
) -> AppResult<(StatusCode, Json<Artista>)> {
    let artista = ArtistaRepo::create(&state.pool, &input).await?;
    tracing::info!(id = artista.id, "Artista created");
    Ok((StatusCode::CREATED, Json(artista)))
}

/// GET /artistas?genero=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ArtistaFilter>,
) -> AppResult<Json<Vec<Artista>>> {
    let artistas = ArtistaRepo::list(&state.pool, &filter).await?;
    Ok(Json(artistas))
}

/// GET /artistas/count?genero=
pub async fn count(
    State(state): State<AppState>,
    Query(filter): Query<ArtistaFilter>,
) -> AppResult<Json<CountResponse>> {
    let count = ArtistaRepo::count(&state.pool, &filter).await?;
    Ok(Json(CountResponse::new(count)))
}

/// GET /artistas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Artista>> {
    let artista = ArtistaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(artista))
}

/// PATCH /artistas/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateArtista>,
) -> AppResult<Json<Artista>> {
    let artista = ArtistaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(artista))
}

/// PUT /artistas/{id}
///
/// Replaces the whole row; optional fields left out of the body are cleared.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateArtista>,
) -> AppResult<Json<Artista>> {
    let row = ArtistaRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// DELETE /artistas/{id}
///
/// Returns the removed artist. Lineup rows for the artist go with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Artista>> {
    let artista = ArtistaRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Artista deleted");
    Ok(Json(artista))
}
