//! Handlers for concert lineups under `/concertos/{id}/artistas`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use festival_core::error::CoreError;
use festival_core::types::DbId;
use festival_db::models::alinhamento::{
    AddArtistaToConcerto, Alinhamento, ArtistaNoAlinhamento, LineupInsert,
};
use festival_db::repositories::AlinhamentoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::state::AppState;

/// GET /concertos/{id}/artistas
///
/// Artists in ascending `ordem_atuacao`. 404 if the concert does not exist,
/// `[]` if it has no lineup yet.
pub async fn list_artists(
    State(state): State<AppState>,
    Path(concerto_id): Path<DbId>,
) -> AppResult<Json<Vec<ArtistaNoAlinhamento>>> {
    let artistas = AlinhamentoRepo::list_artists_for_concert(&state.pool, concerto_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Concerto",
            id: concerto_id,
        }))?;
    Ok(Json(artistas))
}

/// POST /concertos/{id}/artistas
///
/// 201 with the new lineup row, or 200 with the stored row if the artist is
/// already on the bill. A concert or artist that does not exist is a
/// constraint violation (409) and writes nothing.
pub async fn add_artist(
    State(state): State<AppState>,
    Path(concerto_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<AddArtistaToConcerto>,
) -> AppResult<(StatusCode, Json<Alinhamento>)> {
    match AlinhamentoRepo::add_artist_to_concert(&state.pool, concerto_id, &input).await? {
        LineupInsert::Created(row) => {
            tracing::info!(
                concerto_id,
                artista_id = row.artista_id,
                ordem = row.ordem_atuacao,
                "Artista added to concerto"
            );
            Ok((StatusCode::CREATED, Json(row)))
        }
        LineupInsert::AlreadyPresent(row) => Ok((StatusCode::OK, Json(row))),
        LineupInsert::MissingConcert => Err(AppError::Core(CoreError::ConstraintViolation(
            format!("Concerto {concerto_id} does not exist"),
        ))),
        LineupInsert::MissingArtist => Err(AppError::Core(CoreError::ConstraintViolation(
            format!("Artista {} does not exist", input.artista_id),
        ))),
    }
}

/// DELETE /concertos/{id}/artistas/{artista_id}
pub async fn remove_artist(
    State(state): State<AppState>,
    Path((concerto_id, artista_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if AlinhamentoRepo::remove_artist_from_concert(&state.pool, concerto_id, artista_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Alinhamento",
            id: artista_id,
        }))
    }
}
