//! Route definitions for the `/artistas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::artista;
use crate::state::AppState;

/// Routes mounted at `/artistas`.
///
/// ```text
/// GET    /             -> list (?genero=)
/// POST   /             -> create
/// GET    /count        -> count
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> replace
/// PATCH  /{id}         -> update
/// DELETE /{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artista::list).post(artista::create))
        .route("/count", get(artista::count))
        .route(
            "/{id}",
            get(artista::get_by_id)
                .put(artista::replace)
                .patch(artista::update)
                .delete(artista::delete),
        )
}
