//! Route definitions for the `/concertos` resource and concert lineups.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{alinhamento, concerto};
use crate::state::AppState;

/// Routes mounted at `/concertos`.
///
/// ```text
/// GET    /                              -> list (?palco_id=)
/// POST   /                              -> create
/// PATCH  /                              -> update_all (?palco_id=)
/// GET    /count                         -> count
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> replace
/// PATCH  /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /{id}/palco                    -> get_palco
///
/// GET    /{id}/artistas                 -> alinhamento::list_artists
/// POST   /{id}/artistas                 -> alinhamento::add_artist
/// DELETE /{id}/artistas/{artista_id}    -> alinhamento::remove_artist
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(concerto::list)
                .post(concerto::create)
                .patch(concerto::update_all),
        )
        .route("/count", get(concerto::count))
        .route(
            "/{id}",
            get(concerto::get_by_id)
                .put(concerto::replace)
                .patch(concerto::update)
                .delete(concerto::delete),
        )
        .route("/{id}/palco", get(concerto::get_palco))
        .route(
            "/{id}/artistas",
            get(alinhamento::list_artists).post(alinhamento::add_artist),
        )
        .route(
            "/{id}/artistas/{artista_id}",
            delete(alinhamento::remove_artist),
        )
}
