//! Route definitions for the `/palcos` resource.
//!
//! Also nests the stage-scoped concert routes under `/palcos/{id}/concertos`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{concerto, palco};
use crate::state::AppState;

/// Routes mounted at `/palcos`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// PATCH  /                  -> update_all
/// GET    /count             -> count
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> replace
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
///
/// GET    /{id}/concertos    -> concerto::list_by_palco
/// POST   /{id}/concertos    -> concerto::create_for_palco
/// PATCH  /{id}/concertos    -> concerto::update_by_palco
/// DELETE /{id}/concertos    -> concerto::delete_by_palco
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(palco::list)
                .post(palco::create)
                .patch(palco::update_all),
        )
        .route("/count", get(palco::count))
        .route(
            "/{id}",
            get(palco::get_by_id)
                .put(palco::replace)
                .patch(palco::update)
                .delete(palco::delete),
        )
        .route(
            "/{id}/concertos",
            get(concerto::list_by_palco)
                .post(concerto::create_for_palco)
                .patch(concerto::update_by_palco)
                .delete(concerto::delete_by_palco),
        )
}
