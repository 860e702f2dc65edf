//! Route definitions for the `/bilhetes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::bilhete;
use crate::state::AppState;

/// Routes mounted at `/bilhetes`.
///
/// `PUT /{id}` replaces the whole ticket; `PATCH /{id}` only touches the
/// fields present in the body.
///
/// ```text
/// GET    /          -> list (?tipo=&estado=)
/// POST   /          -> create
/// PATCH  /          -> update_all (?tipo=&estado=)
/// GET    /count     -> count
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> replace
/// PATCH  /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(bilhete::list)
                .post(bilhete::create)
                .patch(bilhete::update_all),
        )
        .route("/count", get(bilhete::count))
        .route(
            "/{id}",
            get(bilhete::get_by_id)
                .put(bilhete::replace)
                .patch(bilhete::update)
                .delete(bilhete::delete),
        )
}
