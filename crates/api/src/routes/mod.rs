pub mod artista;
pub mod bilhete;
pub mod concerto;
pub mod health;
pub mod palco;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the server root.
///
/// Route hierarchy:
///
/// ```text
/// /artistas                                  list, create
/// /artistas/count                            count (?genero=)
/// /artistas/{id}                             get, replace, update, delete
///
/// /palcos                                    list, create, bulk update
/// /palcos/count                              count
/// /palcos/{id}                               get, replace, update, delete
/// /palcos/{id}/concertos                     list, create, bulk update, bulk delete
///
/// /concertos                                 list, create, bulk update (?palco_id=)
/// /concertos/count                           count (?palco_id=)
/// /concertos/{id}                            get, replace, update, delete
/// /concertos/{id}/palco                      stage of the concert
/// /concertos/{id}/artistas                   lineup, add artist
/// /concertos/{id}/artistas/{artista_id}      remove artist
///
/// /bilhetes                                  list, create, bulk update
/// /bilhetes/count                            count (?tipo=&estado=)
/// /bilhetes/{id}                             get, replace, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/artistas", artista::router())
        .nest("/palcos", palco::router())
        .nest("/concertos", concerto::router())
        .nest("/bilhetes", bilhete::router())
}
