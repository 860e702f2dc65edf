//! Request handlers for the festival resources.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `festival_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod alinhamento;
pub mod artista;
pub mod bilhete;
pub mod concerto;
pub mod palco;
