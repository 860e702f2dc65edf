//! Request extractors.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use festival_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that is deserialized and then checked with [`Validate`].
///
/// Missing required fields, wrong types, and failed field rules are all
/// rejected with a 400 `VALIDATION_ERROR` before the handler runs, so an
/// invalid payload never reaches the database.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::Validation(rejection.body_text())))?;

        value.validate().map_err(|errors| {
            AppError::Core(CoreError::Validation(festival_core::rules::describe(&errors)))
        })?;

        Ok(Self(value))
    }
}

/// [`axum::extract::Path`] with a JSON `BAD_REQUEST` body on rejection
/// (e.g. `/artistas/abc`).
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// [`axum::extract::Query`] with a JSON `BAD_REQUEST` body on rejection
/// (e.g. `?palco_id=abc`).
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);
