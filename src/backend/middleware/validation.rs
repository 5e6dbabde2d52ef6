//! Request validation
//!
//! `ValidatedJson<T>` replaces `Json<T>` on routes whose body has rules:
//! the body is deserialized, then checked with `validator`, and the handler
//! only runs when both succeed. Failures become `ValidationError` (400)
//! with the same JSON error body as every other error.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use crate::backend::error::BackendError;

/// JSON body that has passed its `validator` rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            BackendError::validation(rejection.body_text())
        })?;

        value.validate().map_err(|errors| {
            tracing::warn!("Request body failed validation: {}", errors);
            BackendError::validation(errors.to_string())
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Parse a resource id taken from the request path
pub fn parse_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::validation(format!("invalid id: {}", raw)))
}
