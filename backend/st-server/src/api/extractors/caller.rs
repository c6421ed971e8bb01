//! Axum extractor for the caller bound by the credential gate

use crate::ApiError;

use st_auth::CallerContext;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The verified caller of the current request.
///
/// Only present behind the credential gate. Extracting it anywhere else is a
/// wiring mistake and surfaces as an internal error, never as a pass.
pub struct Caller(pub CallerContext);

impl<S: Send + Sync> FromRequestParts<S> for Caller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<CallerContext>()
                .cloned()
                .map(Caller)
                .ok_or_else(|| ApiError::internal("gate ran without a bound caller"))
        }
    }
}
