use crate::{ApiResult, AppState};

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Verify the bearer credential and bind the [`CallerContext`] into the
/// request. Runs before any store access.
///
/// [`CallerContext`]: st_auth::CallerContext
pub async fn require_credential(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    // A header that is not valid UTF-8 is present but unusable
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());

    let caller = st_auth::require_credential(&state.credentials, header)?;
    log::debug!("Credential accepted for {}", caller.email());

    request.extensions_mut().insert(caller);
    Ok(next.run(request).await)
}
