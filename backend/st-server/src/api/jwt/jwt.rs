//! Credential issuance endpoint

use crate::{ApiError, ApiResult, AppState, IssueCredentialQuery, TokenResponse};

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

/// GET /jwt?email=
///
/// Issue a credential for a registered identity. Rate limited per email.
pub async fn issue_credential(
    State(state): State<AppState>,
    query: Result<Query<IssueCredentialQuery>, QueryRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Query(query) = query?;
    let email = query
        .email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .ok_or_else(|| ApiError::validation("email query parameter is required", "email"))?;

    state.issue_limiter.check(email)?;
    let token = state
        .credentials
        .issue(state.identities.as_ref(), email)
        .await?;

    Ok(Json(TokenResponse { token }))
}
