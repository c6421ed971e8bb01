use crate::{ApiError, ApiResult, Caller};

use std::collections::HashMap;

use axum::{
    body::{Body, to_bytes},
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};

/// Largest JSON body the ownership gate will buffer
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Where the owner email is read from
#[derive(Debug, Clone, Copy)]
pub enum OwnerSource {
    Query(&'static str),
    Body(&'static str),
}

impl OwnerSource {
    fn field(&self) -> &'static str {
        match self {
            OwnerSource::Query(field) | OwnerSource::Body(field) => field,
        }
    }
}

#[derive(Clone, Copy)]
pub struct OwnershipGate {
    pub source: OwnerSource,
}

/// Require the request-supplied owner field to equal the caller's email.
///
/// Body fields are read from a buffered copy; the handler receives the same
/// bytes.
pub async fn require_ownership(
    State(gate): State<OwnershipGate>,
    Caller(caller): Caller,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let field = gate.source.field();

    let request = match gate.source {
        OwnerSource::Query(_) => {
            let params = Query::<HashMap<String, String>>::try_from_uri(request.uri())
                .map(|Query(params)| params)
                .unwrap_or_default();
            st_auth::require_ownership(&caller, field, params.get(field).map(String::as_str))?;
            request
        }
        OwnerSource::Body(_) => {
            let (parts, body) = request.into_parts();
            let bytes = to_bytes(body, MAX_BODY_BYTES)
                .await
                .map_err(|e| ApiError::bad_request(format!("Unreadable request body: {}", e)))?;

            let value = serde_json::from_slice::<serde_json::Value>(&bytes).ok();
            let owner = value
                .as_ref()
                .and_then(|v| v.get(field))
                .and_then(|v| v.as_str());
            st_auth::require_ownership(&caller, field, owner)?;

            Request::from_parts(parts, Body::from(bytes))
        }
    };

    Ok(next.run(request).await)
}
