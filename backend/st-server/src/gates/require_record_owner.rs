use crate::{ApiResult, Caller};

use st_auth::{OwnedResource, RecordOwnerStore};

use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};

#[derive(Clone)]
pub struct RecordOwnerGate {
    pub owners: Arc<dyn RecordOwnerStore>,
    pub resource: OwnedResource,
}

/// Require the stored owner of the `{id}` record to be the caller.
pub async fn require_record_owner(
    State(gate): State<RecordOwnerGate>,
    Caller(caller): Caller,
    Path(id): Path<String>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    st_auth::require_record_owner(gate.owners.as_ref(), &caller, gate.resource, &id).await?;
    Ok(next.run(request).await)
}
