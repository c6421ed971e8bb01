use crate::{ApiResult, Caller};

use st_auth::IdentityStore;
use st_core::Role;

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

#[derive(Clone)]
pub struct RoleGate {
    pub identities: Arc<dyn IdentityStore>,
    pub role: Role,
}

/// Re-read the caller's identity and require the gate's role.
pub async fn require_role(
    State(gate): State<RoleGate>,
    Caller(caller): Caller,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    st_auth::require_role(gate.identities.as_ref(), &caller, gate.role).await?;
    Ok(next.run(request).await)
}
