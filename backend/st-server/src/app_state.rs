use st_auth::{CredentialService, IdentityStore, IssueRateLimiter, RecordOwnerStore};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Process-wide state, built once at startup and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Holds the signing secret
    pub credentials: Arc<CredentialService>,
    pub identities: Arc<dyn IdentityStore>,
    pub owners: Arc<dyn RecordOwnerStore>,
    pub issue_limiter: Arc<IssueRateLimiter>,
    /// Enables the record-owner and body ownership gates
    pub enforce_record_ownership: bool,
}
