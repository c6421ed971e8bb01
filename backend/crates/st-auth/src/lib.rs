pub mod caller_context;
pub mod claims;
pub mod credential_service;
pub mod error;
pub mod gates;
pub mod issue_rate_limiter;
pub mod jwt_validator;
pub mod store;

pub use caller_context::CallerContext;
pub use claims::Claims;
pub use credential_service::{CREDENTIAL_LIFETIME_SECS, CredentialService};
pub use error::{AuthError, FailureCategory, Result};
pub use gates::{require_credential, require_ownership, require_record_owner, require_role};
pub use issue_rate_limiter::{IssueRateLimiter, RateLimitConfig};
pub use jwt_validator::JwtValidator;
pub use store::{IdentityStore, OwnedResource, RecordOwnerStore, SqliteAuthStore};

#[cfg(test)]
mod tests;
