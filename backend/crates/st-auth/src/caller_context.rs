use crate::Claims;

use chrono::{DateTime, Utc};

/// Verified caller bound into the request after the credential gate.
///
/// Only the credential service can build one, so role and ownership checks
/// cannot run on an unauthenticated caller.
#[derive(Debug, Clone)]
pub struct CallerContext {
    email: String,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
}

impl CallerContext {
    pub(crate) fn from_claims(claims: Claims) -> Self {
        Self {
            email: claims.email,
            issued_at: DateTime::from_timestamp(claims.iat, 0),
            expires_at: DateTime::from_timestamp(claims.exp, 0),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.issued_at
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}
