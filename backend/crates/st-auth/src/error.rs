use st_core::Role;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// How a failure is surfaced to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// Missing, invalid or expired credential, or an unregistered identity
    Unauthenticated,
    /// Role or ownership mismatch for a valid credential
    Forbidden,
    RateLimited,
    /// Persistence or signing failure, never retried
    StoreFailure,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authorization header {location}")]
    MissingCredential { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Credential expired {location}")]
    CredentialExpired { location: ErrorLocation },

    #[error("Credential rejected: {source} {location}")]
    CredentialDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("No identity registered for {email} {location}")]
    UnknownIdentity {
        email: String,
        location: ErrorLocation,
    },

    #[error("{email} lacks role {required} (has {actual:?}) {location}")]
    RoleMismatch {
        email: String,
        required: Role,
        actual: Option<Role>,
        location: ErrorLocation,
    },

    #[error("Caller does not own '{field}' {location}")]
    OwnershipMismatch {
        field: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Failed to sign credential: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Identity store failure: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn category(&self) -> FailureCategory {
        match self {
            Self::MissingCredential { .. }
            | Self::InvalidScheme { .. }
            | Self::CredentialExpired { .. }
            | Self::CredentialDecode { .. }
            | Self::InvalidClaim { .. }
            | Self::UnknownIdentity { .. } => FailureCategory::Unauthenticated,
            Self::RoleMismatch { .. } | Self::OwnershipMismatch { .. } => {
                FailureCategory::Forbidden
            }
            Self::RateLimitExceeded { .. } => FailureCategory::RateLimited,
            Self::Signing { .. } | Self::Store { .. } => FailureCategory::StoreFailure,
        }
    }

    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } => "MISSING_CREDENTIAL",
            Self::InvalidScheme { .. }
            | Self::CredentialDecode { .. }
            | Self::InvalidClaim { .. } => "INVALID_CREDENTIAL",
            Self::CredentialExpired { .. } => "CREDENTIAL_EXPIRED",
            Self::UnknownIdentity { .. } => "UNKNOWN_IDENTITY",
            Self::RoleMismatch { .. } | Self::OwnershipMismatch { .. } => "FORBIDDEN",
            Self::RateLimitExceeded { .. } => "RATE_LIMITED",
            Self::Signing { .. } | Self::Store { .. } => "INTERNAL_ERROR",
        }
    }

    /// True for every credential failure other than a missing header
    pub fn is_invalid_credential(&self) -> bool {
        self.category() == FailureCategory::Unauthenticated
            && !matches!(
                self,
                Self::MissingCredential { .. } | Self::UnknownIdentity { .. }
            )
    }

    /// Message safe to show to the caller (no locations, no emails)
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingCredential { .. }
            | Self::InvalidScheme { .. }
            | Self::CredentialExpired { .. }
            | Self::CredentialDecode { .. }
            | Self::InvalidClaim { .. }
            | Self::UnknownIdentity { .. } => "Unauthorized access".to_string(),
            Self::RoleMismatch { required, .. } => {
                format!("Forbidden access: requires role {}", required)
            }
            Self::OwnershipMismatch { field, .. } => {
                format!("Forbidden access: {} does not belong to caller", field)
            }
            Self::RateLimitExceeded {
                limit, window_secs, ..
            } => format!("Too many requests: {} per {}s", limit, window_secs),
            Self::Signing { .. } | Self::Store { .. } => "Internal server error".to_string(),
        }
    }
}

impl From<st_db::DbError> for AuthError {
    #[track_caller]
    fn from(e: st_db::DbError) -> Self {
        log::error!("Identity store error: {}", e);
        AuthError::Store {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
