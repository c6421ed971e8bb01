//! Credential issuance and verification.
//!
//! A credential binds an email to a 5 hour validity window. Role and seller
//! status are never embedded; gates re-read them from the identity store on
//! every request.

use crate::{
    AuthError, CallerContext, Claims, IdentityStore, JwtValidator, Result as AuthErrorResult,
};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{EncodingKey, Header, encode};

/// Credential validity window in seconds (5 hours)
pub const CREDENTIAL_LIFETIME_SECS: i64 = 5 * 60 * 60;

const BEARER_PREFIX: &str = "Bearer ";

pub struct CredentialService {
    encoding_key: EncodingKey,
    validator: JwtValidator,
}

impl CredentialService {
    /// Build a service signing and verifying with one HS256 secret
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            validator: JwtValidator::with_hs256(secret),
        }
    }

    /// Issue a credential for a registered identity.
    ///
    /// Unregistered emails fail with [`AuthError::UnknownIdentity`] and no
    /// token is produced.
    pub async fn issue(&self, store: &dyn IdentityStore, email: &str) -> AuthErrorResult<String> {
        let email = email.trim();
        if store.find_identity(email).await?.is_none() {
            log::warn!("Credential requested for unregistered identity {}", email);
            return Err(AuthError::UnknownIdentity {
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token = self.sign(email, Utc::now().timestamp())?;
        log::info!("Issued credential for {}", email);
        Ok(token)
    }

    #[track_caller]
    pub(crate) fn sign(&self, email: &str, issued_at: i64) -> AuthErrorResult<String> {
        let claims = Claims {
            email: email.to_string(),
            iat: issued_at,
            exp: issued_at + CREDENTIAL_LIFETIME_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| AuthError::Signing {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Verify the raw `Authorization` header value
    #[track_caller]
    pub fn verify(&self, header: Option<&str>) -> AuthErrorResult<CallerContext> {
        let header = header.ok_or_else(|| AuthError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or_else(|| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let claims = self.verify_token(token.trim())?;
        Ok(CallerContext::from_claims(claims))
    }

    #[track_caller]
    pub fn verify_token(&self, token: &str) -> AuthErrorResult<Claims> {
        self.validator.validate(token)
    }
}
