use super::{FakeStore, SECRET};
use crate::{AuthError, CREDENTIAL_LIFETIME_SECS, Claims, CredentialService, FailureCategory};

use st_core::Role;

use googletest::prelude::*;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

fn sign_raw(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

#[tokio::test]
async fn given_registered_identity_when_issued_then_token_verifies_for_same_email() {
    let store = FakeStore::default().with_identity("buyer@example.com", Some(Role::Buyer));
    let service = CredentialService::with_hs256(SECRET);

    let token = service.issue(&store, "buyer@example.com").await.unwrap();
    let caller = service
        .verify(Some(&format!("Bearer {}", token)))
        .unwrap();

    assert_eq!(caller.email(), "buyer@example.com");
    let lifetime = caller.expires_at().unwrap() - caller.issued_at().unwrap();
    assert_eq!(lifetime.num_seconds(), CREDENTIAL_LIFETIME_SECS);
}

#[tokio::test]
async fn given_unknown_email_when_issued_then_fails_unauthenticated() {
    let store = FakeStore::default();
    let service = CredentialService::with_hs256(SECRET);

    let result = service.issue(&store, "ghost@example.com").await;

    assert!(matches!(result, Err(AuthError::UnknownIdentity { .. })));
    assert_that!(
        result.unwrap_err().category(),
        eq(FailureCategory::Unauthenticated)
    );
}

#[tokio::test]
async fn given_identity_without_role_when_issued_then_token_still_issued() {
    let store = FakeStore::default().with_identity("new@example.com", None);
    let service = CredentialService::with_hs256(SECRET);

    let result = service.issue(&store, "new@example.com").await;

    assert!(result.is_ok());
}

#[test]
fn given_issued_token_when_decoded_then_payload_carries_email_only() {
    let service = CredentialService::with_hs256(SECRET);
    let token = service
        .sign("seller@example.com", chrono::Utc::now().timestamp())
        .unwrap();

    let payload = decode::<serde_json::Value>(
        &token,
        &DecodingKey::from_secret(SECRET),
        &Validation::new(Algorithm::HS256),
    )
    .unwrap()
    .claims;

    assert_eq!(payload["email"], "seller@example.com");
    assert!(payload.get("role").is_none());
    assert!(payload.get("status").is_none());
}

#[test]
fn given_expired_token_when_verified_then_invalid_credential() {
    let service = CredentialService::with_hs256(SECRET);
    let now = chrono::Utc::now().timestamp();
    let token = sign_raw(
        &Claims {
            email: "buyer@example.com".to_string(),
            iat: now - CREDENTIAL_LIFETIME_SECS - 10,
            exp: now - 10,
        },
        SECRET,
    );

    let result = service.verify(Some(&format!("Bearer {}", token)));

    let err = result.unwrap_err();
    assert!(matches!(err, AuthError::CredentialExpired { .. }));
    assert!(err.is_invalid_credential());
    assert_that!(err.error_code(), eq("CREDENTIAL_EXPIRED"));
}

#[test]
fn given_token_signed_with_other_secret_when_verified_then_decode_error() {
    let service = CredentialService::with_hs256(SECRET);
    let other = CredentialService::with_hs256(b"another-secret-key-at-least-32-bytes");
    let token = other
        .sign("buyer@example.com", chrono::Utc::now().timestamp())
        .unwrap();

    let result = service.verify(Some(&format!("Bearer {}", token)));

    assert!(matches!(result, Err(AuthError::CredentialDecode { .. })));
}

#[test]
fn given_no_header_when_verified_then_missing_credential() {
    let service = CredentialService::with_hs256(SECRET);

    let err = service.verify(None).unwrap_err();

    assert!(matches!(err, AuthError::MissingCredential { .. }));
    assert!(!err.is_invalid_credential());
    assert_that!(err.error_code(), eq("MISSING_CREDENTIAL"));
}

#[test]
fn given_basic_scheme_when_verified_then_invalid_scheme() {
    let service = CredentialService::with_hs256(SECRET);

    let result = service.verify(Some("Basic dXNlcjpwYXNz"));

    assert!(matches!(result, Err(AuthError::InvalidScheme { .. })));
}

#[test]
fn given_garbage_token_when_verified_then_invalid_credential() {
    let service = CredentialService::with_hs256(SECRET);

    let err = service.verify(Some("Bearer not.a.token")).unwrap_err();

    assert!(err.is_invalid_credential());
    assert_that!(err.error_code(), eq("INVALID_CREDENTIAL"));
}

#[test]
fn given_empty_email_claim_when_verified_then_invalid_claim() {
    let service = CredentialService::with_hs256(SECRET);
    let now = chrono::Utc::now().timestamp();
    let token = sign_raw(
        &Claims {
            email: "  ".to_string(),
            iat: now,
            exp: now + 60,
        },
        SECRET,
    );

    let result = service.verify(Some(&format!("Bearer {}", token)));

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}
