use crate::ApiError;

use st_auth::AuthError;
use st_core::Role;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_missing_credential_returns_401_with_code() {
    let error = ApiError::from(AuthError::MissingCredential {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MISSING_CREDENTIAL");
    assert_eq!(json["error"]["message"], "Unauthorized access");
}

#[tokio::test]
async fn test_expired_credential_returns_401_credential_expired() {
    let error = ApiError::from(AuthError::CredentialExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "CREDENTIAL_EXPIRED");
}

#[tokio::test]
async fn test_role_mismatch_returns_403_without_email() {
    let error = ApiError::from(AuthError::RoleMismatch {
        email: "buyer@example.com".into(),
        required: Role::Admin,
        actual: Some(Role::Buyer),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(!message.contains("buyer@example.com"));
}

#[tokio::test]
async fn test_rate_limit_returns_429() {
    let error = ApiError::from(AuthError::RateLimitExceeded {
        limit: 30,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_store_failure_returns_generic_500() {
    let error = ApiError::from(AuthError::Store {
        message: "disk I/O error at /var/lib/db".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("email query parameter is required", "email");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_invalid_role_maps_to_validation_on_role_field() {
    let error = ApiError::from(st_core::CoreError::InvalidRole {
        value: "Wizard".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "role");
    assert_eq!(json["error"]["message"], "Invalid role: Wizard");
}

#[tokio::test]
async fn test_bad_request_omits_field() {
    let error = ApiError::bad_request("Malformed body");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"].get("field").is_none());
}
