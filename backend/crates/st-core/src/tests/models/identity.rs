use crate::{CoreError, Identity, Role, SellerStatus};

use googletest::prelude::*;

#[test]
fn given_seller_registration_when_registered_then_status_is_pending() {
    let identity = Identity::register("s@x.com", None, Some(Role::Seller)).unwrap();

    assert_that!(identity.role, some(eq(Role::Seller)));
    assert_that!(identity.status, some(eq(SellerStatus::Pending)));
    assert_that!(identity.is_verified_seller(), eq(false));
}

#[test]
fn given_buyer_registration_when_registered_then_status_is_unset() {
    let identity = Identity::register("b@x.com", Some("Bea".into()), Some(Role::Buyer)).unwrap();

    assert_that!(identity.status, none());
    assert_that!(identity.has_role(Role::Buyer), eq(true));
    assert_that!(identity.has_role(Role::Seller), eq(false));
}

#[test]
fn given_registration_without_role_when_registered_then_role_is_unset() {
    let identity = Identity::register("u@x.com", None, None).unwrap();

    assert_that!(identity.role, none());
    assert_that!(identity.has_role(Role::Buyer), eq(false));
}

#[test]
fn given_admin_role_when_registered_then_validation_error() {
    let result = Identity::register("a@x.com", None, Some(Role::Admin));

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_malformed_email_when_registered_then_validation_error() {
    assert!(Identity::register("", None, Some(Role::Buyer)).is_err());
    assert!(Identity::register("not-an-email", None, Some(Role::Buyer)).is_err());
}

#[test]
fn given_padded_email_when_registered_then_email_is_trimmed() {
    let identity = Identity::register("  b@x.com ", None, Some(Role::Buyer)).unwrap();

    assert_eq!(identity.email, "b@x.com");
}

#[test]
fn given_identity_when_serialized_then_uses_document_field_names() {
    let identity = Identity::admin("root@x.com");
    let json = serde_json::to_value(&identity).unwrap();

    assert_eq!(json["_id"], identity.id.to_string());
    assert_eq!(json["role"], "Admin");
    assert!(json.get("createdAt").is_some());
}
