use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Buyer.as_str(), "Buyer");
    assert_eq!(Role::Seller.as_str(), "Seller");
    assert_eq!(Role::Admin.as_str(), "Admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("Buyer").unwrap(), Role::Buyer);
    assert_eq!(Role::from_str("Seller").unwrap(), Role::Seller);
    assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
}

#[test]
fn test_role_from_str_is_case_sensitive() {
    assert!(Role::from_str("admin").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_serializes_as_stored_string() {
    let json = serde_json::to_string(&Role::Seller).unwrap();
    assert_eq!(json, "\"Seller\"");

    let parsed: Role = serde_json::from_str("\"Admin\"").unwrap();
    assert_eq!(parsed, Role::Admin);
}
