use crate::SellerStatus;

use std::str::FromStr;

#[test]
fn test_seller_status_from_str() {
    assert_eq!(
        SellerStatus::from_str("pending").unwrap(),
        SellerStatus::Pending
    );
    assert_eq!(
        SellerStatus::from_str("verified").unwrap(),
        SellerStatus::Verified
    );
    assert!(SellerStatus::from_str("Verified").is_err());
}

#[test]
fn test_seller_status_default() {
    assert_eq!(SellerStatus::default(), SellerStatus::Pending);
}
