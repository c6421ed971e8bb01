use crate::{Product, ProductStatus};

use uuid::Uuid;

#[test]
fn test_new_product_is_available_and_not_advertised() {
    let product = Product::new(Uuid::new_v4(), "Fender Strat".into(), "s@x.com".into());

    assert_eq!(product.status, ProductStatus::Available);
    assert!(!product.ad);
    assert!(!product.is_advertised());
}

#[test]
fn test_sold_product_is_never_advertised() {
    let mut product = Product::new(Uuid::new_v4(), "Fender Strat".into(), "s@x.com".into());
    product.ad = true;
    assert!(product.is_advertised());

    product.status = ProductStatus::Sold;
    assert!(!product.is_advertised());
}

#[test]
fn test_product_serializes_camel_case() {
    let product = Product::new(Uuid::new_v4(), "Korg".into(), "s@x.com".into());
    let json = serde_json::to_value(&product).unwrap();

    assert_eq!(json["sellerEmail"], "s@x.com");
    assert_eq!(json["status"], "available");
    assert_eq!(json["condition"], "good");
}
