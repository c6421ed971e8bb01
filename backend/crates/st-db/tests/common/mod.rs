#![allow(dead_code)]

use st_core::{Identity, Product, Role};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    st_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn buyer(email: &str) -> Identity {
    Identity::register(email, None, Some(Role::Buyer)).expect("valid buyer")
}

pub fn seller(email: &str) -> Identity {
    Identity::register(email, Some("Sam Seller".into()), Some(Role::Seller)).expect("valid seller")
}

pub fn product(category_id: Uuid, seller_email: &str) -> Product {
    let mut product = Product::new(category_id, "Yamaha P-45".into(), seller_email.into());
    product.resale_price = 250;
    product.original_price = 450;
    product.years_of_use = 2;
    product
}
