pub mod booking_repository;
pub mod category_repository;
pub mod product_repository;
pub mod user_repository;
pub mod wishlist_repository;

mod row;
