pub mod booking;
pub mod category;
pub mod identity;
pub mod product;
pub mod product_condition;
pub mod product_status;
pub mod role;
pub mod seller_status;
pub mod wishlist_entry;
pub mod write_result;
