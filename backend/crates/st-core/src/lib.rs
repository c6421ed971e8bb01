pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::booking::Booking;
pub use models::category::Category;
pub use models::identity::Identity;
pub use models::product::Product;
pub use models::product_condition::ProductCondition;
pub use models::product_status::ProductStatus;
pub use models::role::Role;
pub use models::seller_status::SellerStatus;
pub use models::wishlist_entry::WishlistEntry;
pub use models::write_result::{DeleteResult, InsertResult, UpdateResult};

#[cfg(test)]
mod tests;
