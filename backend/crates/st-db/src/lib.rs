pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::booking_repository::{BookingFilter, BookingRepository};
pub use repositories::category_repository::CategoryRepository;
pub use repositories::product_repository::{ListingUpdate, ProductFilter, ProductRepository};
pub use repositories::user_repository::{UserFilter, UserRepository};
pub use repositories::wishlist_repository::WishlistRepository;
