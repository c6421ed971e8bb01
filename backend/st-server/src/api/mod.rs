pub mod bookings;
pub mod categories;
pub mod error;
pub mod extractors;
pub mod jwt;
pub mod products;
pub mod users;
pub mod wishlist;
