pub mod add_wishlist_request;
pub mod wishlist;
