pub mod create_product_request;
pub mod product_queries;
pub mod products;
pub mod update_listing_request;
