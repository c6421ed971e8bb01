pub mod categories;
pub mod create_category_request;
