mod identity;
mod product;
mod role;
mod seller_status;
mod write_result;
