pub mod register_user_request;
pub mod role_check_response;
pub mod update_role_request;
pub mod update_seller_status_request;
pub mod users;
