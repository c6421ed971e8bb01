pub mod api;
pub mod app_state;
pub mod error;
pub mod gates;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    bookings::{
        bookings::{create_booking, delete_booking, list_bookings},
        create_booking_request::CreateBookingRequest,
        owner_query::OwnerQuery,
    },
    categories::{
        categories::{create_category, get_category, list_categories},
        create_category_request::CreateCategoryRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller::Caller,
    jwt::{
        issue_credential_query::IssueCredentialQuery, jwt::issue_credential,
        token_response::TokenResponse,
    },
    products::{
        create_product_request::CreateProductRequest,
        product_queries::{ListProductsQuery, SellerProductsQuery},
        products::{
            create_product, delete_product, list_advertised, list_products,
            list_seller_products, update_listing,
        },
        update_listing_request::UpdateListingRequest,
    },
    users::{
        register_user_request::RegisterUserRequest,
        role_check_response::{AdminCheckResponse, BuyerCheckResponse, SellerCheckResponse},
        update_role_request::UpdateRoleRequest,
        update_seller_status_request::UpdateSellerStatusRequest,
        users::{
            delete_buyer, delete_seller, is_admin, is_buyer, is_seller, list_buyers,
            list_sellers, register_user, update_role, update_seller_status,
        },
    },
    wishlist::{
        add_wishlist_request::AddWishlistRequest,
        wishlist::{add_to_wishlist, list_wishlist},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
