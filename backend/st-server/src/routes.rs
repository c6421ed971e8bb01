use crate::gates::GateChain;
use crate::{
    AppState, add_to_wishlist, create_booking, create_category, create_product, delete_booking,
    delete_buyer, delete_product, delete_seller, get_category, health, is_admin, is_buyer,
    is_seller, issue_credential, list_advertised, list_bookings, list_buyers, list_categories,
    list_products, list_seller_products, list_sellers, list_wishlist, register_user,
    update_listing, update_role, update_seller_status,
};

use st_auth::OwnedResource;
use st_core::Role;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints.
///
/// Gates are declared per route; handlers contain no authorization logic.
/// Brackets in the comments mark gates that only run while record ownership
/// is enforced.
pub fn build_router(state: AppState) -> Router {
    let admin = || GateChain::new(&state).role(Role::Admin);
    let seller = || GateChain::new(&state).role(Role::Seller);
    let buyer = || GateChain::new(&state).role(Role::Buyer);

    Router::new()
        .route("/", get(health::banner))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Credential issuance
        .route("/jwt", get(issue_credential))
        // Identities. `{key}` is an email on GET and an id otherwise.
        .route("/users", post(register_user))
        .route("/users/admin/{email}", get(is_admin))
        .route("/users/buyer", get(list_buyers))
        .route("/users/seller", get(list_sellers))
        .route("/users/buyer/{key}", get(is_buyer))
        .route("/users/buyer/{key}", admin().guard(delete(delete_buyer)))
        .route("/users/seller/{key}", get(is_seller))
        .route(
            "/users/seller/{key}",
            admin().guard(delete(delete_seller).patch(update_seller_status)),
        )
        .route("/users/role/{id}", admin().guard(patch(update_role)))
        // Categories
        .route("/categories", get(list_categories))
        .route("/categories", admin().guard(post(create_category)))
        .route("/categories/{id}", get(get_category))
        // Products: Seller [+ body sellerEmail] / Seller [+ record owner]
        .route("/products", get(list_products))
        .route(
            "/products",
            seller()
                .when_enforcing(|chain| chain.owner_in_body("sellerEmail"))
                .guard(post(create_product)),
        )
        .route(
            "/products/{id}",
            seller()
                .when_enforcing(|chain| chain.record_owner(OwnedResource::Product))
                .guard(delete(delete_product)),
        )
        .route("/advertised", get(list_advertised))
        .route("/myProducts", get(list_seller_products))
        .route(
            "/myProducts/{id}",
            seller()
                .when_enforcing(|chain| chain.record_owner(OwnedResource::Product))
                .guard(patch(update_listing)),
        )
        // Bookings: Buyer [+ body buyerEmail] / Buyer + query email / Buyer [+ record owner]
        .route(
            "/bookings",
            buyer()
                .when_enforcing(|chain| chain.owner_in_body("buyerEmail"))
                .guard(post(create_booking)),
        )
        .route(
            "/bookings",
            buyer().owner_in_query("email").guard(get(list_bookings)),
        )
        .route(
            "/bookings/{id}",
            buyer()
                .when_enforcing(|chain| chain.record_owner(OwnedResource::Booking))
                .guard(delete(delete_booking)),
        )
        // Wishlist: Buyer [+ body buyerEmail] / credential [+ query email]
        .route(
            "/wishlist",
            buyer()
                .when_enforcing(|chain| chain.owner_in_body("buyerEmail"))
                .guard(post(add_to_wishlist)),
        )
        .route(
            "/wishlist",
            GateChain::new(&state)
                .when_enforcing(|chain| chain.owner_in_query("email"))
                .guard(get(list_wishlist)),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
