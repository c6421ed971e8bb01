//! Identity registration, role probes and admin moderation

use crate::{
    AdminCheckResponse, ApiResult, AppState, BuyerCheckResponse, RegisterUserRequest,
    SellerCheckResponse, UpdateRoleRequest, UpdateSellerStatusRequest,
};

use st_core::{DeleteResult, Identity, InsertResult, Role, SellerStatus, UpdateResult};
use st_db::{UserFilter, UserRepository};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

/// POST /users
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> ApiResult<Json<InsertResult>> {
    let Json(req) = payload?;
    let role = req.role.as_deref().map(Role::from_str).transpose()?;
    let identity = Identity::register(&req.email, req.name, role)?;

    let repo = UserRepository::new(state.pool.clone());
    let result = repo.insert(&identity).await?;

    if result.inserted_id.is_some() {
        log::info!("Registered {} as {:?}", identity.email, identity.role);
    }
    Ok(Json(result))
}

/// GET /users/admin/{email}
pub async fn is_admin(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<AdminCheckResponse>> {
    let identity = find_identity(&state, &email).await?;

    Ok(Json(AdminCheckResponse {
        is_admin: identity.is_some_and(|i| i.has_role(Role::Admin)),
    }))
}

/// GET /users/buyer/{email}
pub async fn is_buyer(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<BuyerCheckResponse>> {
    let identity = find_identity(&state, &email).await?;

    Ok(Json(BuyerCheckResponse {
        is_buyer: identity.is_some_and(|i| i.has_role(Role::Buyer)),
    }))
}

/// GET /users/seller/{email}
pub async fn is_seller(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<SellerCheckResponse>> {
    let identity = find_identity(&state, &email).await?;

    Ok(Json(SellerCheckResponse {
        is_seller: identity.as_ref().is_some_and(|i| i.has_role(Role::Seller)),
        is_verified: identity.is_some_and(|i| i.is_verified_seller()),
    }))
}

/// GET /users/buyer
pub async fn list_buyers(State(state): State<AppState>) -> ApiResult<Json<Vec<Identity>>> {
    list_by_role(&state, Role::Buyer).await
}

/// GET /users/seller
pub async fn list_sellers(State(state): State<AppState>) -> ApiResult<Json<Vec<Identity>>> {
    list_by_role(&state, Role::Seller).await
}

/// DELETE /users/buyer/{id}
pub async fn delete_buyer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResult>> {
    delete_with_role(&state, &id, Role::Buyer).await
}

/// DELETE /users/seller/{id}
pub async fn delete_seller(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResult>> {
    delete_with_role(&state, &id, Role::Seller).await
}

/// PATCH /users/seller/{id}
///
/// Sets the verification status only; the role is untouched.
pub async fn update_seller_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateSellerStatusRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateResult>> {
    let Json(req) = payload?;
    let id = Uuid::parse_str(&id)?;
    let status = SellerStatus::from_str(&req.status)?;

    let repo = UserRepository::new(state.pool.clone());
    let result = repo.set_seller_status(id, status).await?;

    log::info!("Seller {} status set to {} ({} matched)", id, status, result.matched_count);
    Ok(Json(result))
}

/// PATCH /users/role/{id}
///
/// Role gates re-read the record, so the change applies to the next request
/// without reissuing credentials.
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateRoleRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateResult>> {
    let Json(req) = payload?;
    let id = Uuid::parse_str(&id)?;
    let role = req.role.as_deref().map(Role::from_str).transpose()?;

    let repo = UserRepository::new(state.pool.clone());
    let result = repo.set_role(id, role).await?;

    log::info!("Identity {} role set to {:?} ({} matched)", id, role, result.matched_count);
    Ok(Json(result))
}

async fn find_identity(state: &AppState, email: &str) -> ApiResult<Option<Identity>> {
    let repo = UserRepository::new(state.pool.clone());
    Ok(repo.find_by_email(email).await?)
}

async fn list_by_role(state: &AppState, role: Role) -> ApiResult<Json<Vec<Identity>>> {
    let repo = UserRepository::new(state.pool.clone());
    Ok(Json(repo.find(&UserFilter::by_role(role)).await?))
}

async fn delete_with_role(state: &AppState, id: &str, role: Role) -> ApiResult<Json<DeleteResult>> {
    let id = Uuid::parse_str(id)?;

    let repo = UserRepository::new(state.pool.clone());
    let result = repo.delete_with_role(id, role).await?;

    log::info!("Deleted {} identity {} ({} removed)", role, id, result.deleted_count);
    Ok(Json(result))
}
