use crate::{AddWishlistRequest, ApiResult, AppState, OwnerQuery};

use st_core::{InsertResult, WishlistEntry};
use st_db::WishlistRepository;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

/// POST /wishlist
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    payload: Result<Json<AddWishlistRequest>, JsonRejection>,
) -> ApiResult<Json<InsertResult>> {
    let Json(req) = payload?;
    let entry = WishlistEntry::try_from(req)?;

    let repo = WishlistRepository::new(state.pool.clone());
    Ok(Json(repo.insert(&entry).await?))
}

/// GET /wishlist?email=
///
/// With record ownership disabled and no email, every entry is returned.
pub async fn list_wishlist(
    State(state): State<AppState>,
    query: Result<Query<OwnerQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<WishlistEntry>>> {
    let Query(query) = query?;

    let repo = WishlistRepository::new(state.pool.clone());
    Ok(Json(repo.find(query.email.as_deref()).await?))
}
