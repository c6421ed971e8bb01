//! Product listing handlers. Authorization happens in the route gates.

use crate::{
    ApiResult, AppState, CreateProductRequest, ListProductsQuery, SellerProductsQuery,
    UpdateListingRequest,
};

use st_core::{DeleteResult, InsertResult, Product, ProductStatus, UpdateResult};
use st_db::{ListingUpdate, ProductFilter, ProductRepository};

use std::str::FromStr;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use uuid::Uuid;

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> ApiResult<Json<InsertResult>> {
    let Json(req) = payload?;
    let product = Product::try_from(req)?;

    let repo = ProductRepository::new(state.pool.clone());
    let result = repo.insert(&product).await?;

    log::info!("Listed product {} for {}", product.id, product.seller_email);
    Ok(Json(result))
}

/// GET /products?categoryId=
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let Query(query) = query?;
    let category_id = query
        .category_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;

    let repo = ProductRepository::new(state.pool.clone());
    let filter = ProductFilter {
        category_id,
        ..ProductFilter::default()
    };
    Ok(Json(repo.find(&filter).await?))
}

/// GET /advertised
pub async fn list_advertised(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.pool.clone());
    let filter = ProductFilter {
        advertised_only: true,
        ..ProductFilter::default()
    };
    Ok(Json(repo.find(&filter).await?))
}

/// GET /myProducts?email=
///
/// Without an email no listing matches.
pub async fn list_seller_products(
    State(state): State<AppState>,
    query: Result<Query<SellerProductsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let Query(query) = query?;
    let Some(email) = query.email else {
        return Ok(Json(Vec::new()));
    };

    let repo = ProductRepository::new(state.pool.clone());
    let filter = ProductFilter {
        seller_email: Some(email),
        ..ProductFilter::default()
    };
    Ok(Json(repo.find(&filter).await?))
}

/// PATCH /myProducts/{id}
pub async fn update_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateListingRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateResult>> {
    let Json(req) = payload?;
    let id = Uuid::parse_str(&id)?;
    let update = ListingUpdate {
        ad: req.ad,
        status: req.status.as_deref().map(ProductStatus::from_str).transpose()?,
    };

    let repo = ProductRepository::new(state.pool.clone());
    Ok(Json(repo.update_listing(id, &update).await?))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResult>> {
    let id = Uuid::parse_str(&id)?;

    let repo = ProductRepository::new(state.pool.clone());
    let result = repo.delete(id).await?;

    log::info!("Deleted product {} ({} removed)", id, result.deleted_count);
    Ok(Json(result))
}
