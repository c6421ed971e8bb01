use crate::{ApiError, ApiResult, AppState, CreateCategoryRequest};

use st_core::{Category, InsertResult};
use st_db::CategoryRepository;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.pool.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /categories/{id}
///
/// An unknown id yields `null`.
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<Category>>> {
    let id = Uuid::parse_str(&id)?;

    let repo = CategoryRepository::new(state.pool.clone());
    Ok(Json(repo.find_by_id(id).await?))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> ApiResult<Json<InsertResult>> {
    let Json(req) = payload?;
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("Category name cannot be empty", "name"));
    }

    let repo = CategoryRepository::new(state.pool.clone());
    let result = repo
        .insert(&Category::new(name.to_string(), req.image))
        .await?;

    Ok(Json(result))
}
