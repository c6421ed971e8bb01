use crate::repositories::row;
use crate::Result as DbErrorResult;

use st_core::{Category, InsertResult};

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct CategoryRow {
    id: String,
    name: String,
    image: Option<String>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = crate::DbError;

    fn try_from(r: CategoryRow) -> DbErrorResult<Self> {
        Ok(Category {
            id: row::uuid(&r.id, "categories.id")?,
            name: r.name,
            image: r.image,
        })
    }
}

#[derive(Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a category; a duplicate name is acknowledged but skipped
    pub async fn insert(&self, category: &Category) -> DbErrorResult<InsertResult> {
        let result = sqlx::query(
            "INSERT INTO categories (id, name, image) VALUES (?, ?, ?) ON CONFLICT(name) DO NOTHING",
        )
        .bind(category.id.to_string())
        .bind(&category.name)
        .bind(&category.image)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(InsertResult::skipped());
        }
        Ok(InsertResult::inserted(category.id))
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, image FROM categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Category::try_from).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, image FROM categories WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Category::try_from).transpose()
    }
}
