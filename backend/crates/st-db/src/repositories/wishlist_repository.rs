use crate::repositories::row;
use crate::Result as DbErrorResult;

use st_core::{InsertResult, WishlistEntry};

use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct WishlistRow {
    id: String,
    product_id: String,
    product_name: Option<String>,
    price: Option<i64>,
    buyer_email: String,
    created_at: i64,
}

impl TryFrom<WishlistRow> for WishlistEntry {
    type Error = crate::DbError;

    fn try_from(r: WishlistRow) -> DbErrorResult<Self> {
        Ok(WishlistEntry {
            id: row::uuid(&r.id, "wishlist.id")?,
            product_id: r.product_id,
            product_name: r.product_name,
            price: r.price,
            buyer_email: r.buyer_email,
            created_at: row::timestamp(r.created_at, "wishlist.created_at")?,
        })
    }
}

#[derive(Clone)]
pub struct WishlistRepository {
    pool: SqlitePool,
}

impl WishlistRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, entry: &WishlistEntry) -> DbErrorResult<InsertResult> {
        sqlx::query(
            r#"
                INSERT INTO wishlist (id, product_id, product_name, price, buyer_email, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entry.id.to_string())
        .bind(&entry.product_id)
        .bind(&entry.product_name)
        .bind(entry.price)
        .bind(&entry.buyer_email)
        .bind(entry.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(InsertResult::inserted(entry.id))
    }

    /// All entries, or only those of one buyer
    pub async fn find(&self, buyer_email: Option<&str>) -> DbErrorResult<Vec<WishlistEntry>> {
        let rows = match buyer_email {
            Some(email) => {
                sqlx::query_as::<_, WishlistRow>(
                    r#"
                        SELECT id, product_id, product_name, price, buyer_email, created_at
                        FROM wishlist WHERE buyer_email = ? ORDER BY created_at ASC
                    "#,
                )
                .bind(email)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, WishlistRow>(
                    r#"
                        SELECT id, product_id, product_name, price, buyer_email, created_at
                        FROM wishlist ORDER BY created_at ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(WishlistEntry::try_from).collect()
    }
}
