//! Product listings. `seller_email` is the owner reference consulted by the
//! record-ownership gate.

use crate::repositories::row;
use crate::Result as DbErrorResult;

use st_core::{DeleteResult, InsertResult, Product, ProductStatus, UpdateResult};

use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

const PRODUCT_COLUMNS: &str = "id, category_id, name, image, location, resale_price, \
     original_price, years_of_use, condition, phone, description, seller_name, seller_email, \
     ad, status, posted_at";

#[derive(FromRow)]
struct ProductRow {
    id: String,
    category_id: String,
    name: String,
    image: Option<String>,
    location: Option<String>,
    resale_price: i64,
    original_price: i64,
    years_of_use: i64,
    condition: String,
    phone: Option<String>,
    description: Option<String>,
    seller_name: Option<String>,
    seller_email: String,
    ad: bool,
    status: String,
    posted_at: i64,
}

impl TryFrom<ProductRow> for Product {
    type Error = crate::DbError;

    fn try_from(r: ProductRow) -> DbErrorResult<Self> {
        Ok(Product {
            id: row::uuid(&r.id, "products.id")?,
            category_id: row::uuid(&r.category_id, "products.category_id")?,
            name: r.name,
            image: r.image,
            location: r.location,
            resale_price: r.resale_price,
            original_price: r.original_price,
            years_of_use: r.years_of_use as i32,
            condition: row::parsed(&r.condition, "products.condition")?,
            phone: r.phone,
            description: r.description,
            seller_name: r.seller_name,
            seller_email: r.seller_email,
            ad: r.ad,
            status: row::parsed(&r.status, "products.status")?,
            posted_at: row::timestamp(r.posted_at, "products.posted_at")?,
        })
    }
}

/// Filter for listing products. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<Uuid>,
    pub seller_email: Option<String>,
    /// Only advertised, still-available listings
    pub advertised_only: bool,
}

/// Seller-editable sub-fields of a listing
#[derive(Debug, Clone, Default)]
pub struct ListingUpdate {
    pub ad: Option<bool>,
    pub status: Option<ProductStatus>,
}

impl ListingUpdate {
    pub fn is_empty(&self) -> bool {
        self.ad.is_none() && self.status.is_none()
    }
}

#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, product: &Product) -> DbErrorResult<InsertResult> {
        let sql = format!(
            "INSERT INTO products ({PRODUCT_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        );
        sqlx::query(&sql)
            .bind(product.id.to_string())
            .bind(product.category_id.to_string())
            .bind(&product.name)
            .bind(&product.image)
            .bind(&product.location)
            .bind(product.resale_price)
            .bind(product.original_price)
            .bind(product.years_of_use)
            .bind(product.condition.as_str())
            .bind(&product.phone)
            .bind(&product.description)
            .bind(&product.seller_name)
            .bind(&product.seller_email)
            .bind(product.ad)
            .bind(product.status.as_str())
            .bind(product.posted_at.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(InsertResult::inserted(product.id))
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Product::try_from).transpose()
    }

    /// Newest listings first
    pub async fn find(&self, filter: &ProductFilter) -> DbErrorResult<Vec<Product>> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE 1 = 1"));

        if let Some(category_id) = filter.category_id {
            query
                .push(" AND category_id = ")
                .push_bind(category_id.to_string());
        }
        if let Some(seller_email) = &filter.seller_email {
            query
                .push(" AND seller_email = ")
                .push_bind(seller_email.clone());
        }
        if filter.advertised_only {
            query
                .push(" AND ad = 1 AND status = ")
                .push_bind(ProductStatus::Available.as_str());
        }
        query.push(" ORDER BY posted_at DESC");

        let rows = query
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Owner reference of a listing, without loading the whole record
    pub async fn find_seller_email(&self, id: Uuid) -> DbErrorResult<Option<String>> {
        let email = sqlx::query_scalar::<_, String>("SELECT seller_email FROM products WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(email)
    }

    pub async fn update_listing(
        &self,
        id: Uuid,
        update: &ListingUpdate,
    ) -> DbErrorResult<UpdateResult> {
        if update.is_empty() {
            return Ok(UpdateResult::new(0));
        }

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE products SET ");
        let mut fields = query.separated(", ");
        if let Some(ad) = update.ad {
            fields.push("ad = ").push_bind_unseparated(ad);
        }
        if let Some(status) = update.status {
            fields.push("status = ").push_bind_unseparated(status.as_str());
        }
        query.push(" WHERE id = ").push_bind(id.to_string());

        let result = query.build().execute(&self.pool).await?;

        Ok(UpdateResult::new(result.rows_affected()))
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<DeleteResult> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
