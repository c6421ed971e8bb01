use crate::repositories::row;
use crate::Result as DbErrorResult;

use st_core::{Booking, DeleteResult, InsertResult};

use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

const BOOKING_COLUMNS: &str = "id, product_id, product_name, price, buyer_name, buyer_email, \
     phone, meeting_location, created_at";

#[derive(FromRow)]
struct BookingRow {
    id: String,
    product_id: String,
    product_name: Option<String>,
    price: Option<i64>,
    buyer_name: Option<String>,
    buyer_email: String,
    phone: Option<String>,
    meeting_location: Option<String>,
    created_at: i64,
}

impl TryFrom<BookingRow> for Booking {
    type Error = crate::DbError;

    fn try_from(r: BookingRow) -> DbErrorResult<Self> {
        Ok(Booking {
            id: row::uuid(&r.id, "bookings.id")?,
            product_id: r.product_id,
            product_name: r.product_name,
            price: r.price,
            buyer_name: r.buyer_name,
            buyer_email: r.buyer_email,
            phone: r.phone,
            meeting_location: r.meeting_location,
            created_at: row::timestamp(r.created_at, "bookings.created_at")?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub buyer_email: Option<String>,
    pub product_id: Option<String>,
}

impl BookingFilter {
    pub fn by_buyer(email: &str) -> Self {
        Self {
            buyer_email: Some(email.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, booking: &Booking) -> DbErrorResult<InsertResult> {
        let sql = format!("INSERT INTO bookings ({BOOKING_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)");
        sqlx::query(&sql)
            .bind(booking.id.to_string())
            .bind(&booking.product_id)
            .bind(&booking.product_name)
            .bind(booking.price)
            .bind(&booking.buyer_name)
            .bind(&booking.buyer_email)
            .bind(&booking.phone)
            .bind(&booking.meeting_location)
            .bind(booking.created_at.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(InsertResult::inserted(booking.id))
    }

    /// Oldest bookings first
    pub async fn find(&self, filter: &BookingFilter) -> DbErrorResult<Vec<Booking>> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE 1 = 1"));

        if let Some(buyer_email) = &filter.buyer_email {
            query.push(" AND buyer_email = ").push_bind(buyer_email.clone());
        }
        if let Some(product_id) = &filter.product_id {
            query.push(" AND product_id = ").push_bind(product_id.clone());
        }
        query.push(" ORDER BY created_at ASC");

        let rows = query
            .build_query_as::<BookingRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    pub async fn find_buyer_email(&self, id: Uuid) -> DbErrorResult<Option<String>> {
        let email = sqlx::query_scalar::<_, String>("SELECT buyer_email FROM bookings WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(email)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<DeleteResult> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
