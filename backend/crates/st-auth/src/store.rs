use crate::Result as AuthErrorResult;

use st_core::Identity;
use st_db::{BookingRepository, ProductRepository, UserRepository};

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Read access to identity records, injected into the credential service
/// and the role gate.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_identity(&self, email: &str) -> AuthErrorResult<Option<Identity>>;
}

#[async_trait]
impl IdentityStore for UserRepository {
    async fn find_identity(&self, email: &str) -> AuthErrorResult<Option<Identity>> {
        Ok(self.find_by_email(email).await?)
    }
}

/// Record kinds whose stored owner can be checked against the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnedResource {
    Product,
    Booking,
}

impl OwnedResource {
    /// Name of the owner field as it appears on the wire
    pub fn owner_field(&self) -> &'static str {
        match self {
            Self::Product => "sellerEmail",
            Self::Booking => "buyerEmail",
        }
    }
}

#[async_trait]
pub trait RecordOwnerStore: Send + Sync {
    /// Stored owner email of the record, `None` when it does not exist
    async fn find_owner(&self, resource: OwnedResource, id: &str)
    -> AuthErrorResult<Option<String>>;
}

/// Store backed by the SQLite repositories
#[derive(Clone)]
pub struct SqliteAuthStore {
    users: UserRepository,
    products: ProductRepository,
    bookings: BookingRepository,
}

impl SqliteAuthStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            products: ProductRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }
}

#[async_trait]
impl IdentityStore for SqliteAuthStore {
    async fn find_identity(&self, email: &str) -> AuthErrorResult<Option<Identity>> {
        self.users.find_identity(email).await
    }
}

#[async_trait]
impl RecordOwnerStore for SqliteAuthStore {
    async fn find_owner(
        &self,
        resource: OwnedResource,
        id: &str,
    ) -> AuthErrorResult<Option<String>> {
        // Ids that are not UUIDs cannot name a stored record
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let owner = match resource {
            OwnedResource::Product => self.products.find_seller_email(id).await?,
            OwnedResource::Booking => self.bookings.find_buyer_email(id).await?,
        };
        Ok(owner)
    }
}
