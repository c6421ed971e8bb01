//! Product entity - a secondhand listing owned by a seller.

use crate::{ProductCondition, ProductStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A listing. `seller_email` is the owner reference and never changes after
/// creation; only `ad` and `status` are edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub location: Option<String>,
    pub resale_price: i64,
    pub original_price: i64,
    pub years_of_use: i32,
    pub condition: ProductCondition,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub seller_name: Option<String>,
    pub seller_email: String,
    /// Promoted on the advertised listings page
    pub ad: bool,
    pub status: ProductStatus,
    pub posted_at: DateTime<Utc>,
}

impl Product {
    /// Create a new, unadvertised, available listing
    pub fn new(category_id: Uuid, name: String, seller_email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id,
            name,
            image: None,
            location: None,
            resale_price: 0,
            original_price: 0,
            years_of_use: 0,
            condition: ProductCondition::default(),
            phone: None,
            description: None,
            seller_name: None,
            seller_email,
            ad: false,
            status: ProductStatus::Available,
            posted_at: Utc::now(),
        }
    }

    pub fn is_advertised(&self) -> bool {
        self.ad && self.status == ProductStatus::Available
    }
}
