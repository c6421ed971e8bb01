use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub product_id: String,
    pub product_name: Option<String>,
    pub price: Option<i64>,
    pub buyer_email: String,
    pub created_at: DateTime<Utc>,
}

impl WishlistEntry {
    pub fn new(product_id: String, buyer_email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            product_name: None,
            price: None,
            buyer_email,
            created_at: Utc::now(),
        }
    }
}
