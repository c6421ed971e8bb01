use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A buyer's reservation of a product. Owned by `buyer_email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub product_id: String,
    pub product_name: Option<String>,
    pub price: Option<i64>,
    pub buyer_name: Option<String>,
    pub buyer_email: String,
    pub phone: Option<String>,
    pub meeting_location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(product_id: String, buyer_email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            product_name: None,
            price: None,
            buyer_name: None,
            buyer_email,
            phone: None,
            meeting_location: None,
            created_at: Utc::now(),
        }
    }
}
