use serde::Deserialize;

/// Seller-editable listing fields. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateListingRequest {
    pub ad: Option<bool>,
    pub status: Option<String>,
}
