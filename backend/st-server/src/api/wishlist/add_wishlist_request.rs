use crate::ApiError;

use st_core::WishlistEntry;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWishlistRequest {
    pub product_id: String,
    pub product_name: Option<String>,
    pub price: Option<i64>,
    pub buyer_email: String,
}

impl TryFrom<AddWishlistRequest> for WishlistEntry {
    type Error = ApiError;

    fn try_from(req: AddWishlistRequest) -> Result<Self, Self::Error> {
        if req.product_id.trim().is_empty() {
            return Err(ApiError::validation("productId is required", "productId"));
        }

        let mut entry = WishlistEntry::new(req.product_id, req.buyer_email);
        entry.product_name = req.product_name;
        entry.price = req.price;
        Ok(entry)
    }
}
