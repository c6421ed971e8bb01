use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateSellerStatusRequest {
    pub status: String,
}
