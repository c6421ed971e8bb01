use crate::ApiError;

use st_core::Booking;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub product_id: String,
    pub product_name: Option<String>,
    pub price: Option<i64>,
    pub buyer_name: Option<String>,
    pub buyer_email: String,
    pub phone: Option<String>,
    pub meeting_location: Option<String>,
}

impl TryFrom<CreateBookingRequest> for Booking {
    type Error = ApiError;

    fn try_from(req: CreateBookingRequest) -> Result<Self, Self::Error> {
        if req.product_id.trim().is_empty() {
            return Err(ApiError::validation("productId is required", "productId"));
        }

        let mut booking = Booking::new(req.product_id, req.buyer_email);
        booking.product_name = req.product_name;
        booking.price = req.price;
        booking.buyer_name = req.buyer_name;
        booking.phone = req.phone;
        booking.meeting_location = req.meeting_location;
        Ok(booking)
    }
}
