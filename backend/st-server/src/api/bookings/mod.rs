pub mod bookings;
pub mod create_booking_request;
pub mod owner_query;
