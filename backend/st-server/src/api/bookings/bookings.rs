use crate::{ApiResult, AppState, Caller, CreateBookingRequest};

use st_core::{Booking, DeleteResult, InsertResult};
use st_db::{BookingFilter, BookingRepository};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

/// POST /bookings
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> ApiResult<Json<InsertResult>> {
    let Json(req) = payload?;
    let booking = Booking::try_from(req)?;

    let repo = BookingRepository::new(state.pool.clone());
    let result = repo.insert(&booking).await?;

    log::info!(
        "{} booked product {}",
        booking.buyer_email,
        booking.product_id
    );
    Ok(Json(result))
}

/// GET /bookings?email=
///
/// Only reachable behind the query ownership gate, so `email` is the caller's.
pub async fn list_bookings(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> ApiResult<Json<Vec<Booking>>> {
    let repo = BookingRepository::new(state.pool.clone());
    Ok(Json(repo.find(&BookingFilter::by_buyer(caller.email())).await?))
}

/// DELETE /bookings/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResult>> {
    let id = Uuid::parse_str(&id)?;

    let repo = BookingRepository::new(state.pool.clone());
    Ok(Json(repo.delete(id).await?))
}
