use aerovia_core::{Booking, Flight};
use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

// The booking boundary speaks camelCase, matching the browser client the
// original served. The flattened `Booking` fields stay snake_case, as the
// original emitted stored rows verbatim.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFlightRequest {
    pub flight_id: Uuid,
    pub passenger_name: String,
    pub user_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookedFlight {
    #[serde(flatten)]
    booking: Booking,
    flight: Flight,
    surge_applied: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookFlightResponse {
    success: bool,
    booking: BookedFlight,
    new_balance: Decimal,
}

#[derive(Debug, Serialize)]
struct HistoryEntry {
    #[serde(flatten)]
    booking: Booking,
    flight: Option<Flight>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/bookings", post(create_booking).get(list_bookings))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookFlightRequest>,
) -> Result<Json<BookFlightResponse>, AppError> {
    let confirmation = state
        .orchestrator
        .book_flight(req.flight_id, &req.passenger_name, &req.user_id)
        .await?;

    info!(
        pnr = %confirmation.booking.pnr,
        user_id = %req.user_id,
        "booking request completed"
    );

    Ok(Json(BookFlightResponse {
        success: true,
        booking: BookedFlight {
            booking: confirmation.booking,
            flight: confirmation.flight,
            surge_applied: confirmation.surge_applied,
        },
        new_balance: confirmation.new_balance,
    }))
}

async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let bookings = state
        .bookings
        .list_recent()
        .await
        .map_err(AppError::internal)?;

    let mut entries = Vec::with_capacity(bookings.len());
    for booking in bookings {
        let flight = state
            .catalog
            .get_flight(booking.flight_id)
            .await
            .map_err(AppError::internal)?;
        entries.push(HistoryEntry { booking, flight });
    }

    Ok(Json(entries))
}
