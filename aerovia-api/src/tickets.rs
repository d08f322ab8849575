use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/tickets/{booking_id}", get(download_ticket))
}

async fn download_ticket(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let booking = state
        .bookings
        .get(booking_id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::NotFound(format!("Booking not found: {booking_id}")))?;

    let flight = state
        .catalog
        .get_flight(booking.flight_id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::NotFound(format!("Flight not found: {}", booking.flight_id)))?;

    let document = state.tickets.render(&booking, &flight);

    let headers = [
        (header::CONTENT_TYPE, document.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", document.file_name),
        ),
    ];

    Ok((headers, document.body).into_response())
}
