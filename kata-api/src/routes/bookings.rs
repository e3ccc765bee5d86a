use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    domain::models::Booking,
    routes::{
        validation::{optional_text, parse_datetime_field, require_text},
        ApiError,
    },
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings).post(add_booking))
        .route("/:id", delete(cancel_booking))
}

#[instrument(name = "GET /bookings", skip(app_state))]
async fn list_bookings(State(app_state): State<AppState>) -> Json<Vec<Booking>> {
    let mut bookings = app_state.bookings.all().await;
    bookings.sort_by(|a, b| a.date.cmp(&b.date));
    Json(bookings)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddBookingBody {
    client: String,
    service: String,
    date: String,
    notes: Option<String>,
}

#[instrument(name = "POST /bookings", skip(app_state, body))]
async fn add_booking(
    State(app_state): State<AppState>,
    Json(body): Json<AddBookingBody>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let client = require_text("client", &body.client)?;
    let service = require_text("service", &body.service)?;
    let date = parse_datetime_field("date", &body.date)?;

    let mut booking = Booking::new(client, service, date);
    if let Some(notes) = optional_text(body.notes) {
        booking = booking.with_notes(notes);
    }

    let booking = app_state.bookings.add(booking).await;
    Ok((StatusCode::CREATED, Json(booking)))
}

#[instrument(name = "DELETE /bookings/:id", skip(app_state))]
async fn cancel_booking(State(app_state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    app_state.bookings.remove(id).await;
    StatusCode::OK
}
