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
    domain::models::CalendarEvent,
    routes::{
        validation::{optional_text, parse_date_field, require_text},
        ApiError,
    },
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(add_event))
        .route("/:id", delete(delete_event))
}

#[instrument(name = "GET /events", skip(app_state))]
async fn list_events(State(app_state): State<AppState>) -> Json<Vec<CalendarEvent>> {
    let mut events = app_state.events.all().await;
    events.sort_by(|a, b| a.date.cmp(&b.date));
    Json(events)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddEventBody {
    title: String,
    date: String,
    location: Option<String>,
}

#[instrument(name = "POST /events", skip(app_state, body))]
async fn add_event(
    State(app_state): State<AppState>,
    Json(body): Json<AddEventBody>,
) -> Result<(StatusCode, Json<CalendarEvent>), ApiError> {
    let title = require_text("title", &body.title)?;
    let date = parse_date_field("date", &body.date)?;

    let mut event = CalendarEvent::new(title, date);
    if let Some(location) = optional_text(body.location) {
        event = event.with_location(location);
    }

    let event = app_state.events.add(event).await;
    Ok((StatusCode::CREATED, Json(event)))
}

#[instrument(name = "DELETE /events/:id", skip(app_state))]
async fn delete_event(State(app_state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    app_state.events.remove(id).await;
    StatusCode::OK
}
