use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    domain::models::Note,
    routes::{
        validation::{optional_text, require_text},
        ApiError,
    },
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notes).post(add_note))
        .route("/:id", delete(delete_note))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    search: Option<String>,
}

#[instrument(name = "GET /notes", skip(app_state))]
async fn list_notes(
    State(app_state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Note>> {
    let mut notes = app_state.notes.all().await;
    if let Some(search) = optional_text(query.search) {
        notes.retain(|note| note.matches(&search));
    }
    notes.sort_by(|a, b| a.title.cmp(&b.title));
    Json(notes)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddNoteBody {
    title: String,
    category: Option<String>,
    content: Option<String>,
}

#[instrument(name = "POST /notes", skip(app_state, body))]
async fn add_note(
    State(app_state): State<AppState>,
    Json(body): Json<AddNoteBody>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let title = require_text("title", &body.title)?;

    let mut note = Note::new(title);
    if let Some(category) = optional_text(body.category) {
        note = note.with_category(category);
    }
    if let Some(content) = body.content {
        note = note.with_content(content);
    }

    let note = app_state.notes.add(note).await;
    Ok((StatusCode::CREATED, Json(note)))
}

#[instrument(name = "DELETE /notes/:id", skip(app_state))]
async fn delete_note(State(app_state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    app_state.notes.remove(id).await;
    StatusCode::OK
}
