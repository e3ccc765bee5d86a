use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    domain::models::TaskItem,
    routes::{
        validation::{optional_text, require_text},
        ApiError,
    },
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(add_task))
        .route("/:id/toggle", post(toggle_task))
        .route("/:id", delete(delete_task))
}

#[instrument(name = "GET /tasks", skip(app_state))]
async fn list_tasks(State(app_state): State<AppState>) -> Json<Vec<TaskItem>> {
    Json(app_state.tasks.all().await)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddTaskBody {
    title: String,
    category: Option<String>,
}

#[instrument(name = "POST /tasks", skip(app_state, body))]
async fn add_task(
    State(app_state): State<AppState>,
    Json(body): Json<AddTaskBody>,
) -> Result<(StatusCode, Json<TaskItem>), ApiError> {
    let title = require_text("title", &body.title)?;

    let mut task = TaskItem::new(title);
    if let Some(category) = optional_text(body.category) {
        task = task.with_category(category);
    }

    let task = app_state.tasks.add(task).await;
    Ok((StatusCode::CREATED, Json(task)))
}

#[instrument(name = "POST /tasks/:id/toggle", skip(app_state))]
async fn toggle_task(State(app_state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    app_state.tasks.update(id, TaskItem::toggle_done).await;
    StatusCode::OK
}

#[instrument(name = "DELETE /tasks/:id", skip(app_state))]
async fn delete_task(State(app_state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    app_state.tasks.remove(id).await;
    StatusCode::OK
}
