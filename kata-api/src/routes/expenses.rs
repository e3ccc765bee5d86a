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
    domain::models::Expense,
    routes::{
        validation::{optional_text, parse_date_field, require_text},
        ApiError,
    },
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(add_expense))
        .route("/:id", delete(remove_expense))
}

#[instrument(name = "GET /expenses", skip(app_state))]
async fn list_expenses(State(app_state): State<AppState>) -> Json<Vec<Expense>> {
    let mut expenses = app_state.expenses.all().await;
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
    Json(expenses)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddExpenseBody {
    description: String,
    category: Option<String>,
    amount: f64,
    date: String,
}

#[instrument(name = "POST /expenses", skip(app_state, body))]
async fn add_expense(
    State(app_state): State<AppState>,
    Json(body): Json<AddExpenseBody>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let description = require_text("description", &body.description)?;
    if !body.amount.is_finite() || body.amount < 0.0 {
        return Err(ApiError::validation(
            "amount",
            "amount must be a non-negative number",
        ));
    }
    let date = parse_date_field("date", &body.date)?;

    let mut expense = Expense::new(description, body.amount, date);
    if let Some(category) = optional_text(body.category) {
        expense = expense.with_category(category);
    }

    let expense = app_state.expenses.add(expense).await;
    Ok((StatusCode::CREATED, Json(expense)))
}

#[instrument(name = "DELETE /expenses/:id", skip(app_state))]
async fn remove_expense(State(app_state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    app_state.expenses.remove(id).await;
    StatusCode::OK
}
