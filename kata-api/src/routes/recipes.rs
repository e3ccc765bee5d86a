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
    domain::models::Recipe,
    routes::{
        validation::{optional_text, require_text},
        ApiError,
    },
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipes).post(add_recipe))
        .route("/:id", delete(delete_recipe))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    search: Option<String>,
}

#[instrument(name = "GET /recipes", skip(app_state))]
async fn list_recipes(
    State(app_state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Recipe>> {
    let mut recipes = app_state.recipes.all().await;
    if let Some(search) = optional_text(query.search) {
        recipes.retain(|recipe| recipe.matches(&search));
    }
    recipes.sort_by(|a, b| a.title.cmp(&b.title));
    Json(recipes)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddRecipeBody {
    title: String,
    category: Option<String>,
    ingredients: Option<String>,
    instructions: Option<String>,
}

#[instrument(name = "POST /recipes", skip(app_state, body))]
async fn add_recipe(
    State(app_state): State<AppState>,
    Json(body): Json<AddRecipeBody>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let title = require_text("title", &body.title)?;

    let mut recipe = Recipe::new(title);
    if let Some(category) = optional_text(body.category) {
        recipe = recipe.with_category(category);
    }
    if let Some(ingredients) = optional_text(body.ingredients) {
        recipe = recipe.with_ingredients(ingredients);
    }
    if let Some(instructions) = optional_text(body.instructions) {
        recipe = recipe.with_instructions(instructions);
    }

    let recipe = app_state.recipes.add(recipe).await;
    Ok((StatusCode::CREATED, Json(recipe)))
}

#[instrument(name = "DELETE /recipes/:id", skip(app_state))]
async fn delete_recipe(State(app_state): State<AppState>, Path(id): Path<Uuid>) -> StatusCode {
    app_state.recipes.remove(id).await;
    StatusCode::OK
}
