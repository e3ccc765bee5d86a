use axum::{routing::post, Json, Router};
use serde::Serialize;
use tracing::instrument;

use crate::{
    domain::{generate_password, PasswordOptions},
    routes::ApiError,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(generate))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResponse {
    password: String,
}

#[instrument(name = "POST /password-generator")]
async fn generate(Json(options): Json<PasswordOptions>) -> Result<Json<PasswordResponse>, ApiError> {
    let password = generate_password(&options)?;
    Ok(Json(PasswordResponse { password }))
}
