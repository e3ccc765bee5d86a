use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::{domain::models::SurveyOption, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_survey))
        .route("/vote", post(vote))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SurveyView {
    question: String,
    options: Vec<SurveyOption>,
}

async fn survey_view(app_state: &AppState) -> SurveyView {
    SurveyView {
        question: app_state.survey.question().to_string(),
        options: app_state.survey.options().await,
    }
}

#[instrument(name = "GET /survey", skip(app_state))]
async fn get_survey(State(app_state): State<AppState>) -> Json<SurveyView> {
    Json(survey_view(&app_state).await)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VoteBody {
    option_id: Uuid,
}

#[instrument(name = "POST /survey/vote", skip(app_state))]
async fn vote(State(app_state): State<AppState>, Json(body): Json<VoteBody>) -> Json<SurveyView> {
    // An unknown option id is deliberately a silent no-op.
    app_state.survey.vote(body.option_id).await;
    Json(survey_view(&app_state).await)
}
