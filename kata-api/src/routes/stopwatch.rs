use std::str::FromStr;

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    domain::{
        stopwatch::{hms, StopwatchAction},
        StopwatchState,
    },
    routes::ApiError,
    AppState,
};

const STOPWATCH_KEY: &str = "stopwatch-state";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_stopwatch).post(apply_action))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LapView {
    number: usize,
    seconds: f64,
    clock: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StopwatchView {
    running: bool,
    elapsed_seconds: f64,
    clock: String,
    laps: Vec<LapView>,
}

impl StopwatchView {
    fn from_state(state: &StopwatchState, now: OffsetDateTime) -> Self {
        let total = state.total_elapsed(now);
        let laps = state
            .laps
            .iter()
            .enumerate()
            .map(|(index, lap)| LapView {
                number: index + 1,
                seconds: lap.as_seconds_f64(),
                clock: format_clock(hms(*lap)),
            })
            .collect();

        Self {
            running: state.running(),
            elapsed_seconds: total.as_seconds_f64(),
            clock: format_clock(hms(total)),
            laps,
        }
    }
}

fn format_clock((hours, minutes, seconds): (i64, i64, i64)) -> String {
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

async fn load_stopwatch(session: &Session) -> Result<StopwatchState, ApiError> {
    Ok(session
        .get::<StopwatchState>(STOPWATCH_KEY)
        .await?
        .unwrap_or_default())
}

#[instrument(name = "GET /stopwatch", skip(session))]
async fn get_stopwatch(session: Session) -> Result<Json<StopwatchView>, ApiError> {
    let state = load_stopwatch(&session).await?;
    Ok(Json(StopwatchView::from_state(
        &state,
        OffsetDateTime::now_utc(),
    )))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionBody {
    action: String,
}

#[instrument(name = "POST /stopwatch", skip(session))]
async fn apply_action(
    session: Session,
    Json(body): Json<ActionBody>,
) -> Result<Json<StopwatchView>, ApiError> {
    let action = StopwatchAction::from_str(&body.action).map_err(|_| {
        ApiError::validation("action", "action must be one of start, pause, lap, reset")
    })?;

    let mut state = load_stopwatch(&session).await?;
    let now = OffsetDateTime::now_utc();
    state.apply(action, now);
    session.insert(STOPWATCH_KEY, &state).await?;

    Ok(Json(StopwatchView::from_state(&state, now)))
}
