use axum::{routing::post, Json, Router};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    domain::{split_bill, TipBreakdown},
    routes::ApiError,
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(compute_tip))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TipRequest {
    amount: f64,
    #[serde(default = "default_tip_percent")]
    tip_percent: u32,
    #[serde(default = "default_people")]
    people: u32,
}

fn default_tip_percent() -> u32 {
    10
}

fn default_people() -> u32 {
    1
}

#[instrument(name = "POST /tip-calculator")]
async fn compute_tip(Json(body): Json<TipRequest>) -> Result<Json<TipBreakdown>, ApiError> {
    let breakdown = split_bill(body.amount, body.tip_percent, body.people)?;
    Ok(Json(breakdown))
}
