use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    domain::{MemoryGameState, PickOutcome},
    routes::ApiError,
    AppState,
};

const MEMORY_GAME_KEY: &str = "memory-game";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_game))
        .route("/pick", post(pick))
        .route("/reset", post(reset))
}

/// Card view with the value masked while the card is face down.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CardView {
    position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    revealed: bool,
    matched: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GameView {
    cards: Vec<CardView>,
    moves: u32,
    messages: Vec<String>,
    complete: bool,
}

impl GameView {
    fn from_state(state: &MemoryGameState) -> Self {
        let cards = state
            .cards
            .iter()
            .map(|card| CardView {
                position: card.position,
                value: (card.revealed || card.matched).then(|| card.value.clone()),
                revealed: card.revealed,
                matched: card.matched,
            })
            .collect();

        Self {
            cards,
            moves: state.moves,
            messages: state.messages.clone(),
            complete: state.is_complete(),
        }
    }
}

/// Load the session's game, dealing a fresh board on first access.
async fn load_game(session: &Session) -> Result<MemoryGameState, ApiError> {
    if let Some(state) = session.get::<MemoryGameState>(MEMORY_GAME_KEY).await? {
        return Ok(state);
    }

    let state = MemoryGameState::deal();
    session.insert(MEMORY_GAME_KEY, &state).await?;
    Ok(state)
}

#[instrument(name = "GET /memory-game", skip(session))]
async fn get_game(session: Session) -> Result<Json<GameView>, ApiError> {
    let state = load_game(&session).await?;
    Ok(Json(GameView::from_state(&state)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PickBody {
    first_position: usize,
    second_position: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "outcome")]
enum PickView {
    InvalidPick,
    Matched {
        value: String,
    },
    /// Both drawn values are disclosed here; in the stored state the cards
    /// are already face down again.
    NoMatch {
        first_value: String,
        second_value: String,
    },
}

impl From<PickOutcome> for PickView {
    fn from(outcome: PickOutcome) -> Self {
        match outcome {
            PickOutcome::InvalidPick => PickView::InvalidPick,
            PickOutcome::Matched { value } => PickView::Matched { value },
            PickOutcome::NoMatch {
                first_value,
                second_value,
            } => PickView::NoMatch {
                first_value,
                second_value,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PickResponse {
    #[serde(flatten)]
    result: PickView,
    game: GameView,
}

#[instrument(name = "POST /memory-game/pick", skip(session))]
async fn pick(session: Session, Json(body): Json<PickBody>) -> Result<Json<PickResponse>, ApiError> {
    let mut state = load_game(&session).await?;

    let outcome = state.pick(body.first_position, body.second_position);
    session.insert(MEMORY_GAME_KEY, &state).await?;

    Ok(Json(PickResponse {
        result: outcome.into(),
        game: GameView::from_state(&state),
    }))
}

#[instrument(name = "POST /memory-game/reset", skip(session))]
async fn reset(session: Session) -> Result<StatusCode, ApiError> {
    session.remove::<MemoryGameState>(MEMORY_GAME_KEY).await?;
    Ok(StatusCode::OK)
}
