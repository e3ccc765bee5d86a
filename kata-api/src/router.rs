use axum::{http::Method, routing::get, Router};
use time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

use crate::{app_state::AppState, routes};

pub fn create(app_state: AppState) -> Router<()> {
    // Sessions live in memory only; losing them on restart is accepted.
    let session_store = MokaStore::new(Some(2_000));
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::hours(2)));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/", get(|| async { "Hello, little exercises!" }))
        .nest("/tasks", routes::tasks::router())
        .nest("/tip-calculator", routes::tip_calculator::router())
        .nest("/password-generator", routes::password_generator::router())
        .nest("/expenses", routes::expenses::router())
        .nest("/bookings", routes::bookings::router())
        .nest("/notes", routes::notes::router())
        .nest("/events", routes::events::router())
        .nest("/recipes", routes::recipes::router())
        .nest("/memory-game", routes::memory_game::router())
        .nest("/survey", routes::survey::router())
        .nest("/stopwatch", routes::stopwatch::router())
        .with_state(app_state)
        .layer(session_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app() -> Router<()> {
        create(AppState::new())
    }

    async fn get_json(app: &Router<()>, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_json(response).await
    }

    async fn post_json(app: &Router<()>, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read_json(response).await
    }

    async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn added_tasks_show_up_in_the_list() {
        let app = app();

        let (status, task) = post_json(
            &app,
            "/tasks",
            json!({"title": "Write the report", "category": "Work"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(task["id"].is_string());
        assert_eq!(task["done"], json!(false));

        let (status, tasks) = get_json(&app, "/tasks").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(tasks.as_array().unwrap().len(), 1);
        assert_eq!(tasks[0]["title"], json!("Write the report"));
    }

    #[tokio::test]
    async fn blank_task_title_is_rejected_with_a_field_message() {
        let app = app();

        let (status, body) = post_json(&app, "/tasks", json!({"title": "   "})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], json!("title"));

        let (_, tasks) = get_json(&app, "/tasks").await;
        assert!(tasks.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_an_unknown_expense_is_a_noop() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/expenses/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn expenses_list_newest_date_first() {
        let app = app();
        for (description, date) in [("old", "2024-01-01"), ("new", "2024-06-15")] {
            let (status, _) = post_json(
                &app,
                "/expenses",
                json!({"description": description, "amount": 9.5, "date": date}),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, expenses) = get_json(&app, "/expenses").await;
        assert_eq!(expenses[0]["description"], json!("new"));
        assert_eq!(expenses[1]["description"], json!("old"));
        assert_eq!(expenses[0]["category"], json!("General"));
    }

    #[tokio::test]
    async fn notes_search_filters_and_sorts_by_title() {
        let app = app();
        for (title, content) in [
            ("Zebra", "stripes"),
            ("Apple", "fruit and stripes"),
            ("Mango", "fruit"),
        ] {
            post_json(&app, "/notes", json!({"title": title, "content": content})).await;
        }

        let (_, notes) = get_json(&app, "/notes?search=stripes").await;
        let titles: Vec<&str> = notes
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Apple", "Zebra"]);
    }

    #[tokio::test]
    async fn tip_calculator_splits_the_documented_example() {
        let app = app();

        let (status, body) = post_json(
            &app,
            "/tip-calculator",
            json!({"amount": 100.0, "tipPercent": 10, "people": 2}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalTip"], json!(10.0));
        assert_eq!(body["totalWithTip"], json!(110.0));
        assert_eq!(body["perPerson"], json!(55.0));
    }

    #[tokio::test]
    async fn password_generator_honors_the_requested_length() {
        let app = app();

        let (status, body) = post_json(
            &app,
            "/password-generator",
            json!({"length": 20, "includeUppercase": false, "includeNumbers": false, "includeSymbols": false}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let password = body["password"].as_str().unwrap();
        assert_eq!(password.chars().count(), 20);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[tokio::test]
    async fn first_memory_game_access_deals_a_masked_board() {
        let app = app();

        let (status, game) = get_json(&app, "/memory-game").await;

        assert_eq!(status, StatusCode::OK);
        let cards = game["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 8);
        assert!(cards.iter().all(|card| card["value"].is_null()));
        assert_eq!(game["moves"], json!(0));
        assert_eq!(game["complete"], json!(false));
    }

    #[tokio::test]
    async fn invalid_memory_pick_is_reported_without_counting_a_move() {
        let app = app();

        let (status, body) = post_json(
            &app,
            "/memory-game/pick",
            json!({"firstPosition": 3, "secondPosition": 3}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], json!("invalidPick"));
        assert_eq!(body["game"]["moves"], json!(0));
        assert_eq!(body["game"]["messages"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn fresh_stopwatch_reports_zero_and_stopped() {
        let app = app();

        let (status, view) = get_json(&app, "/stopwatch").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["running"], json!(false));
        assert_eq!(view["elapsedSeconds"], json!(0.0));
        assert_eq!(view["clock"], json!("0:00:00"));
        assert!(view["laps"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_stopwatch_action_is_rejected() {
        let app = app();

        let (status, body) = post_json(&app, "/stopwatch", json!({"action": "rewind"})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], json!("action"));
    }

    #[tokio::test]
    async fn survey_vote_with_unknown_id_changes_no_counter() {
        let app = app();

        let (status, survey) = post_json(
            &app,
            "/survey/vote",
            json!({"optionId": Uuid::new_v4()}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(survey["options"]
            .as_array()
            .unwrap()
            .iter()
            .all(|option| option["votes"] == json!(0)));
    }

    #[tokio::test]
    async fn survey_vote_counts_for_the_picked_option() {
        let app = app();

        let (_, survey) = get_json(&app, "/survey").await;
        let option_id = survey["options"][0]["id"].as_str().unwrap().to_string();

        let (_, after) = post_json(&app, "/survey/vote", json!({"optionId": option_id})).await;

        assert_eq!(after["options"][0]["votes"], json!(1));
        assert!(after["options"]
            .as_array()
            .unwrap()
            .iter()
            .skip(1)
            .all(|option| option["votes"] == json!(0)));
    }
}
