use kata_api::{config, router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .init();

    let settings = config::read_config().expect("Failed to read configuration");
    let address = settings.application.address();

    let app = router::create(AppState::new());

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await.expect("Server failed");
}
