use sea_orm::Database;
use tracing::info;

use storefront_api::config::ApiConfig;
use storefront_api::router::build_router;
use storefront_api::state::AppState;
use storefront_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        session_ttl_secs: config.session_ttl_secs,
        cookie_secure: config.cookie_secure,
    };

    let router = build_router(state, &config.allowed_origins, config.static_dir.as_deref());
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
