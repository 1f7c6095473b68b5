pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

/// Build the API router.
pub fn router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Question routes
        .route(
            "/api/questions",
            get(routes::questions::list).post(routes::questions::create),
        )
        .route("/api/questions/filter", get(routes::questions::filter))
        .route(
            "/api/questions/parse",
            post(routes::questions::parse)
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .route("/api/questions/import", post(routes::questions::import_parsed))
        .route("/api/questions/import-text", post(routes::questions::import_text))
        .route(
            "/api/questions/{id}",
            get(routes::questions::get).delete(routes::questions::delete),
        )
        // Answer routes
        .route("/api/answers/check", post(routes::answers::check))
        // Score routes
        .route(
            "/api/score",
            get(routes::score::get).post(routes::score::update),
        )
        // Flashcard routes
        .route(
            "/api/flashcards",
            get(routes::flashcards::list).post(routes::flashcards::create),
        )
        .route(
            "/api/flashcards/{id}",
            get(routes::flashcards::get)
                .patch(routes::flashcards::update)
                .delete(routes::flashcards::delete),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = Database::new();
    if config.seed_questions {
        let count = db.seed().await;
        tracing::info!(count, "Seeded sample questions");
    }

    let state = AppState { db: Arc::new(db) };
    let app = router(state, &config);

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
