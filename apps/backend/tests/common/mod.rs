//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up a server over a fresh in-memory store
//! - Helper functions for creating test data

pub mod fixtures;

use std::sync::Arc;

use axum_test::TestServer;

use quizbowl_backend::config::Config;
use quizbowl_backend::db::Database;
use quizbowl_backend::models::{Question, QuestionRecord};
use quizbowl_backend::AppState;

/// Test context containing the store and a test server.
pub struct TestContext {
    pub db: Arc<Database>,
    pub server: TestServer,
}

impl TestContext {
    /// Create a context with an empty store.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context with a custom config (e.g. a small upload cap).
    pub fn with_config(config: Config) -> Self {
        let db = Arc::new(Database::new());
        let state = AppState { db: db.clone() };
        let server = TestServer::new(quizbowl_backend::router(state, &config))
            .expect("Failed to start test server");

        Self { db, server }
    }

    /// Create a context preloaded with the sample question set.
    pub async fn seeded() -> Self {
        let ctx = Self::new();
        ctx.db.seed().await;
        ctx
    }

    /// Insert a question directly into the store.
    pub async fn create_question(&self, record: QuestionRecord) -> Question {
        self.db.create_question(record).await
    }
}
