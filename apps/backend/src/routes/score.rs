//! Score endpoints

use axum::{extract::State, Json};

use crate::models::ScoreBody;
use crate::AppState;

/// GET /api/score
pub async fn get(State(state): State<AppState>) -> Json<ScoreBody> {
    Json(ScoreBody {
        score: state.db.get_score().await,
    })
}

/// POST /api/score
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<ScoreBody>,
) -> Json<ScoreBody> {
    Json(ScoreBody {
        score: state.db.update_score(request.score).await,
    })
}
