//! Flashcard endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/flashcards
pub async fn list(State(state): State<AppState>) -> Json<Vec<Flashcard>> {
    Json(state.db.get_flashcards().await)
}

/// GET /api/flashcards/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Flashcard>> {
    state
        .db
        .get_flashcard(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Flashcard not found".to_string()))
}

/// POST /api/flashcards
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<NewFlashcard>,
) -> Result<(StatusCode, Json<Flashcard>)> {
    let flashcard = state.db.create_flashcard(request).await?;
    Ok((StatusCode::CREATED, Json(flashcard)))
}

/// PATCH /api/flashcards/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateFlashcard>,
) -> Result<Json<Flashcard>> {
    let flashcard = state.db.update_flashcard(id, request).await?;
    Ok(Json(flashcard))
}

/// DELETE /api/flashcards/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    if !state.db.delete_flashcard(id).await {
        return Err(ApiError::NotFound("Flashcard not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Flashcard deleted successfully".to_string(),
    }))
}
