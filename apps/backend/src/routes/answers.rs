//! Answer checking endpoint

use axum::{extract::State, Json};
use quizbowl_core::match_answer;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/answers/check
///
/// Judges a response against a stored question's answer, or against an
/// answer supplied inline.
pub async fn check(
    State(state): State<AppState>,
    Json(request): Json<CheckAnswerRequest>,
) -> Result<Json<CheckAnswerResponse>> {
    let correct_answer = match (request.question_id, request.answer) {
        (Some(id), _) => {
            state
                .db
                .get_question(id)
                .await
                .ok_or_else(|| ApiError::NotFound("Question not found".to_string()))?
                .answer
        }
        (None, Some(answer)) => answer,
        (None, None) => {
            return Err(ApiError::BadRequest(
                "Either questionId or answer is required".to_string(),
            ))
        }
    };

    let outcome = match_answer(&request.response, &correct_answer);
    tracing::debug!(correct = outcome.is_match, rule = ?outcome.rule, "Checked answer");

    Ok(Json(CheckAnswerResponse {
        correct: outcome.is_match,
        rule: outcome.rule,
        correct_answer,
    }))
}
