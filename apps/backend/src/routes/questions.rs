//! Question endpoints

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::import;
use crate::AppState;

/// GET /api/questions
pub async fn list(State(state): State<AppState>) -> Json<Vec<Question>> {
    Json(state.db.get_questions().await)
}

/// GET /api/questions/filter
pub async fn filter(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Question>>> {
    let filter = QuestionFilter::from_pairs(&pairs)?;
    Ok(Json(state.db.get_questions_by_filter(&filter).await))
}

/// GET /api/questions/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Question>> {
    state
        .db
        .get_question(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Question not found".to_string()))
}

/// POST /api/questions
pub async fn create(
    State(state): State<AppState>,
    Json(record): Json<QuestionRecord>,
) -> Result<(StatusCode, Json<Question>)> {
    import::validate_record(&record)?;
    let question = state.db.create_question(record).await;
    tracing::info!(id = question.id, "Created question");
    Ok((StatusCode::CREATED, Json(question)))
}

/// DELETE /api/questions/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    if !state.db.delete_question(id).await {
        return Err(ApiError::NotFound("Question not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Question deleted successfully".to_string(),
    }))
}

/// POST /api/questions/parse
///
/// Extracts questions from an uploaded document without storing them.
pub async fn parse(
    Query(query): Query<ParseUploadQuery>,
    body: Bytes,
) -> Result<Json<ParsedDocument>> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("No file uploaded".to_string()));
    }

    let defaults = query.defaults.resolve()?;
    let filename = query.filename.unwrap_or_else(|| "upload.txt".to_string());
    let document = quizbowl_core::parse_document(&body, &filename, &defaults)?;

    tracing::info!(
        filename = %document.filename,
        file_type = document.file_type.as_str(),
        questions = document.questions.len(),
        "Parsed document"
    );
    Ok(Json(document))
}

/// POST /api/questions/import
pub async fn import_parsed(
    State(state): State<AppState>,
    Json(document): Json<ParsedDocument>,
) -> Result<(StatusCode, Json<ImportResponse>)> {
    let questions = import::import_records(&state.db, document.questions).await?;
    Ok((
        StatusCode::CREATED,
        Json(ImportResponse {
            count: questions.len(),
            questions,
        }),
    ))
}

/// POST /api/questions/import-text
pub async fn import_text(
    State(state): State<AppState>,
    Json(request): Json<ImportTextRequest>,
) -> Result<(StatusCode, Json<ImportResponse>)> {
    let defaults = request.defaults.resolve()?;
    let questions = import::import_text(&state.db, &request.text, &defaults).await?;
    Ok((
        StatusCode::CREATED,
        Json(ImportResponse {
            count: questions.len(),
            questions,
        }),
    ))
}
