//! Question import: validation, extraction and persistence

use quizbowl_core::{extract, validate_year};

use crate::db::Database;
use crate::error::{ApiError, Result};
use crate::models::*;

/// Check a record supplied by a client before it is stored.
pub fn validate_record(record: &QuestionRecord) -> Result<()> {
    if record.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Question text is required".to_string()));
    }
    if record.answer.trim().is_empty() {
        return Err(ApiError::BadRequest("Answer is required".to_string()));
    }
    validate_year(&record.year)?;
    Ok(())
}

/// Store a batch of records. Nothing is stored if any record is invalid.
pub async fn import_records(db: &Database, records: Vec<QuestionRecord>) -> Result<Vec<Question>> {
    for (index, record) in records.iter().enumerate() {
        validate_record(record).map_err(|e| match e {
            ApiError::BadRequest(message) => {
                ApiError::BadRequest(format!("question {}: {}", index + 1, message))
            }
            other => other,
        })?;
    }

    let questions = db.create_questions(records).await;
    tracing::info!(count = questions.len(), "Imported questions");
    Ok(questions)
}

/// Extract questions from pasted text and store them.
pub async fn import_text(
    db: &Database,
    text: &str,
    defaults: &ExtractDefaults,
) -> Result<Vec<Question>> {
    if text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text content is required".to_string()));
    }

    let records = extract(text, defaults);
    tracing::debug!(
        lines = text.lines().count(),
        extracted = records.len(),
        "Extracted questions from text"
    );

    // Extracted records always carry text and an answer.
    let questions = db.create_questions(records).await;
    tracing::info!(count = questions.len(), "Imported questions from text");
    Ok(questions)
}
