//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use quizbowl_backend::models::{Difficulty, QuestionRecord, Subject};

/// Generate a numbered question set with a specified number of questions.
///
/// # Arguments
/// * `num_questions` - Number of questions to generate
/// * `with_answers` - Whether to include answer lines
pub fn sample_question_text(num_questions: usize, with_answers: bool) -> String {
    (0..num_questions)
        .map(|i| {
            if with_answers {
                format!("{}. Question {}?\nAnswer: Answer {}\n", i + 1, i + 1, i + 1)
            } else {
                format!("{}. Question {}?\n", i + 1, i + 1)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build a question record.
pub fn question_record(
    text: &str,
    answer: &str,
    difficulty: Difficulty,
    subject: Subject,
    year: &str,
) -> QuestionRecord {
    QuestionRecord {
        text: text.to_string(),
        answer: answer.to_string(),
        difficulty,
        subject,
        year: year.to_string(),
    }
}

/// Create a question request body.
pub fn create_question_request(text: &str, answer: &str, subject: &str) -> serde_json::Value {
    json!({
        "text": text,
        "answer": answer,
        "difficulty": "district",
        "subject": subject,
        "year": "2024"
    })
}

/// Create an import-text request body.
pub fn import_text_request(
    text: &str,
    default_difficulty: Option<&str>,
    default_subject: Option<&str>,
    default_year: Option<&str>,
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("text".to_string(), json!(text));
    if let Some(d) = default_difficulty {
        obj.insert("defaultDifficulty".to_string(), json!(d));
    }
    if let Some(s) = default_subject {
        obj.insert("defaultSubject".to_string(), json!(s));
    }
    if let Some(y) = default_year {
        obj.insert("defaultYear".to_string(), json!(y));
    }
    serde_json::Value::Object(obj)
}

/// Create an answer check request body against a stored question.
pub fn check_stored_answer_request(question_id: i64, response: &str) -> serde_json::Value {
    json!({ "questionId": question_id, "response": response })
}

/// Create an answer check request body against an inline answer.
pub fn check_inline_answer_request(answer: &str, response: &str) -> serde_json::Value {
    json!({ "answer": answer, "response": response })
}

/// Create a flashcard request body.
pub fn create_flashcard_request(question_id: i64, notes: Option<&str>) -> serde_json::Value {
    json!({ "questionId": question_id, "notes": notes })
}
