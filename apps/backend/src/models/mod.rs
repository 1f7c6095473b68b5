//! Stored entities and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export shared types from quizbowl-core
pub use quizbowl_core::{
    Difficulty, ExtractDefaults, FileType, MatchRule, ParseError, ParsedDocument, Question,
    QuestionRecord, Subject,
};

// === Stored Entity Types ===

/// Question saved for later study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: i64,
    pub question_id: i64,
    pub date_added: DateTime<Utc>,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub times_reviewed: u32,
    pub notes: Option<String>,
}

/// Which questions to serve. A dimension passes when its `all_*` flag is
/// set, its list is empty, or its list contains the question's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFilter {
    pub difficulties: Vec<Difficulty>,
    pub subjects: Vec<Subject>,
    pub years: Vec<String>,
    pub all_difficulties: bool,
    pub all_subjects: bool,
    pub all_years: bool,
}

impl Default for QuestionFilter {
    fn default() -> Self {
        Self {
            difficulties: Vec::new(),
            subjects: Vec::new(),
            years: Vec::new(),
            all_difficulties: true,
            all_subjects: true,
            all_years: true,
        }
    }
}

impl QuestionFilter {
    /// Build from raw query pairs; keys may repeat (`subjects=math&subjects=arts`).
    /// The `all*` flags stay on unless given literally as `false`.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, ParseError> {
        let mut filter = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "difficulties" => filter.difficulties.push(value.parse()?),
                "subjects" => filter.subjects.push(value.parse()?),
                "years" => filter.years.push(value.clone()),
                "allDifficulties" => filter.all_difficulties = value != "false",
                "allSubjects" => filter.all_subjects = value != "false",
                "allYears" => filter.all_years = value != "false",
                _ => {}
            }
        }

        Ok(filter)
    }

    pub fn matches(&self, question: &Question) -> bool {
        let difficulty_match = self.all_difficulties
            || self.difficulties.is_empty()
            || self.difficulties.contains(&question.difficulty);
        let subject_match = self.all_subjects
            || self.subjects.is_empty()
            || self.subjects.contains(&question.subject);
        let year_match =
            self.all_years || self.years.is_empty() || self.years.contains(&question.year);

        difficulty_match && subject_match && year_match
    }
}

// === API Request/Response Types ===

/// POST /api/questions/import-text request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportTextRequest {
    pub text: String,
    #[serde(flatten)]
    pub defaults: DefaultsParams,
}

/// Optional default metadata, sent as strings and validated on use
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultsParams {
    pub default_difficulty: Option<String>,
    pub default_subject: Option<String>,
    pub default_year: Option<String>,
}

impl DefaultsParams {
    /// Resolve into extractor defaults. Blank values fall back to the
    /// built-in defaults; anything else must be a valid value.
    pub fn resolve(&self) -> Result<ExtractDefaults, ParseError> {
        let difficulty = non_blank(&self.default_difficulty)
            .map(str::parse::<Difficulty>)
            .transpose()?;
        let subject = non_blank(&self.default_subject)
            .map(str::parse::<Subject>)
            .transpose()?;
        let year = non_blank(&self.default_year).map(str::to_string);
        if let Some(year) = &year {
            quizbowl_core::validate_year(year)?;
        }

        Ok(ExtractDefaults::resolve(difficulty, subject, year))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// POST /api/questions/parse query
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseUploadQuery {
    pub filename: Option<String>,
    #[serde(flatten)]
    pub defaults: DefaultsParams,
}

/// Response for imports
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub count: usize,
    pub questions: Vec<Question>,
}

/// POST /api/answers/check request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerRequest {
    pub question_id: Option<i64>,
    pub answer: Option<String>,
    pub response: String,
}

/// POST /api/answers/check response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerResponse {
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<MatchRule>,
    pub correct_answer: String,
}

/// Score request and response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreBody {
    pub score: i64,
}

/// POST /api/flashcards request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlashcard {
    pub question_id: i64,
    pub date_added: Option<DateTime<Utc>>,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub times_reviewed: Option<u32>,
    pub notes: Option<String>,
}

/// PATCH /api/flashcards/:id request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlashcard {
    pub last_reviewed: Option<DateTime<Utc>>,
    pub times_reviewed: Option<u32>,
    pub notes: Option<String>,
}

/// Generic confirmation body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
