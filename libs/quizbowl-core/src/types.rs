//! Core types for the quiz-bowl practice tool.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Answer stored on a question that closed before any answer line was seen.
pub const NO_ANSWER_PLACEHOLDER: &str = "[No answer provided]";

/// Competition level a question was written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    District,
    Regional,
    State,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::District
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::District, Self::Regional, Self::State];

    /// Get the difficulty name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::District => "district",
            Self::Regional => "regional",
            Self::State => "state",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "district" => Ok(Self::District),
            "regional" => Ok(Self::Regional),
            "state" => Ok(Self::State),
            _ => Err(ParseError::InvalidDifficulty {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject area of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Science,
    Arts,
    Social,
    Language,
}

impl Default for Subject {
    fn default() -> Self {
        Self::Math
    }
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Self::Math,
        Self::Science,
        Self::Arts,
        Self::Social,
        Self::Language,
    ];

    /// Get the subject name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Science => "science",
            Self::Arts => "arts",
            Self::Social => "social",
            Self::Language => "language",
        }
    }
}

impl FromStr for Subject {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "math" => Ok(Self::Math),
            "science" => Ok(Self::Science),
            "arts" => Ok(Self::Arts),
            "social" => Ok(Self::Social),
            "language" => Ok(Self::Language),
            _ => Err(ParseError::InvalidSubject {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that a year is exactly four ASCII digits.
pub fn validate_year(year: &str) -> crate::Result<()> {
    if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ParseError::InvalidYear {
            value: year.to_string(),
        })
    }
}

/// Current calendar year in local time, as a four-digit string.
pub fn current_year() -> String {
    Local::now().year().to_string()
}

/// Question extracted from text, not yet assigned a storage ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub text: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub subject: Subject,
    pub year: String,
}

/// Stored question with its assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub subject: Subject,
    pub year: String,
}

impl Question {
    /// Attach an ID to an extracted record.
    pub fn from_record(id: i64, record: QuestionRecord) -> Self {
        Self {
            id,
            text: record.text,
            answer: record.answer,
            difficulty: record.difficulty,
            subject: record.subject,
            year: record.year,
        }
    }
}

/// Metadata applied to every extracted question until a directive overrides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractDefaults {
    pub difficulty: Difficulty,
    pub subject: Subject,
    pub year: String,
}

impl Default for ExtractDefaults {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            subject: Subject::default(),
            year: current_year(),
        }
    }
}

impl ExtractDefaults {
    /// Fill unset values with district / math / the current year.
    pub fn resolve(
        difficulty: Option<Difficulty>,
        subject: Option<Subject>,
        year: Option<String>,
    ) -> Self {
        Self {
            difficulty: difficulty.unwrap_or_default(),
            subject: subject.unwrap_or_default(),
            year: year
                .filter(|y| !y.trim().is_empty())
                .unwrap_or_else(current_year),
        }
    }
}
