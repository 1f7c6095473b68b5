//! Core quiz-bowl library shared by the backend and any other front end.
//!
//! Provides:
//! - Question extractor for loosely structured question sets
//! - Lenient answer matching for typed responses
//! - Upload classification and text decoding for txt, docx and pdf files
//! - Shared types (Question, QuestionRecord, Subject, Difficulty, etc.)

pub mod document;
pub mod error;
pub mod matching;
pub mod parser;
pub mod types;

pub use document::{parse_document, FileType, ParsedDocument};
pub use error::{ParseError, Result};
pub use matching::{is_match, match_answer, word_overlap, MatchOutcome, MatchRule};
pub use parser::extract;
pub use types::{
    current_year, validate_year, Difficulty, ExtractDefaults, Question, QuestionRecord, Subject,
    NO_ANSWER_PLACEHOLDER,
};
