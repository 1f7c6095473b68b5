//! Line-oriented question extractor for pasted or uploaded question sets.
//!
//! # Format
//! ```text
//! 1. This mathematician was born in Erode, India.
//! He later worked with G.H. Hardy at Cambridge.
//! Subject: math
//! Level: state
//! Year: 2023
//! Answer: Srinivasa Ramanujan
//!
//! Q: This force is described by general relativity.
//! A: Gravity
//! ```
//!
//! Question markers are `Q:`, `Question:`, `1.`, `1)`, `(1)` and `#1`.
//! Answer markers are `A:`, `Answer:` and `Ans:`. Directives set metadata
//! for the open question: `Difficulty|Level|Tier`, `Subject|Category|Topic`
//! and `Year|Date`. All keywords are case-insensitive.
//!
//! Extraction never fails. Lines that match nothing become question text.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Difficulty, ExtractDefaults, QuestionRecord, Subject, NO_ANSWER_PLACEHOLDER};

static QUESTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Q:|Question:|[0-9]+[.)]|\([0-9]+\)|#[0-9]+\s*)(.*)$")
        .expect("question marker pattern is valid")
});

static ANSWER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:A:|Answer:|ANSWER:|ANS:|Ans:)(.*)$")
        .expect("answer marker pattern is valid")
});

static DIFFICULTY_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Difficulty|Level|Tier):\s*(district|regional|state)")
        .expect("difficulty directive pattern is valid")
});

static SUBJECT_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Subject|Category|Topic):\s*(math|science|arts|social|language)")
        .expect("subject directive pattern is valid")
});

static YEAR_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Year|Date):\s*([0-9]{4})").expect("year directive pattern is valid")
});

/// Extract questions from loosely structured text.
///
/// Records come back in the order their questions appear. Input with no
/// recognizable content yields an empty vector.
pub fn extract(text: &str, defaults: &ExtractDefaults) -> Vec<QuestionRecord> {
    let mut extractor = Extractor::new(defaults);
    // `str::trim` keeps a byte-order mark, which would hide the first marker.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for line in text
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
    {
        extractor.process_line(line);
    }

    extractor.finish()
}

struct QuestionBuilder {
    text: String,
    answer: String,
    difficulty: Difficulty,
    subject: Subject,
    year: String,
}

impl QuestionBuilder {
    fn new(text: &str, defaults: &ExtractDefaults) -> Self {
        Self {
            text: text.to_string(),
            answer: String::new(),
            difficulty: defaults.difficulty,
            subject: defaults.subject,
            year: defaults.year.clone(),
        }
    }

    fn is_answered(&self) -> bool {
        !self.answer.is_empty()
    }

    fn append_text(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(line);
    }

    /// Returns `None` for a question that never received any text.
    fn build(self) -> Option<QuestionRecord> {
        if self.text.is_empty() {
            return None;
        }

        let answer = if self.answer.is_empty() {
            NO_ANSWER_PLACEHOLDER.to_string()
        } else {
            self.answer
        };

        Some(QuestionRecord {
            text: self.text,
            answer,
            difficulty: self.difficulty,
            subject: self.subject,
            year: self.year,
        })
    }
}

struct Extractor<'a> {
    defaults: &'a ExtractDefaults,
    current: Option<QuestionBuilder>,
    questions: Vec<QuestionRecord>,
}

impl<'a> Extractor<'a> {
    fn new(defaults: &'a ExtractDefaults) -> Self {
        Self {
            defaults,
            current: None,
            questions: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str) {
        let kind = Self::parse_line(line);

        if let LineType::QuestionStart(rest) = kind {
            self.close_current();
            self.current = Some(QuestionBuilder::new(rest, self.defaults));
            return;
        }

        match self.current.as_mut() {
            // Anything before the first marker opens a question of its own.
            None => self.current = Some(QuestionBuilder::new(line, self.defaults)),
            Some(question) => match kind {
                LineType::QuestionStart(_) => {}
                LineType::Answer(answer) => question.answer = answer.to_string(),
                LineType::Difficulty(difficulty) => question.difficulty = difficulty,
                LineType::Subject(subject) => question.subject = subject,
                LineType::Year(year) => question.year = year.to_string(),
                // Answered questions take no more text.
                LineType::Text(text) if !question.is_answered() => question.append_text(text),
                LineType::Text(_) => {}
            },
        }
    }

    /// Classify a trimmed, non-empty line. Categories are tried in a fixed
    /// order and the first match wins.
    fn parse_line(line: &str) -> LineType<'_> {
        if let Some(caps) = QUESTION_MARKER.captures(line) {
            return LineType::QuestionStart(capture(&caps));
        }
        if let Some(caps) = ANSWER_MARKER.captures(line) {
            return LineType::Answer(capture(&caps));
        }
        if let Some(difficulty) = DIFFICULTY_DIRECTIVE
            .captures(line)
            .and_then(|caps| capture(&caps).parse::<Difficulty>().ok())
        {
            return LineType::Difficulty(difficulty);
        }
        if let Some(subject) = SUBJECT_DIRECTIVE
            .captures(line)
            .and_then(|caps| capture(&caps).parse::<Subject>().ok())
        {
            return LineType::Subject(subject);
        }
        if let Some(caps) = YEAR_DIRECTIVE.captures(line) {
            return LineType::Year(capture(&caps));
        }
        LineType::Text(line)
    }

    fn close_current(&mut self) {
        if let Some(record) = self.current.take().and_then(QuestionBuilder::build) {
            self.questions.push(record);
        }
    }

    fn finish(mut self) -> Vec<QuestionRecord> {
        self.close_current();
        self.questions
    }
}

fn capture<'h>(caps: &regex::Captures<'h>) -> &'h str {
    caps.get(1).map_or("", |m| m.as_str().trim())
}

#[derive(Clone, Copy)]
enum LineType<'a> {
    QuestionStart(&'a str),
    Answer(&'a str),
    Difficulty(Difficulty),
    Subject(Subject),
    Year(&'a str),
    Text(&'a str),
}
