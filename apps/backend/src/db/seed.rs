//! Sample questions loaded at startup

use crate::models::{Difficulty, QuestionRecord, Subject};

fn q(
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

/// One or two questions per subject across all levels.
pub fn sample_questions() -> Vec<QuestionRecord> {
    vec![
        q(
            "This mathematician, born in 1887 in Erode, India, had almost no formal training \
             but made substantial contributions to mathematical analysis, number theory, \
             infinite series, and continued fractions. He collaborated with G.H. Hardy at \
             Cambridge University. Who is this mathematician?",
            "Srinivasa Ramanujan",
            Difficulty::State,
            Subject::Math,
            "2023",
        ),
        q(
            "This value is defined as the ratio of a circle's circumference to its diameter. \
             What is this mathematical constant?",
            "Pi (π)",
            Difficulty::District,
            Subject::Math,
            "2022",
        ),
        q(
            "This fundamental force is responsible for the attraction between masses and is \
             described by Einstein's theory of general relativity. What is this force?",
            "Gravity",
            Difficulty::Regional,
            Subject::Science,
            "2022",
        ),
        q(
            "This scientist formulated the three laws of motion that laid the foundation for \
             classical mechanics. Who is this scientist?",
            "Sir Isaac Newton",
            Difficulty::Regional,
            Subject::Science,
            "2021",
        ),
        q(
            "This painting by Leonardo da Vinci is one of the most famous works in the world \
             and is housed in the Louvre Museum in Paris. What is the name of this painting?",
            "Mona Lisa",
            Difficulty::District,
            Subject::Arts,
            "2023",
        ),
        q(
            "This document, written in 1776, announced that the thirteen American colonies \
             regarded themselves as independent sovereign states. What is this document?",
            "The Declaration of Independence",
            Difficulty::District,
            Subject::Social,
            "2020",
        ),
        q(
            "This author wrote 'Romeo and Juliet', 'Hamlet', and 'Macbeth'. Who is this \
             playwright?",
            "William Shakespeare",
            Difficulty::District,
            Subject::Language,
            "2019",
        ),
    ]
}
