//! In-memory question, flashcard and score storage

mod seed;

use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{ApiError, Result};
use crate::models::*;

pub use seed::sample_questions;

#[derive(Debug)]
struct Store {
    questions: BTreeMap<i64, Question>,
    flashcards: BTreeMap<i64, Flashcard>,
    next_question_id: i64,
    next_flashcard_id: i64,
    score: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            questions: BTreeMap::new(),
            flashcards: BTreeMap::new(),
            next_question_id: 1,
            next_flashcard_id: 1,
            score: 0,
        }
    }
}

impl Store {
    fn insert_question(&mut self, record: QuestionRecord) -> Question {
        let id = self.next_question_id;
        self.next_question_id += 1;

        let question = Question::from_record(id, record);
        self.questions.insert(id, question.clone());
        question
    }
}

/// Storage shared across request handlers. IDs are assigned per instance,
/// starting at 1.
#[derive(Debug, Default)]
pub struct Database {
    store: RwLock<Store>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the sample question set
    pub async fn seed(&self) -> usize {
        self.create_questions(sample_questions()).await.len()
    }

    // === Question Repository ===

    pub async fn get_questions(&self) -> Vec<Question> {
        self.store.read().await.questions.values().cloned().collect()
    }

    pub async fn get_questions_by_filter(&self, filter: &QuestionFilter) -> Vec<Question> {
        self.store
            .read()
            .await
            .questions
            .values()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect()
    }

    pub async fn get_question(&self, id: i64) -> Option<Question> {
        self.store.read().await.questions.get(&id).cloned()
    }

    pub async fn create_question(&self, record: QuestionRecord) -> Question {
        self.store.write().await.insert_question(record)
    }

    /// Insert a batch under one lock so imported IDs are contiguous.
    pub async fn create_questions(&self, records: Vec<QuestionRecord>) -> Vec<Question> {
        let mut store = self.store.write().await;
        records
            .into_iter()
            .map(|record| store.insert_question(record))
            .collect()
    }

    pub async fn delete_question(&self, id: i64) -> bool {
        self.store.write().await.questions.remove(&id).is_some()
    }

    // === Score Repository ===

    pub async fn get_score(&self) -> i64 {
        self.store.read().await.score
    }

    pub async fn update_score(&self, score: i64) -> i64 {
        let mut store = self.store.write().await;
        store.score = score;
        store.score
    }

    // === Flashcard Repository ===

    pub async fn get_flashcards(&self) -> Vec<Flashcard> {
        self.store.read().await.flashcards.values().cloned().collect()
    }

    pub async fn get_flashcard(&self, id: i64) -> Option<Flashcard> {
        self.store.read().await.flashcards.get(&id).cloned()
    }

    /// Create a flashcard for an existing question
    pub async fn create_flashcard(&self, new: NewFlashcard) -> Result<Flashcard> {
        let mut store = self.store.write().await;

        if !store.questions.contains_key(&new.question_id) {
            return Err(ApiError::NotFound(format!(
                "Question {} not found",
                new.question_id
            )));
        }

        let id = store.next_flashcard_id;
        store.next_flashcard_id += 1;

        let flashcard = Flashcard {
            id,
            question_id: new.question_id,
            date_added: new.date_added.unwrap_or_else(Utc::now),
            last_reviewed: new.last_reviewed,
            times_reviewed: new.times_reviewed.unwrap_or(0),
            notes: new.notes,
        };
        store.flashcards.insert(id, flashcard.clone());

        Ok(flashcard)
    }

    /// Apply a partial update; unset fields keep their values
    pub async fn update_flashcard(&self, id: i64, update: UpdateFlashcard) -> Result<Flashcard> {
        let mut store = self.store.write().await;

        let flashcard = store
            .flashcards
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("Flashcard with id {} not found", id)))?;

        if let Some(last_reviewed) = update.last_reviewed {
            flashcard.last_reviewed = Some(last_reviewed);
        }
        if let Some(times_reviewed) = update.times_reviewed {
            flashcard.times_reviewed = times_reviewed;
        }
        if let Some(notes) = update.notes {
            flashcard.notes = Some(notes);
        }

        Ok(flashcard.clone())
    }

    pub async fn delete_flashcard(&self, id: i64) -> bool {
        self.store.write().await.flashcards.remove(&id).is_some()
    }
}
