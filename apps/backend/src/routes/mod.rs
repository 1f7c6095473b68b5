pub mod answers;
pub mod flashcards;
pub mod questions;
pub mod score;
