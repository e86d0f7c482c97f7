//! Flashcard is a pair <question, answer>. Both sides are plain text, stored as given.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashCard {
    question: String,
    answer: String,
}

impl FlashCard {
    /// No trimming or validation; empty strings are fine.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Renders `FlashCard(question='..', answer='..')`. Quotes inside the fields are not escaped.
impl fmt::Display for FlashCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FlashCard(question='{}', answer='{}')",
            self.question, self.answer
        )
    }
}
