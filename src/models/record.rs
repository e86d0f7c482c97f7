//! Raw input record, before it becomes a FlashCard.
//!
//! Both keys are optional here so that a record read from JSON can be missing one;
//! the check happens in `into_flashcard`.
use super::FlashCard;
use crate::error::{FlashCardError, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Record {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
        }
    }

    /// `index` is the record's position in its source, used for error reporting.
    pub fn into_flashcard(self, index: usize) -> Result<FlashCard> {
        let question = self.question.ok_or(FlashCardError::MissingField {
            index,
            field: "question",
        })?;
        let answer = self.answer.ok_or(FlashCardError::MissingField {
            index,
            field: "answer",
        })?;

        Ok(FlashCard::new(question, answer))
    }
}
