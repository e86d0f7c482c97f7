//! Study set is the ordered list of flashcards. Order is study order.
use super::{FlashCard, Record};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudySet {
    cards: Vec<FlashCard>,
}

impl StudySet {
    /// Builds one card per record, in input order.
    ///
    /// Fails on the first record that lacks a field; no partial set is returned.
    pub fn build_all<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let cards = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_flashcard(index))
            .collect::<Result<Vec<FlashCard>>>()?;

        tracing::debug!("built study set with {} cards", cards.len());
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[FlashCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlashCard> {
        self.cards.iter()
    }
}

impl From<Vec<FlashCard>> for StudySet {
    fn from(cards: Vec<FlashCard>) -> Self {
        Self { cards }
    }
}

impl<'a> IntoIterator for &'a StudySet {
    type Item = &'a FlashCard;
    type IntoIter = std::slice::Iter<'a, FlashCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// `[card, card, ...]`, or `[]` for an empty set.
impl fmt::Display for StudySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
