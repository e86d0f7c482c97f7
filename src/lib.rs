pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod sample;

pub use display::{display, display_to, format_cards};
pub use error::{FlashCardError, Result};
pub use models::{FlashCard, Record, StudySet};
pub use sample::sample_records;

/// Builds an ordered study set from raw records. See [`StudySet::build_all`].
pub fn build_all<I>(records: I) -> Result<StudySet>
where
    I: IntoIterator<Item = Record>,
{
    StudySet::build_all(records)
}
