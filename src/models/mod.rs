pub mod flashcard;
pub mod record;
pub mod study_set;

pub use flashcard::FlashCard;
pub use record::Record;
pub use study_set::StudySet;
