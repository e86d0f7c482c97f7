//! Printing a study set.
//!
//! The output is one line: each card's text form, comma-separated, in brackets.

use crate::error::Result;
use crate::models::{FlashCard, StudySet};
use std::io::{self, Write};

/// Formats cards as `[FlashCard(...), FlashCard(...)]`.
pub fn format_cards(cards: &[FlashCard]) -> String {
    let items: Vec<String> = cards.iter().map(FlashCard::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Writes the set to stdout as a single line.
pub fn display(set: &StudySet) -> Result<()> {
    let stdout = io::stdout();
    display_to(set, &mut stdout.lock())
}

pub fn display_to<W: Write>(set: &StudySet, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", format_cards(set.cards()))?;
    writer.flush()?;
    Ok(())
}
