//! Built-in study records, used when no records file is given.
use crate::models::Record;

pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("Who am I?", "EJ"),
        Record::new("What is Flutter?", "A UI toolkit"),
        Record::new("Purpose of setState?", "To update the UI"),
    ]
}
