use flashcard_format::{FlashCardError, Record, build_all, display_to, sample_records};
use pretty_assertions::assert_eq;
use std::process::Command;

const EXPECTED: &str = "[FlashCard(question='Who am I?', answer='EJ'), \
FlashCard(question='What is Flutter?', answer='A UI toolkit'), \
FlashCard(question='Purpose of setState?', answer='To update the UI')]";

#[test]
fn sample_set_renders_expected_line() {
    let set = build_all(sample_records()).unwrap();
    let mut out = Vec::new();

    display_to(&set, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), format!("{EXPECTED}\n"));
}

#[test]
fn missing_answer_fails_before_output() {
    let mut records = sample_records();
    records.push(Record {
        question: Some("Orphan question".to_string()),
        answer: None,
    });

    let result = build_all(records);
    assert!(matches!(
        result,
        Err(FlashCardError::MissingField {
            index: 3,
            field: "answer"
        })
    ));
}

#[test]
fn binary_prints_one_line() {
    let output = Command::new(env!("CARGO_BIN_EXE_flashcards"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), format!("{EXPECTED}\n"));
}

#[test]
fn binary_fails_on_incomplete_records_file() {
    let path = std::env::temp_dir().join(format!(
        "flashcard_format_e2e_{}_incomplete.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"[{"question": "Who am I?"}]"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_flashcards"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let _ = std::fs::remove_file(path);
}

#[test]
fn binary_reads_records_file() {
    let path = std::env::temp_dir().join(format!(
        "flashcard_format_e2e_{}_records.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"[{"question": "", "answer": "blank"}]"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_flashcards"))
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[FlashCard(question='', answer='blank')]\n"
    );

    let _ = std::fs::remove_file(path);
}
