//! Integration tests for GSM8K dataset loading

use std::io::Write;

use pretty_assertions::assert_eq;

use gsm8k_tot_eval::dataset::load_jsonl;
use gsm8k_tot_eval::error::DatasetError;

/// Write a JSONL fixture into a temp directory
fn write_fixture(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("gsm8k.jsonl");
    let mut file = std::fs::File::create(&path).expect("Failed to create fixture");
    file.write_all(content.as_bytes()).expect("Failed to write fixture");
    file.flush().expect("Failed to flush");
    (dir, path)
}

const FIXTURE: &str = r#"{"question": "Janet has 5 apples. She gives 2 to Bob. How many does she have?", "answer": "5 - 2 = <<5-2=3>>3 apples\n#### 3"}
{"question": "There are 10 birds. 3 fly away. How many remain?", "answer": "10 - 3 = <<10-3=7>>7 birds\n#### 7"}

{"question": "What is 2+2?", "answer": "4"}
"#;

#[test]
fn test_load_jsonl_parses_records_and_skips_blank_lines() {
    let (_dir, path) = write_fixture(FIXTURE);

    let records = load_jsonl(&path, None).unwrap();

    assert_eq!(records.len(), 3);
    assert!(records[0].question.starts_with("Janet has 5 apples"));
    assert_eq!(records[0].ground_truth(), "3");
    assert_eq!(records[1].ground_truth(), "7");
    assert_eq!(records[2].ground_truth(), "4");
}

#[test]
fn test_load_jsonl_honors_limit() {
    let (_dir, path) = write_fixture(FIXTURE);

    let records = load_jsonl(&path, Some(2)).unwrap();

    assert_eq!(records.len(), 2);
}

#[test]
fn test_load_jsonl_reports_malformed_line_number() {
    let (_dir, path) = write_fixture(
        "{\"question\": \"ok\", \"answer\": \"1\"}\n{\"question\": \"missing answer\"}\n",
    );

    let result = load_jsonl(&path, None);

    match result {
        Err(DatasetError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_load_jsonl_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.jsonl");

    let result = load_jsonl(&path, None);

    assert!(matches!(result, Err(DatasetError::Io { .. })));
}
