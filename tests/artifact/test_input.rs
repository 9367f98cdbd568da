//! Tests for URL file parsing.

use artifact_trust::artifact::{Category, parse_url_lines, read_url_file};
use std::io::Write;

#[test]
fn test_comma_separated_lines() {
    let content = "https://github.com/SkyworkAI/Matrix-Game, https://huggingface.co/datasets/xlangai/AgentNet ,https://huggingface.co/google/gemma-3-270m\n";
    let records = parse_url_lines(content);

    let categories: Vec<Category> = records.iter().map(|r| r.category()).collect();
    assert_eq!(
        categories,
        vec![Category::Code, Category::Dataset, Category::Model]
    );
    assert_eq!(
        records[1].link(),
        "https://huggingface.co/datasets/xlangai/AgentNet"
    );
}

#[test]
fn test_empty_fields_and_lines_are_skipped() {
    let content = ",,https://huggingface.co/model\n\n   \n , ,\nhttps://example.com/x\n";
    let records = parse_url_lines(content);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].category(), Category::Model);
    assert_eq!(records[1].category(), Category::Invalid);
}

#[test]
fn test_read_url_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, ",,https://huggingface.co/model").unwrap();
    writeln!(file, "https://github.com/a/b").unwrap();

    let records = read_url_file(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].link(), "https://huggingface.co/model");
    assert_eq!(records[1].category(), Category::Code);
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_url_file(dir.path().join("missing.txt")).is_err());
}

#[test]
fn test_comma_inside_query_string() {
    let content = "https://huggingface.co/google/bert?revision=a,b,https://github.com/a/b, https://huggingface.co/datasets/squad#x,y\n";
    let records = parse_url_lines(content);

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0].link(),
        "https://huggingface.co/google/bert?revision=a,b"
    );
    assert_eq!(records[0].category(), Category::Model);
    assert_eq!(records[1].link(), "https://github.com/a/b");
    assert_eq!(records[2].link(), "https://huggingface.co/datasets/squad#x,y");
    assert_eq!(records[2].category(), Category::Dataset);
}

#[test]
fn test_trailing_comma_after_query() {
    let records = parse_url_lines("https://huggingface.co/gpt2?x=1,\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].link(), "https://huggingface.co/gpt2?x=1");
}
