//! Integration tests for section replacement.

use std::fs;
use std::path::PathBuf;

use docgen_sections::{
    Error, MarkerKind, Multiplicity, read_section, replace_section, replace_section_with,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

const START: &str = r"^<!-- X -->$";
const END: &str = r"^<!-- /X -->$";

fn write(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("README.md");
    fs::write(&path, content).unwrap();
    path
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_replaces_interior() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "<!-- X -->\nold\n<!-- /X -->\n");

    let changed = replace_section(&path, START, END, &lines(&["new\n"])).unwrap();

    assert!(changed);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<!-- X -->\nnew\n<!-- /X -->\n"
    );
}

#[test]
fn test_preserves_surrounding_content() {
    let temp = TempDir::new().unwrap();
    let path = write(
        &temp,
        "# Title\n\nintro\n<!-- X -->\nold 1\nold 2\n<!-- /X -->\n\n## Footer\nno newline at end",
    );

    replace_section(&path, START, END, &lines(&["\n", "fresh\n", "\n"])).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# Title\n\nintro\n<!-- X -->\n\nfresh\n\n<!-- /X -->\n\n## Footer\nno newline at end"
    );
}

#[rstest]
#[case::empty(&[])]
#[case::single(&["one\n"])]
#[case::blank_padding(&["\n", "body\n", "\n"])]
#[case::crlf(&["windows\r\n"])]
fn test_idempotent_and_round_trips(#[case] block: &[&str]) {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "head\r\n<!-- X -->\r\nstale\r\n<!-- /X -->\r\ntail\r\n");
    let block = lines(block);

    replace_section(&path, START, END, &block).unwrap();
    let first = fs::read(&path).unwrap();

    let changed = replace_section(&path, START, END, &block).unwrap();
    let second = fs::read(&path).unwrap();

    assert!(!changed);
    assert_eq!(first, second);
    assert_eq!(read_section(&path, START, END).unwrap(), block);
}

#[test]
fn test_marker_lines_are_byte_identical() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "<!-- X -->\r\nold\n<!-- /X -->");

    replace_section(&path, START, END, &lines(&["new\n"])).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<!-- X -->\r\n"));
    assert!(content.ends_with("\n<!-- /X -->"));
}

#[test]
fn test_multiple_start_markers_are_ambiguous() {
    let temp = TempDir::new().unwrap();
    let original = "<!-- X -->\na\n<!-- /X -->\n<!-- X -->\nb\n<!-- /X -->\n";
    let path = write(&temp, original);

    let err = replace_section(&path, START, END, &lines(&["new\n"])).unwrap_err();

    match err {
        Error::AmbiguousRegion { lines, .. } => assert_eq!(lines, vec![1, 4]),
        other => panic!("expected AmbiguousRegion, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_first_match_policy_replaces_first_region_only() {
    let temp = TempDir::new().unwrap();
    let path = write(
        &temp,
        "<!-- X -->\na\n<!-- /X -->\n<!-- X -->\nb\n<!-- /X -->\n",
    );

    replace_section_with(&path, START, END, &lines(&["new\n"]), Multiplicity::FirstMatch)
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<!-- X -->\nnew\n<!-- /X -->\n<!-- X -->\nb\n<!-- /X -->\n"
    );
}

#[test]
fn test_missing_marker_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let original = "<!-- X -->\nold\n";
    let path = write(&temp, original);

    let err = replace_section(&path, START, END, &lines(&["new\n"])).unwrap_err();

    assert!(matches!(
        err,
        Error::MarkerNotFound {
            kind: MarkerKind::End,
            ..
        }
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_unchanged_content_does_not_rewrite_file() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "<!-- X -->\nsame\n<!-- /X -->\n");
    let before = fs::metadata(&path).unwrap().modified().unwrap();

    let changed = replace_section(&path, START, END, &lines(&["same\n"])).unwrap();

    assert!(!changed);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
}
