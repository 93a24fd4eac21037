//! Integration tests for formatting-preserving rewrites
//!
//! Each fixture is authored in a specific style; after conversion the file
//! must be byte-identical except for the rewritten value.

use authconv::{convert_tree, ConversionDirection};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn convert_fixture(content: &[u8]) -> Vec<u8> {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("fixture.json");
    fs::write(&path, content).unwrap();

    let report = convert_tree(tmp.path(), ConversionDirection::ToMsi).unwrap();
    assert_eq!(report.modified, 1, "fixture should have been rewritten");

    fs::read(&path).unwrap()
}

fn convert_str(content: &str) -> String {
    String::from_utf8(convert_fixture(content.as_bytes())).unwrap()
}

#[test]
fn test_two_space_indent_preserved() {
    let out = convert_str("{\n  \"AuthenticationMode\": \"ConnectionString\"\n}\n");
    assert_eq!(out, "{\n  \"AuthenticationMode\": \"Msi\"\n}\n");
}

#[test]
fn test_four_space_indent_preserved() {
    let out = convert_str(
        "{\n    \"Outer\": {\n        \"AuthenticationMode\": \"ConnectionString\"\n    }\n}\n",
    );
    assert_eq!(
        out,
        "{\n    \"Outer\": {\n        \"AuthenticationMode\": \"Msi\"\n    }\n}\n"
    );
}

#[test]
fn test_tab_indent_preserved() {
    let out = convert_str("{\n\t\"AuthenticationMode\": \"ConnectionString\"\n}\n");
    assert_eq!(out, "{\n\t\"AuthenticationMode\": \"Msi\"\n}\n");
}

#[test]
fn test_crlf_preserved() {
    let out = convert_str("{\r\n  \"AuthenticationMode\": \"ConnectionString\"\r\n}\r\n");
    assert_eq!(out, "{\r\n  \"AuthenticationMode\": \"Msi\"\r\n}\r\n");
}

#[test]
fn test_minified_stays_minified() {
    let out = convert_str("{\"AuthenticationMode\":\"ConnectionString\"}");
    assert_eq!(out, "{\"AuthenticationMode\":\"Msi\"}");
}

#[test]
fn test_missing_trailing_newline_preserved() {
    let out = convert_str("{\n  \"AuthenticationMode\": \"ConnectionString\"\n}");
    assert_eq!(out, "{\n  \"AuthenticationMode\": \"Msi\"\n}");
}

#[test]
fn test_bom_preserved() {
    let mut fixture = vec![0xEF, 0xBB, 0xBF];
    fixture.extend_from_slice(b"{\n  \"AuthenticationMode\": \"ConnectionString\"\n}\n");

    let out = convert_fixture(&fixture);
    assert_eq!(&out[..3], &[0xEF, 0xBB, 0xBF]);
    assert_eq!(
        std::str::from_utf8(&out[3..]).unwrap(),
        "{\n  \"AuthenticationMode\": \"Msi\"\n}\n"
    );
}

#[test]
fn test_key_order_and_siblings_preserved() {
    let out = convert_str(
        "{\n  \"Zeta\": 1,\n  \"AuthenticationMode\": \"ConnectionString\",\n  \"Alpha\": [true, null],\n  \"Empty\": {}\n}\n",
    );
    assert_eq!(
        out,
        "{\n  \"Zeta\": 1,\n  \"AuthenticationMode\": \"Msi\",\n  \"Alpha\": [\n    true,\n    null\n  ],\n  \"Empty\": {}\n}\n"
    );
}

#[test]
fn test_round_trip_is_byte_identical() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("round.json");
    let original = "{\r\n\t\"Stages\": [\r\n\t\t{\r\n\t\t\t\"AuthenticationMode\": \"ConnectionString\"\r\n\t\t}\r\n\t]\r\n}\r\n";
    fs::write(&path, original).unwrap();

    convert_tree(tmp.path(), ConversionDirection::ToMsi).unwrap();
    let intermediate = fs::read_to_string(&path).unwrap();
    assert!(intermediate.contains("\"Msi\""));
    assert!(intermediate.contains("\r\n\t\t\t"));

    convert_tree(tmp.path(), ConversionDirection::ToConnectionString).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_unicode_content_survives_rewrite() {
    let out = convert_str(
        "{\n  \"Name\": \"héllo wörld\",\n  \"AuthenticationMode\": \"ConnectionString\"\n}\n",
    );
    assert_eq!(
        out,
        "{\n  \"Name\": \"héllo wörld\",\n  \"AuthenticationMode\": \"Msi\"\n}\n"
    );
}

#[test]
fn test_unmodified_file_keeps_odd_formatting() {
    // A file the rewriter has no business touching keeps every byte,
    // even formatting the serializer could never reproduce.
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("odd.json");
    let original = "{\"a\"  :  1 ,\n\n     \"b\":2}";
    fs::write(&path, original).unwrap();

    let report = convert_tree(tmp.path(), ConversionDirection::ToMsi).unwrap();
    assert_eq!(report.modified, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_fixture_lives_anywhere_under_root() {
    let tmp = tempdir().unwrap();
    let nested = tmp.path().join("a/b/c");
    fs::create_dir_all(&nested).unwrap();
    let path = nested.join("deep.json");
    fs::write(&path, "{\n  \"AuthenticationMode\": \"Msi\"\n}\n").unwrap();

    convert_tree(tmp.path(), ConversionDirection::ToConnectionString).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n  \"AuthenticationMode\": \"ConnectionString\"\n}\n"
    );
}

#[test]
fn test_scalar_root_document() {
    // Valid JSON, no object anywhere: examined but never modified
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("scalar.json");
    fs::write(&path, "\"just a string\"").unwrap();

    let report = convert_tree(tmp.path(), ConversionDirection::ToMsi).unwrap();
    assert_eq!(report.examined, 1);
    assert_eq!(report.modified, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "\"just a string\"");
}
