//! Integration tests for end-to-end file conversion
//!
//! Exercises the full read → reconstruct → write pipeline against real
//! files in a temporary directory.

use std::path::PathBuf;

use tempfile::TempDir;

use nodenest_core::services::{convert_file, ConvertError};

/// Write a source file and return (source path, destination path without suffix)
fn fixture(dir: &TempDir, source_json: &str) -> (PathBuf, PathBuf) {
    let source = dir.path().join("nodes.json");
    std::fs::write(&source, source_json).unwrap();
    let destination = dir.path().join("tree");
    (source, destination)
}

#[tokio::test]
async fn test_end_to_end_two_root_nodes() {
    let dir = TempDir::new().unwrap();
    let (source, destination) = fixture(
        &dir,
        r#"[
            {"nodeId": "1", "name": "First", "parentId": null, "previousSiblingId": null},
            {"nodeId": "2", "name": "Second", "parentId": null, "previousSiblingId": "1"}
        ]"#,
    );

    let roots = convert_file(&source, &destination).await.unwrap();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].node_id, "1");
    assert_eq!(roots[1].node_id, "2");

    // Output lands at the destination path with .json appended
    let written = std::fs::read_to_string(dir.path().join("tree.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();

    assert_eq!(value[0]["nodeId"], "1");
    assert_eq!(value[0]["children"], serde_json::json!([]));
    assert_eq!(value[1]["nodeId"], "2");
    assert_eq!(value[1]["children"], serde_json::json!([]));

    // Pretty-printed with 2-space indent
    assert!(written.starts_with("[\n  {"));
}

#[tokio::test]
async fn test_nested_hierarchy_written_in_sibling_order() {
    let dir = TempDir::new().unwrap();
    let (source, destination) = fixture(
        &dir,
        r#"[
            {"nodeId": "root", "name": "Root", "parentId": null, "previousSiblingId": null},
            {"nodeId": "b", "name": "B", "parentId": "root", "previousSiblingId": "a"},
            {"nodeId": "a", "name": "A", "parentId": "root", "previousSiblingId": null},
            {"nodeId": "a1", "name": "A1", "parentId": "a", "previousSiblingId": null}
        ]"#,
    );

    convert_file(&source, &destination).await.unwrap();

    let written = std::fs::read_to_string(dir.path().join("tree.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();

    assert_eq!(value.as_array().unwrap().len(), 1);
    let children = value[0]["children"].as_array().unwrap();
    assert_eq!(children[0]["nodeId"], "a");
    assert_eq!(children[1]["nodeId"], "b");
    assert_eq!(children[0]["children"][0]["nodeId"], "a1");
}

#[tokio::test]
async fn test_empty_input_produces_empty_array_file() {
    let dir = TempDir::new().unwrap();
    let (source, destination) = fixture(&dir, "[]");

    let roots = convert_file(&source, &destination).await.unwrap();
    assert!(roots.is_empty());

    let written = std::fs::read_to_string(dir.path().join("tree.json")).unwrap();
    assert_eq!(written, "[]");
}

#[tokio::test]
async fn test_missing_source_file_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("does-not-exist.json");
    let destination = dir.path().join("tree");

    let err = convert_file(&source, &destination).await.unwrap_err();
    assert!(matches!(err, ConvertError::SourceRead { .. }));
    assert!(!dir.path().join("tree.json").exists());
}

#[tokio::test]
async fn test_malformed_json_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let (source, destination) = fixture(&dir, "[{\"nodeId\": ");

    let err = convert_file(&source, &destination).await.unwrap_err();
    assert!(matches!(err, ConvertError::MalformedJson { .. }));
    assert!(!dir.path().join("tree.json").exists());
}

#[tokio::test]
async fn test_schema_violation_reports_record_index() {
    let dir = TempDir::new().unwrap();
    let (source, destination) = fixture(
        &dir,
        r#"[
            {"nodeId": "1", "name": "ok", "parentId": null, "previousSiblingId": null},
            {"nodeId": 2, "name": "wrong type", "parentId": null, "previousSiblingId": null}
        ]"#,
    );

    let err = convert_file(&source, &destination).await.unwrap_err();
    assert!(matches!(err, ConvertError::InvalidRecord { index: 1, .. }));
    assert!(!dir.path().join("tree.json").exists());
}

#[tokio::test]
async fn test_duplicate_node_id_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let (source, destination) = fixture(
        &dir,
        r#"[
            {"nodeId": "1", "name": "First", "parentId": null, "previousSiblingId": null},
            {"nodeId": "1", "name": "Again", "parentId": null, "previousSiblingId": null}
        ]"#,
    );

    let err = convert_file(&source, &destination).await.unwrap_err();
    assert!(matches!(err, ConvertError::TreeBuild(_)));
    assert!(!dir.path().join("tree.json").exists());
}

#[tokio::test]
async fn test_cyclic_sibling_chain_fails_instead_of_hanging() {
    let dir = TempDir::new().unwrap();
    let (source, destination) = fixture(
        &dir,
        r#"[
            {"nodeId": "T", "name": "Terminal", "parentId": null, "previousSiblingId": "A"},
            {"nodeId": "A", "name": "A", "parentId": null, "previousSiblingId": "B"},
            {"nodeId": "B", "name": "B", "parentId": null, "previousSiblingId": "A"}
        ]"#,
    );

    let err = convert_file(&source, &destination).await.unwrap_err();
    assert!(matches!(err, ConvertError::TreeBuild(_)));
    assert!(!dir.path().join("tree.json").exists());
}

#[tokio::test]
async fn test_no_temp_file_left_behind() {
    let dir = TempDir::new().unwrap();
    let (source, destination) = fixture(
        &dir,
        r#"[{"nodeId": "1", "name": "Only", "parentId": null, "previousSiblingId": null}]"#,
    );

    convert_file(&source, &destination).await.unwrap();

    assert!(dir.path().join("tree.json").exists());
    assert!(!dir.path().join("tree.json.tmp").exists());
}
