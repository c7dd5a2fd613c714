//! Integration test for the full conversion pipeline
//!
//! Drives a `Converter` against a directory-backed store: CSV object in,
//! GEXF artifact out under the version-parameterized destination key.

use linkgraph_core::convert::Converter;
use linkgraph_core::retry::RetryPolicy;
use linkgraph_core::storage::{FsStore, ObjectStore, RetryingStore};
use std::time::Duration;
use tempfile::tempdir;

fn converter(input_key: &str) -> Converter {
    Converter {
        input_key: input_key.to_string(),
        version: "test".to_string(),
        creator: "creator".to_string(),
        name: "name".to_string(),
    }
}

#[test]
fn test_integration_csv_to_gexf_artifact() {
    let dir = tempdir().unwrap();
    let store = FsStore::new(dir.path());
    store
        .upload_text(
            "SourceURL,TargetURL\r\n\
             http://a.com,http://b.com\r\n\
             http://b.com,http://c.com\r\n\
             http://a.com,http://b.com\r\n",
            "input.csv",
        )
        .unwrap();

    let destination = converter("input.csv").run(&store).unwrap();
    assert_eq!(destination, "parsed-output-test.gexf");
    assert!(store.exists(&destination));

    let document = store.download_text(&destination).unwrap();
    assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(document.contains("<creator>creator</creator>"));
    assert!(document.contains("<description>name</description>"));
    assert!(document.contains(r#"<node id="1" label="http://a.com"/>"#));
    assert!(document.contains(r#"<node id="2" label="http://b.com"/>"#));
    assert!(document.contains(r#"<node id="3" label="http://c.com"/>"#));
    assert!(document.contains(r#"<edge id="1" source="1" target="2"/>"#));
    assert!(document.contains(r#"<edge id="2" source="2" target="3"/>"#));
    // The duplicate third row adds no edge.
    assert_eq!(document.matches("<edge ").count(), 2);
}

#[test]
fn test_integration_missing_input_yields_empty_document() {
    let dir = tempdir().unwrap();
    let store = FsStore::new(dir.path());

    let destination = converter("absent.csv").run(&store).unwrap();
    assert!(store.exists(&destination));

    let document = store.download_text(&destination).unwrap();
    assert!(document.contains("<graph defaultedgetype=\"directed\" mode=\"static\">"));
    assert!(!document.contains("<node "));
    assert!(!document.contains("<edge "));
}

#[test]
fn test_integration_runs_through_retrying_store() {
    let dir = tempdir().unwrap();
    let store = RetryingStore::new(
        FsStore::new(dir.path()),
        RetryPolicy::new(3, Duration::ZERO),
    );
    store
        .upload_text(
            "SourceURL,TargetURL\nhttp://a.com,http://a.com\n",
            "input.csv",
        )
        .unwrap();

    let destination = converter("input.csv").run(&store).unwrap();
    let document = store.download_text(&destination).unwrap();
    assert_eq!(document.matches("<node ").count(), 1);
    assert!(document.contains(r#"<edge id="1" source="1" target="1"/>"#));
}

#[test]
fn test_integration_output_is_deterministic() {
    let csv = "SourceURL,TargetURL\nhttp://a.com,http://b.com\nhttp://b.com,http://c.com\n";
    let mut documents = Vec::new();
    for _ in 0..2 {
        let dir = tempdir().unwrap();
        let store = FsStore::new(dir.path());
        store.upload_text(csv, "input.csv").unwrap();
        let destination = converter("input.csv").run(&store).unwrap();
        documents.push(store.download_text(&destination).unwrap());
    }
    assert_eq!(documents[0], documents[1]);
}

#[test]
fn test_integration_malformed_row_is_fatal() {
    let dir = tempdir().unwrap();
    let store = FsStore::new(dir.path());
    store
        .upload_text("SourceURL,TargetURL\nhttp://a.com\n", "input.csv")
        .unwrap();

    let err = converter("input.csv").run(&store).unwrap_err();
    assert!(err.to_string().contains("input.csv"));
    assert!(!store.exists("parsed-output-test.gexf"));
}
