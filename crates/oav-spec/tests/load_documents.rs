use std::io::Write;

use oav_spec::{document_digest, load_document, LoadError};

#[test]
fn loads_json_and_yaml_to_the_same_document() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("api.json");
    std::fs::write(
        &json_path,
        r#"{"paths": {"/widgets": {"get": {"operationId": "listWidgets"}}}}"#,
    )
    .unwrap();

    let yaml_path = dir.path().join("api.yaml");
    let mut f = std::fs::File::create(&yaml_path).unwrap();
    writeln!(f, "paths:").unwrap();
    writeln!(f, "  /widgets:").unwrap();
    writeln!(f, "    get:").unwrap();
    writeln!(f, "      operationId: listWidgets").unwrap();
    drop(f);

    let from_json = load_document(&json_path).unwrap();
    let from_yaml = load_document(&yaml_path).unwrap();
    assert_eq!(from_json, from_yaml);
    assert_eq!(document_digest(&from_json), document_digest(&from_yaml));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_document(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"paths\": ").unwrap();
    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}
