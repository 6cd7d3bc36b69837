use std::path::PathBuf;
use std::process::Command;

fn fixture(dir: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures/scenarios")
        .join(dir)
        .join("openapi.yaml")
}

fn oav(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_oav"));
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

#[test]
fn clean_file_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = oav(dir.path()).arg(fixture("SC-01-conventional-crud")).output().expect("run");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("passed"));
}

#[test]
fn findings_exit_one_and_print_rule_with_v() {
    let dir = tempfile::tempdir().unwrap();
    let output = oav(dir.path())
        .args(["-v", "-s"])
        .arg(fixture("SC-04-duplicate-ids"))
        .output()
        .expect("run");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1), "stdout={stdout}");
    assert!(stdout.contains("operationIds must be unique"));
    assert!(stdout.contains("Rule    :  operation-ids"));
    assert!(stdout.contains("Total number of errors   : 1"));
}

#[test]
fn json_output_parses() {
    let dir = tempfile::tempdir().unwrap();
    let output = oav(dir.path())
        .arg("--json")
        .arg(fixture("SC-02-collection-get-prefix"))
        .output()
        .expect("run");
    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(payload["files"][0]["warnings"][0]["locator"], "paths./widgets.get.operationId");
}

#[test]
fn config_file_controls_severity_unless_default_mode() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".validaterc.toml"),
        "[operations]\noperation_id_naming_convention = \"off\"\n",
    )
    .unwrap();

    let configured = oav(dir.path()).arg(fixture("SC-02-collection-get-prefix")).output().expect("run");
    assert_eq!(configured.status.code(), Some(0));

    let defaults = oav(dir.path())
        .arg("-d")
        .arg(fixture("SC-02-collection-get-prefix"))
        .output()
        .expect("run");
    assert_eq!(defaults.status.code(), Some(1));
}

#[test]
fn init_writes_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = oav(dir.path()).arg("init").output().expect("init");
    assert_eq!(output.status.code(), Some(0));
    let written = std::fs::read_to_string(dir.path().join(".validaterc.toml")).unwrap();
    assert!(written.contains("operation_id_naming_convention = \"warning\""));
}

#[test]
fn missing_file_is_engine_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = oav(dir.path()).arg(dir.path().join("nope.yaml")).output().expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.yaml"));
}

#[test]
fn no_files_is_engine_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = oav(dir.path()).output().expect("run");
    assert_eq!(output.status.code(), Some(2));
}
