//! End-to-end tests for the `testbed` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn testbed(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_testbed"))
        .args(args)
        .current_dir(cwd)
        .env_remove("TESTBED_WORKER_ID")
        .env_remove("VITEST_POOL_ID")
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn testbed")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_hitmap(root: &Path) {
    let dir = root.join("frontend/coverage");
    fs::create_dir_all(&dir).unwrap();
    let file = root.join("frontend/src/main.tsx");
    let body = format!(
        r#"{{"{}": {{"statement-hits": {{"0": 1, "1": 0}}, "branch-hits": {{}}, "function-hits": {{"0": 1}}}}}}"#,
        file.display()
    );
    fs::write(dir.join("coverage-final.json"), body).unwrap();
}

#[test]
fn teardown_uses_env_worker_and_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let db_dir = tmp.path().join("test-dbs");
    fs::create_dir_all(&db_dir).unwrap();
    fs::write(db_dir.join("test-2.db"), b"db").unwrap();
    fs::write(db_dir.join("test-2.db-wal"), b"wal").unwrap();
    fs::write(db_dir.join("test-1.db"), b"other worker").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_testbed"))
        .arg("teardown")
        .current_dir(tmp.path())
        .env("TESTBED_WORKER_ID", "2")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("worker 2: removed 2 file(s), 0 cleanup failure(s)"));
    assert!(!db_dir.join("test-2.db").exists());
    assert!(!db_dir.join("test-2.db-wal").exists());
    assert!(db_dir.join("test-1.db").exists());
}

#[test]
fn teardown_defaults_to_worker_one_and_is_repeatable() {
    let tmp = tempfile::tempdir().unwrap();
    let db_dir = tmp.path().join("test-dbs");
    fs::create_dir_all(&db_dir).unwrap();
    fs::write(db_dir.join("test-1.db"), b"db").unwrap();

    let first = testbed(tmp.path(), &["teardown"]);
    assert!(first.status.success());
    assert!(stdout(&first).contains("worker 1: removed 1 file(s)"));

    let second = testbed(tmp.path(), &["teardown"]);
    assert!(second.status.success());
    assert!(stdout(&second).contains("worker 1: removed 0 file(s)"));
}

#[test]
fn teardown_honors_config_db_dir() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("testbed.toml"), "[fixture]\ndb_dir = \"dbs\"\n").unwrap();
    fs::create_dir_all(tmp.path().join("dbs")).unwrap();
    fs::write(tmp.path().join("dbs/test-3.db-shm"), b"shm").unwrap();

    let output = testbed(tmp.path(), &["teardown", "--worker-id", "3"]);
    assert!(output.status.success());
    assert!(!tmp.path().join("dbs/test-3.db-shm").exists());
}

#[test]
fn invalid_worker_id_is_a_usage_error() {
    let tmp = tempfile::tempdir().unwrap();
    let output = testbed(tmp.path(), &["teardown", "--worker-id", "../x"]);
    assert!(!output.status.success());
}

#[test]
fn coverage_without_backend_summary_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    write_hitmap(tmp.path());

    let output = testbed(tmp.path(), &["coverage"]);
    let log = stderr(&output);
    assert!(output.status.success(), "stderr: {log}");
    let text = stdout(&output);
    assert!(!text.contains("Backend"));
    assert!(text.contains("Frontend coverage: statements 50.00% (1/2)"));
    assert!(text.contains("  50.00%  frontend/src/main.tsx"));
    assert!(log.contains("[no-data]"), "stderr: {log}");
    assert!(log.contains("coverage-summary.json"), "stderr: {log}");
}

#[test]
fn relative_repo_root_still_gives_relative_paths() {
    let tmp = tempfile::tempdir().unwrap();
    write_hitmap(tmp.path());
    fs::write(tmp.path().join("testbed.toml"), "[coverage]\nrepo_root = \".\"\n").unwrap();

    let output = testbed(tmp.path(), &["coverage"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("  50.00%  frontend/src/main.tsx"), "stdout: {text}");
    assert!(!text.contains(&tmp.path().display().to_string()), "stdout: {text}");
}

#[test]
fn coverage_json_output() {
    let tmp = tempfile::tempdir().unwrap();
    write_hitmap(tmp.path());

    let output = testbed(tmp.path(), &["coverage", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["backend"].is_null());
    assert_eq!(value["frontend"]["summary"]["functions"], serde_json::json!(100.0));
}

#[test]
fn coverage_with_malformed_artifact_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("backend/coverage");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("coverage-summary.json"), "not json").unwrap();

    let output = testbed(tmp.path(), &["coverage"]);
    assert!(!output.status.success());
    let log = stderr(&output);
    assert!(log.contains("[parse-error]"), "stderr: {log}");
    assert!(log.contains("coverage-summary.json"), "stderr: {log}");
}

#[test]
fn teardown_with_malformed_config_still_cleans_up() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("testbed.toml"), "[fixture\n").unwrap();
    let db_dir = tmp.path().join("test-dbs");
    fs::create_dir_all(&db_dir).unwrap();
    fs::write(db_dir.join("test-1.db"), b"db").unwrap();

    let output = testbed(tmp.path(), &["teardown"]);
    assert!(output.status.success());
    assert!(!db_dir.join("test-1.db").exists());
    let log = stderr(&output);
    assert!(log.contains("[cleanup-failed]"), "stderr: {log}");
    assert!(log.contains("testbed.toml"), "stderr: {log}");
}

#[test]
fn sweep_with_malformed_config_still_cleans_up() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("testbed.toml"), "[fixture\n").unwrap();
    let db_dir = tmp.path().join("test-dbs");
    fs::create_dir_all(&db_dir).unwrap();
    fs::write(db_dir.join("test-2.db-wal"), b"wal").unwrap();

    let output = testbed(tmp.path(), &["sweep"]);
    assert!(output.status.success());
    assert!(!db_dir.join("test-2.db-wal").exists());
}

#[test]
fn coverage_with_malformed_config_fails() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("testbed.toml"), "[coverage\n").unwrap();
    let output = testbed(tmp.path(), &["coverage"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("testbed.toml"));
}

#[test]
fn failed_removal_is_logged_with_worker_and_path() {
    let tmp = tempfile::tempdir().unwrap();
    let db_dir = tmp.path().join("test-dbs");
    fs::create_dir_all(db_dir.join("test-5.db")).unwrap();

    let output = testbed(tmp.path(), &["teardown", "--worker-id", "5"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("worker 5: removed 0 file(s), 1 cleanup failure(s)"));
    let log = stderr(&output);
    assert!(log.contains("[cleanup-failed]"), "stderr: {log}");
    assert!(log.contains("worker_id=5"), "stderr: {log}");
    assert!(log.contains("test-5.db"), "stderr: {log}");
}

#[test]
fn sweep_removes_all_workers() {
    let tmp = tempfile::tempdir().unwrap();
    let db_dir = tmp.path().join("test-dbs");
    fs::create_dir_all(&db_dir).unwrap();
    for name in ["test-1.db", "test-2.db", "test-2.db-wal"] {
        fs::write(db_dir.join(name), b"x").unwrap();
    }

    let output = testbed(tmp.path(), &["sweep"]);
    assert!(output.status.success());
    assert_eq!(fs::read_dir(&db_dir).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn run_forwards_test_command_status() {
    let tmp = tempfile::tempdir().unwrap();
    let output = testbed(tmp.path(), &["run", "--", "sh", "-c", "exit 3"]);
    assert_eq!(output.status.code(), Some(3));
}

#[cfg(unix)]
#[test]
fn run_cleans_up_and_reports_even_when_reporting_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let db_dir = tmp.path().join("test-dbs");
    fs::create_dir_all(&db_dir).unwrap();
    fs::write(db_dir.join("test-4.db"), b"x").unwrap();
    let dir = tmp.path().join("backend/coverage");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("coverage-summary.json"), "{").unwrap();

    let output = testbed(tmp.path(), &["run", "--", "true"]);
    assert!(output.status.success());
    assert!(!db_dir.join("test-4.db").exists());
}

#[test]
fn run_with_missing_program_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let output = testbed(tmp.path(), &["run", "--", "definitely-not-a-real-program-xyz"]);
    assert!(!output.status.success());
}
