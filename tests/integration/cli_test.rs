use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn responder() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("responder").unwrap()
}

#[test]
fn init_creates_empty_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.json");

    responder()
        .arg("--storage-file")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Initialized empty question document"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn init_defaults_to_questions_json() {
    let dir = TempDir::new().unwrap();
    responder()
        .arg("init")
        .current_dir(dir.path())
        .env_remove("RESPONDER_STORAGE_FILE")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("questions.json")).unwrap(),
        "[]"
    );
}

#[test]
fn init_reads_path_from_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("store.json");

    responder()
        .arg("init")
        .env("RESPONDER_STORAGE_FILE", &path)
        .assert()
        .success();

    assert!(path.exists());
}

#[test]
fn init_twice_fails_without_truncating() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.json");
    fs::write(&path, r#"[{"id":"q1","author":"A","summary":"S","answers":[]}]"#).unwrap();

    responder()
        .arg("--storage-file")
        .arg(&path)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));

    assert!(fs::read_to_string(&path).unwrap().contains("q1"));
}

#[test]
fn serve_refuses_missing_document() {
    let dir = TempDir::new().unwrap();

    responder()
        .arg("--storage-file")
        .arg(dir.path().join("absent.json"))
        .args(["serve", "--port", "0"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("responder init"));
}

#[test]
fn serve_refuses_malformed_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.json");
    fs::write(&path, "{}").unwrap();

    responder()
        .arg("--storage-file")
        .arg(&path)
        .args(["serve", "--port", "0"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("malformed"));
}

#[test]
fn help_lists_subcommands() {
    responder()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("init"))
        .stdout(predicates::str::contains("serve"));
}
