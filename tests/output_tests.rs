use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use std::fs;

fn setup_test_env(color: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let config_dir = temp_dir.path().join(".taskpad");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("rc"),
        format!("data.location={}\ncolor={}\n", db_path.display(), color),
    )
    .unwrap();
    temp_dir
}

fn get_task_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskpad").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd
}

fn list_json(temp_dir: &TempDir, filter: &[&str]) -> serde_json::Value {
    let mut args = vec!["list", "--json"];
    args.extend_from_slice(filter);
    let output = get_task_cmd(temp_dir).args(&args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_list_json_shape() {
    let temp_dir = setup_test_env("never");

    get_task_cmd(&temp_dir)
        .args(&["add", "Buy milk", "-c", "shopping", "-p", "low", "--due", "2026-03-12"])
        .assert()
        .success();
    get_task_cmd(&temp_dir).args(&["add", "Call mom"]).assert().success();

    let json = list_json(&temp_dir, &[]);
    let tasks = json["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    // Newest first
    assert_eq!(tasks[0]["title"], "Call mom");
    assert_eq!(tasks[1]["title"], "Buy milk");
    assert_eq!(tasks[1]["category"], "shopping");
    assert_eq!(tasks[1]["priority"], "low");
    assert_eq!(tasks[1]["dueDate"], "2026-03-12");
    assert_eq!(tasks[1]["completed"], false);
    assert!(tasks[0].get("description").is_none());
    assert!(tasks[0]["createdAt"].is_string());
    assert_eq!(json["statistics"]["total"], 2);
}

#[test]
fn test_list_json_filter_keeps_full_statistics() {
    let temp_dir = setup_test_env("never");

    get_task_cmd(&temp_dir).args(&["add", "Report", "-c", "work"]).assert().success();
    get_task_cmd(&temp_dir).args(&["add", "Groceries", "-c", "shopping"]).assert().success();

    let json = list_json(&temp_dir, &["cat:work"]);
    let tasks = json["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Report");
    assert_eq!(json["statistics"]["total"], 2);
    assert_eq!(json["statistics"]["active"], 2);
}

#[test]
fn test_list_table_columns() {
    let temp_dir = setup_test_env("never");

    get_task_cmd(&temp_dir)
        .args(&["add", "Buy milk", "-c", "shopping", "--due", "2026-03-12"])
        .assert()
        .success();

    get_task_cmd(&temp_dir).args(&["list"]).assert()
        .success()
        .stdout(predicate::str::starts_with("ID"))
        .stdout(predicate::str::contains("[ ] Buy milk"))
        .stdout(predicate::str::contains("shopping"))
        .stdout(predicate::str::contains("Mar 12, 2026"))
        .stdout(predicate::str::contains("Completion: 0%"));
}

#[test]
fn test_color_never_has_no_escapes() {
    let temp_dir = setup_test_env("never");
    get_task_cmd(&temp_dir).args(&["add", "Plain", "-p", "high"]).assert().success();

    get_task_cmd(&temp_dir).args(&["list"]).assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_color_always_emits_escapes() {
    let temp_dir = setup_test_env("always");
    get_task_cmd(&temp_dir).args(&["add", "Bright", "-p", "high"]).assert().success();

    get_task_cmd(&temp_dir).args(&["list"]).assert()
        .success()
        .stdout(predicate::str::contains("\x1b[31m"));
}

#[test]
fn test_show_json() {
    let temp_dir = setup_test_env("never");
    get_task_cmd(&temp_dir)
        .args(&["add", "Dentist", "-d", "Bring card", "-c", "health"])
        .assert()
        .success();

    let id = list_json(&temp_dir, &[])["tasks"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let output = get_task_cmd(&temp_dir).args(&["show", &id, "--json"]).output().unwrap();
    assert!(output.status.success());
    let task: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(task["id"], id.as_str());
    assert_eq!(task["description"], "Bring card");
    assert_eq!(task["category"], "health");
}

#[test]
fn test_stats_text() {
    let temp_dir = setup_test_env("never");
    get_task_cmd(&temp_dir).args(&["add", "One"]).assert().success();

    get_task_cmd(&temp_dir).args(&["stats"]).assert()
        .success()
        .stdout("Total: 1  Active: 1  Completed: 0  Completion: 0%\n");
}

#[test]
fn test_relative_data_location() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".taskpad");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("rc"), "data.location=lists/mine.db\ncolor=never\n").unwrap();

    get_task_cmd(&temp_dir).args(&["add", "Relative"]).assert().success();
    assert!(config_dir.join("lists").join("mine.db").exists());
}

#[test]
fn test_missing_config_uses_default_location() {
    let temp_dir = TempDir::new().unwrap();

    get_task_cmd(&temp_dir).args(&["add", "Defaults"]).assert().success();
    assert!(temp_dir.path().join(".taskpad").join("store.db").exists());
}
