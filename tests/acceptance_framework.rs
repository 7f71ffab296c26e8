// Acceptance Test Framework
// Provides infrastructure for writing Given/When/Then acceptance tests

#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;
use std::fs;
use std::path::{Path, PathBuf};
use taskpad::db::DbConnection;
use taskpad::models::{Category, Priority, Task, TaskDraft};
use taskpad::repo::KvRepo;
use taskpad::store::{TaskStore, TODOS_KEY};

/// Test context for acceptance tests
/// Owns a temporary HOME with an rc file pointing at a fresh database
pub struct AcceptanceTestContext {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl AcceptanceTestContext {
    /// Create a new test context with a fresh database
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let config_dir = temp_dir.path().join(".taskpad");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join("rc"),
            format!("data.location={}\ncolor=never\n", db_path.display()),
        )
        .unwrap();

        Self { temp_dir, db_path }
    }

    /// Get a command instance configured for this test context
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskpad").unwrap();
        cmd.env("HOME", self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Open the store directly for setup and assertions
    pub fn store(&self) -> TaskStore {
        TaskStore::open(DbConnection::connect_at(&self.db_path).unwrap()).unwrap()
    }

    /// Current persisted task list
    pub fn tasks(&self) -> Vec<Task> {
        self.store().tasks().to_vec()
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Builder for Given steps (test setup)
pub struct GivenBuilder<'a> {
    ctx: &'a AcceptanceTestContext,
}

impl<'a> GivenBuilder<'a> {
    pub fn new(ctx: &'a AcceptanceTestContext) -> Self {
        Self { ctx }
    }

    /// Given: task exists with title. Returns its id.
    pub fn task_exists(&self, title: &str) -> String {
        let mut store = self.ctx.store();
        let task = store.create(TaskDraft::new(title)).unwrap();
        task.id.clone()
    }

    /// Given: task exists with category and priority
    pub fn task_exists_with(&self, title: &str, category: Category, priority: Priority) -> String {
        let mut store = self.ctx.store();
        let task = store
            .create(TaskDraft {
                title: title.to_string(),
                category: Some(category),
                priority: Some(priority),
                ..Default::default()
            })
            .unwrap();
        task.id.clone()
    }

    /// Given: task exists and is completed
    pub fn completed_task_exists(&self, title: &str) -> String {
        let id = self.task_exists(title);
        let mut store = self.ctx.store();
        assert_eq!(store.toggle_completion(&id), Some(true));
        id
    }

    /// Given: raw value stored under the task list key
    pub fn stored_value_is(&self, raw: &str) -> &Self {
        let conn = DbConnection::connect_at(self.ctx.db_path()).unwrap();
        KvRepo::set(&conn, TODOS_KEY, raw).unwrap();
        self
    }
}

/// Builder for When steps (actions)
pub struct WhenBuilder<'a> {
    ctx: &'a AcceptanceTestContext,
    cmd_result: Option<std::process::Output>,
}

impl<'a> WhenBuilder<'a> {
    pub fn new(ctx: &'a AcceptanceTestContext) -> Self {
        Self {
            ctx,
            cmd_result: None,
        }
    }

    /// When: execute command
    pub fn execute(&mut self, args: &[&str]) -> &mut Self {
        let result = self.ctx.cmd()
            .args(args)
            .output()
            .unwrap();
        self.cmd_result = Some(result);
        self
    }

    /// When: execute command and expect success
    pub fn execute_success(&mut self, args: &[&str]) -> &mut Self {
        let result = self.ctx.cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .clone();
        self.cmd_result = Some(result);
        self
    }

    /// When: execute command and expect failure
    pub fn execute_failure(&mut self, args: &[&str]) -> &mut Self {
        let result = self.ctx.cmd()
            .args(args)
            .assert()
            .failure()
            .get_output()
            .clone();
        self.cmd_result = Some(result);
        self
    }

    /// Get the command result for assertions
    pub fn result(&self) -> Option<&std::process::Output> {
        self.cmd_result.as_ref()
    }

    /// Captured stdout of the last command
    pub fn stdout(&self) -> String {
        self.cmd_result
            .as_ref()
            .map(|r| String::from_utf8_lossy(&r.stdout).into_owned())
            .unwrap_or_default()
    }
}

/// Builder for Then steps (assertions)
pub struct ThenBuilder<'a> {
    ctx: &'a AcceptanceTestContext,
    when_result: Option<&'a std::process::Output>,
}

impl<'a> ThenBuilder<'a> {
    pub fn new(ctx: &'a AcceptanceTestContext, when_result: Option<&'a std::process::Output>) -> Self {
        Self {
            ctx,
            when_result,
        }
    }

    /// Then: exit code is
    pub fn exit_code_is(&self, expected: i32) -> &Self {
        if let Some(result) = self.when_result {
            let actual = result.status.code().unwrap_or(-1);
            assert_eq!(actual, expected, "Expected exit code {}, got {}", expected, actual);
        }
        self
    }

    /// Then: message contains
    pub fn message_contains(&self, text: &str) -> &Self {
        if let Some(result) = self.when_result {
            let output = String::from_utf8_lossy(&result.stdout);
            let error = String::from_utf8_lossy(&result.stderr);
            assert!(
                output.contains(text) || error.contains(text),
                "Expected message to contain '{}', but got stdout: '{}', stderr: '{}'",
                text, output, error
            );
        }
        self
    }

    /// Then: stdout does not contain
    pub fn output_lacks(&self, text: &str) -> &Self {
        if let Some(result) = self.when_result {
            let output = String::from_utf8_lossy(&result.stdout);
            assert!(
                !output.contains(text),
                "Expected stdout not to contain '{}', got: '{}'",
                text, output
            );
        }
        self
    }

    /// Then: task count is
    pub fn task_count_is(&self, expected: usize) -> &Self {
        let tasks = self.ctx.tasks();
        assert_eq!(tasks.len(), expected, "Expected {} tasks, got {:?}", expected, tasks);
        self
    }

    /// Then: titles in stored order are
    pub fn titles_are(&self, expected: &[&str]) -> &Self {
        let titles: Vec<String> = self.ctx.tasks().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, expected);
        self
    }

    /// Then: task completion is
    pub fn task_completed_is(&self, id: &str, expected: bool) -> &Self {
        let task = self.task(id);
        assert_eq!(task.completed, expected, "Task {} completion", id);
        self
    }

    /// Then: task does not exist
    pub fn task_does_not_exist(&self, id: &str) -> &Self {
        assert!(
            self.ctx.tasks().iter().all(|t| t.id != id),
            "Expected task {} to be gone",
            id
        );
        self
    }

    /// Look up a stored task by id
    pub fn task(&self, id: &str) -> Task {
        self.ctx
            .tasks()
            .into_iter()
            .find(|t| t.id == id)
            .unwrap_or_else(|| panic!("Task {} not found", id))
    }
}
