//! Task store
//!
//! Holds the authoritative task list and mirrors it to the key-value table
//! under [`TODOS_KEY`]. Every successful mutation writes the whole list back
//! before returning. A failed write is logged and the in-memory list remains
//! the source of truth.

pub mod error;

pub use error::StoreError;

use crate::filter::derive_view;
use crate::models::{FilterSpec, Statistics, Task, TaskDraft, TaskPatch};
use crate::repo::KvRepo;
use crate::stats::derive_statistics;
use anyhow::Result;
use rusqlite::Connection;
use std::collections::HashSet;

/// Key holding the serialized task list
pub const TODOS_KEY: &str = "todos";

/// In-memory task list with write-through persistence
pub struct TaskStore {
    conn: Connection,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store, loading the persisted list.
    ///
    /// A missing or unparsable value yields an empty list.
    pub fn open(conn: Connection) -> Result<Self> {
        let tasks = match KvRepo::get(&conn, TODOS_KEY)? {
            Some(raw) => decode_tasks(&raw),
            None => Vec::new(),
        };
        log::debug!("Loaded {} task(s)", tasks.len());
        Ok(Self { conn, tasks })
    }

    /// Current snapshot, most recently created first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a task from `draft` and prepend it to the list
    pub fn create(&mut self, draft: TaskDraft) -> Result<&Task, StoreError> {
        if draft.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let task = Task::from_draft(draft);
        log::debug!("Creating task {}", task.id);
        self.tasks.insert(0, task);
        self.persist();
        Ok(&self.tasks[0])
    }

    /// Merge `patch` into the task with `id`.
    ///
    /// Returns `Ok(None)` without touching anything when no task has that id,
    /// whatever the patch holds.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Result<Option<&Task>, StoreError> {
        let Some(idx) = self.position(id) else {
            log::debug!("Update ignored, no task {}", id);
            return Ok(None);
        };
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(StoreError::EmptyTitle);
            }
        }
        self.tasks[idx].apply(patch);
        self.persist();
        Ok(Some(&self.tasks[idx]))
    }

    /// Flip the completion flag. Returns the new value, or `None` for an unknown id.
    pub fn toggle_completion(&mut self, id: &str) -> Option<bool> {
        let Some(idx) = self.position(id) else {
            log::debug!("Toggle ignored, no task {}", id);
            return None;
        };
        let task = &mut self.tasks[idx];
        task.completed = !task.completed;
        let completed = task.completed;
        self.persist();
        Some(completed)
    }

    /// Remove the task with `id`. Returns it, or `None` for an unknown id.
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let Some(idx) = self.position(id) else {
            log::debug!("Remove ignored, no task {}", id);
            return None;
        };
        let task = self.tasks.remove(idx);
        self.persist();
        Some(task)
    }

    /// Map an exact id or unique id prefix to the full id
    pub fn resolve_id(&self, prefix: &str) -> Result<Option<&str>, StoreError> {
        if prefix.is_empty() {
            return Ok(None);
        }
        if let Some(task) = self.get(prefix) {
            return Ok(Some(task.id.as_str()));
        }
        let matches: Vec<&str> = self
            .tasks
            .iter()
            .filter(|t| t.id.starts_with(prefix))
            .map(|t| t.id.as_str())
            .collect();
        match matches.as_slice() {
            [] => Ok(None),
            [id] => Ok(Some(*id)),
            _ => Err(StoreError::AmbiguousId {
                prefix: prefix.to_string(),
                candidates: matches.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    /// Filtered view of the current list
    pub fn view(&self, filter: &FilterSpec) -> Vec<&Task> {
        derive_view(&self.tasks, filter)
    }

    /// Statistics over the full, unfiltered list
    pub fn statistics(&self) -> Statistics {
        derive_statistics(&self.tasks)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Write the full list back. Failures are logged, not returned.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.tasks) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize tasks: {}", e);
                return;
            }
        };
        if let Err(e) = KvRepo::set(&self.conn, TODOS_KEY, &json) {
            log::error!("Failed to persist tasks: {:#}", e);
        }
    }
}

/// Decode the persisted list, dropping records that break list invariants
fn decode_tasks(raw: &str) -> Vec<Task> {
    let tasks: Vec<Task> = match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(e) => {
            log::warn!("Stored task list is malformed, starting empty: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    tasks
        .into_iter()
        .filter(|task| {
            if task.title.trim().is_empty() {
                log::warn!("Dropping stored task {} with empty title", task.id);
                false
            } else if !seen.insert(task.id.clone()) {
                log::warn!("Dropping stored task with duplicate id {}", task.id);
                false
            } else {
                true
            }
        })
        .collect()
}
