//! Taskpad - a small to-do list for the command line
//!
//! This library provides the core functionality for Taskpad, including:
//! - A task store with write-through persistence to a SQLite key-value table
//! - Data models for tasks, filters and statistics
//! - Derived views: filtered task lists and aggregate counters
//! - CLI command parsing and execution
//! - Due date parsing and formatting
//!
//! # Example
//!
//! ```no_run
//! use taskpad::db::DbConnection;
//! use taskpad::models::{FilterSpec, TaskDraft};
//! use taskpad::store::TaskStore;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut store = TaskStore::open(DbConnection::connect_in_memory()?)?;
//!     store.create(TaskDraft::new("Buy milk"))?;
//!     let view = store.view(&FilterSpec::default());
//!     println!("{} task(s), {}% done", view.len(), store.statistics().completion_rate);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod models;
pub mod repo;
pub mod store;
pub mod cli;
pub mod utils;
pub mod filter;
pub mod stats;
