//! Filter evaluation over an in-memory task list
//!
//! The derived view is a pure function of the task list and a
//! [`FilterSpec`]: no side effects, and survivors keep their source order.

use crate::models::{FilterSpec, Task};

/// Return the tasks matching every criterion of `filter`, in source order
pub fn derive_view<'a>(tasks: &'a [Task], filter: &FilterSpec) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}
