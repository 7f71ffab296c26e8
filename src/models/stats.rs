use serde::Serialize;

/// Aggregate counters over the full task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    /// Percentage of completed tasks, rounded to the nearest integer
    pub completion_rate: u8,
}
