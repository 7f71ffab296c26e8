use thiserror::Error;

/// Errors returned by task store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Title was empty or whitespace only
    #[error("Title cannot be empty")]
    EmptyTitle,

    /// An id prefix matched more than one task
    #[error("Ambiguous task id '{prefix}'. Matches: {}", .candidates.join(", "))]
    AmbiguousId {
        prefix: String,
        candidates: Vec<String>,
    },
}
