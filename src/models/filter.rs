use crate::models::{Category, Priority, Task};

/// Completion status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(StatusFilter::All),
            "active" | "open" | "pending" => Some(StatusFilter::Active),
            "completed" | "done" => Some(StatusFilter::Completed),
            _ => None,
        }
    }

    pub fn matches(&self, completed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !completed,
            StatusFilter::Completed => completed,
        }
    }
}

/// Filter specification for the derived view.
///
/// `category` and `priority` use `None` for the "all" wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub search: String,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub status: StatusFilter,
}

impl FilterSpec {
    /// Back to defaults: empty search, every wildcard at "all"
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self.category.is_some()
            || self.priority.is_some()
            || self.status != StatusFilter::All
    }

    /// True when every criterion holds for `task`
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.category.map_or(true, |c| c == task.category)
            && self.priority.map_or(true, |p| p == task.priority)
            && self.status.matches(task.completed)
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task
                .description
                .as_deref()
                .map_or(false, |d| d.to_lowercase().contains(&needle))
    }
}
