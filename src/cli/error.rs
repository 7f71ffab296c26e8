// Error handling utilities for consistent error messages and exit codes

use crate::models::{Category, Priority};
use std::process;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, unknown tasks, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Parse a priority argument (clap value parser)
pub fn parse_priority_arg(value: &str) -> Result<Priority, String> {
    Priority::from_str(value).ok_or_else(|| {
        format!(
            "Invalid priority '{}'. Expected one of: low, medium, high",
            value
        )
    })
}

/// Parse a category argument (clap value parser)
pub fn parse_category_arg(value: &str) -> Result<Category, String> {
    Category::from_str(value).ok_or_else(|| {
        format!(
            "Invalid category '{}'. Expected one of: personal, work, shopping, health, other",
            value
        )
    })
}
