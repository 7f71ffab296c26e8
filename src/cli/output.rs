// Output formatting utilities

use crate::db::{ColorMode, Config};
use crate::models::{Category, Priority, Statistics, Task};
use crate::utils::format_due_date;
use chrono::{Local, NaiveDate};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_DIM: &str = "\x1b[2m";
const ANSI_RESET: &str = "\x1b[0m";

const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_BLUE: &str = "\x1b[34m";
const ANSI_FG_MAGENTA: &str = "\x1b[35m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";
const ANSI_FG_BRIGHT_MAGENTA: &str = "\x1b[95m";

const ID_WIDTH: usize = 8;
const DONE_WIDTH: usize = 3;
const CATEGORY_WIDTH: usize = 8;
const PRIORITY_WIDTH: usize = 8;
const DUE_WIDTH: usize = 12;
const MIN_TITLE_WIDTH: usize = 10;
const DEFAULT_WIDTH: usize = 80;

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => ANSI_FG_GREEN,
        Priority::Medium => ANSI_FG_YELLOW,
        Priority::High => ANSI_FG_RED,
    }
}

fn category_color(category: Category) -> &'static str {
    match category {
        Category::Personal => ANSI_FG_MAGENTA,
        Category::Work => ANSI_FG_BLUE,
        Category::Shopping => ANSI_FG_BRIGHT_MAGENTA,
        Category::Health => ANSI_FG_GREEN,
        Category::Other => ANSI_FG_BRIGHT_BLACK,
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate, with fallback to the COLUMNS
/// environment variable and a default of 80.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    DEFAULT_WIDTH
}

#[derive(Debug, Clone)]
pub struct TaskListOptions {
    pub color: bool,
    pub width: usize,
    /// Reference date for overdue highlighting
    pub today: NaiveDate,
}

impl TaskListOptions {
    pub fn from_config(config: &Config) -> Self {
        let color = match config.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_tty(),
        };
        Self {
            color,
            width: get_terminal_width(),
            today: Local::now().date_naive(),
        }
    }
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", code, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Truncate to `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

fn title_width(tasks: &[&Task], total_width: usize) -> usize {
    let fixed = ID_WIDTH + DONE_WIDTH + CATEGORY_WIDTH + PRIORITY_WIDTH + DUE_WIDTH + 5;
    let available = total_width.saturating_sub(fixed).max(MIN_TITLE_WIDTH);
    let longest = tasks
        .iter()
        .map(|t| t.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Title".len());
    longest.min(available)
}

/// Format the derived view as a table
pub fn format_task_list_table(tasks: &[&Task], options: &TaskListOptions) -> String {
    let title_w = title_width(tasks, options.width);
    let mut output = String::new();

    let header = format!(
        "{} {} {} {} {} {}",
        pad("ID", ID_WIDTH),
        pad("", DONE_WIDTH),
        pad("Title", title_w),
        pad("Category", CATEGORY_WIDTH),
        pad("Priority", PRIORITY_WIDTH),
        "Due"
    );
    output.push_str(&paint(header.trim_end(), ANSI_BOLD, options.color));
    output.push('\n');

    for task in tasks {
        let done = if task.completed { "[x]" } else { "[ ]" };
        let title = pad(&truncate(&task.title, title_w), title_w);
        let title = if task.completed {
            paint(&title, ANSI_DIM, options.color)
        } else {
            title
        };
        let category = paint(
            &pad(task.category.as_str(), CATEGORY_WIDTH),
            category_color(task.category),
            options.color,
        );
        let priority = paint(
            &pad(task.priority.as_str(), PRIORITY_WIDTH),
            priority_color(task.priority),
            options.color,
        );
        let due = match task.due_date {
            Some(date) if task.is_overdue(options.today) => {
                paint(&format_due_date(date), ANSI_FG_RED, options.color)
            }
            Some(date) => format_due_date(date),
            None => String::new(),
        };

        let line = format!(
            "{} {} {} {} {} {}",
            pad(task.short_id(), ID_WIDTH),
            done,
            title,
            category,
            priority,
            due
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}

/// Message shown when the derived view is empty
pub fn format_empty_view(has_active_filters: bool) -> String {
    if has_active_filters {
        "No tasks match your filters. Try adjusting your filters.\n".to_string()
    } else {
        "No tasks yet. Create your first task with 'taskpad add <title>'.\n".to_string()
    }
}

/// One-line statistics summary
pub fn format_statistics(stats: &Statistics) -> String {
    format!(
        "Total: {}  Active: {}  Completed: {}  Completion: {}%\n",
        stats.total, stats.active, stats.completed, stats.completion_rate
    )
}

/// Detailed view of a single task
pub fn format_task_summary(task: &Task, options: &TaskListOptions) -> String {
    let mut output = String::new();

    let header = format!("Task {}: {}", task.short_id(), task.title);
    output.push_str(&paint(&header, ANSI_BOLD, options.color));
    output.push('\n');
    output.push_str(&"=".repeat(header.chars().count().max(40)));
    output.push_str("\n\n");

    if let Some(description) = &task.description {
        output.push_str("Description:\n");
        output.push_str(&format!("  {}\n\n", description));
    }

    output.push_str(&format!("  ID:        {}\n", task.id));
    output.push_str(&format!(
        "  Status:    {}\n",
        if task.completed { "completed" } else { "active" }
    ));
    output.push_str(&format!(
        "  Priority:  {}\n",
        paint(task.priority.as_str(), priority_color(task.priority), options.color)
    ));
    output.push_str(&format!(
        "  Category:  {}\n",
        paint(task.category.as_str(), category_color(task.category), options.color)
    ));
    match task.due_date {
        Some(date) if task.is_overdue(options.today) => {
            let due = format!("{} (overdue)", format_due_date(date));
            output.push_str(&format!("  Due:       {}\n", paint(&due, ANSI_FG_RED, options.color)));
        }
        Some(date) => output.push_str(&format!("  Due:       {}\n", format_due_date(date))),
        None => output.push_str("  Due:       (none)\n"),
    }
    output.push_str(&format!(
        "  Created:   {}\n",
        task.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
    ));

    output
}
