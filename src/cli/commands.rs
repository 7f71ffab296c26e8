use clap::{Parser, Subcommand};
use crate::db::{Config, DbConnection};
use crate::models::{Category, Priority, Task, TaskDraft, TaskPatch};
use crate::store::TaskStore;
use crate::cli::output::{
    format_empty_view, format_statistics, format_task_list_table, format_task_summary,
    TaskListOptions,
};
use crate::cli::error::{parse_category_arg, parse_priority_arg, user_error};
use crate::filter::parse_filter;
use crate::utils::parse_due_date;
use anyhow::{Context, Result};

const SUBCOMMANDS: &[&str] = &["add", "list", "show", "edit", "toggle", "delete", "stats", "help"];

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "A small to-do list for the command line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: Vec<String>,
        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
        /// Priority: low, medium (default), high
        #[arg(short, long, value_parser = parse_priority_arg)]
        priority: Option<Priority>,
        /// Category: personal (default), work, shopping, health, other
        #[arg(short, long, value_parser = parse_category_arg)]
        category: Option<Category>,
        /// Due date (YYYY-MM-DD, today, tomorrow, +3d, +2w)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks
    #[command(visible_alias = "ls")]
    List {
        /// Filter arguments (e.g., "milk category:shopping status:active")
        filter: Vec<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show a task in detail
    Show {
        /// Task ID or unique ID prefix
        id: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Edit a task
    #[command(visible_alias = "modify")]
    Edit {
        /// Task ID or unique ID prefix
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description (an empty value clears it)
        #[arg(short, long, conflicts_with = "clear_description")]
        description: Option<String>,
        /// Remove the description
        #[arg(long)]
        clear_description: bool,
        /// New priority
        #[arg(short, long, value_parser = parse_priority_arg)]
        priority: Option<Priority>,
        /// New category
        #[arg(short, long, value_parser = parse_category_arg)]
        category: Option<Category>,
        /// New due date, or "none" to clear it
        #[arg(long)]
        due: Option<String>,
    },
    /// Toggle a task between active and completed
    #[command(visible_alias = "done")]
    Toggle {
        /// Task ID or unique ID prefix
        id: String,
    },
    /// Delete a task
    #[command(visible_alias = "rm")]
    Delete {
        /// Task ID or unique ID prefix
        id: String,
    },
    /// Show task statistics
    Stats {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = expand_implicit_command(args);

    let clap_args = std::iter::once("taskpad".to_string()).chain(args);
    let cli = match Cli::try_parse_from(clap_args) {
        Ok(cli) => cli,
        Err(e) => {
            if e.use_stderr() {
                e.print()?;
                std::process::exit(1);
            }
            // --help and --version
            e.exit();
        }
    };

    handle_command(cli)
}

/// Implicit defaults: no arguments lists tasks, a lone id shows it
fn expand_implicit_command(mut args: Vec<String>) -> Vec<String> {
    match args.first() {
        None => vec!["list".to_string()],
        Some(first) if args.len() == 1 && !first.starts_with('-') && !is_subcommand(first) => {
            args.insert(0, "show".to_string());
            args
        }
        _ => args,
    }
}

fn is_subcommand(token: &str) -> bool {
    SUBCOMMANDS.contains(&token) || matches!(token, "ls" | "modify" | "done" | "rm")
}

fn handle_command(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let conn = DbConnection::connect(&config)?;
    let mut store = TaskStore::open(conn).context("Failed to load tasks")?;
    let options = TaskListOptions::from_config(&config);

    match cli.command {
        Commands::Add { title, description, priority, category, due } => {
            handle_add(&mut store, title, description, priority, category, due)
        }
        Commands::List { filter, json } => handle_list(&store, filter, json, &options),
        Commands::Show { id, json } => handle_show(&store, &id, json, &options),
        Commands::Edit { id, title, description, clear_description, priority, category, due } => {
            let description = if clear_description {
                Some(None)
            } else {
                description.map(|d| if d.trim().is_empty() { None } else { Some(d) })
            };
            let due_date = due.map(|expr| parse_due_arg(&expr, true));
            let patch = TaskPatch { title, description, priority, category, due_date };
            handle_edit(&mut store, &id, patch)
        }
        Commands::Toggle { id } => handle_toggle(&mut store, &id),
        Commands::Delete { id } => handle_delete(&mut store, &id),
        Commands::Stats { json } => handle_stats(&store, json),
    }
}

/// Parse a due date argument. `none` clears the date when `allow_none` is set.
fn parse_due_arg(expr: &str, allow_none: bool) -> Option<chrono::NaiveDate> {
    if allow_none && expr.eq_ignore_ascii_case("none") {
        return None;
    }
    match parse_due_date(expr) {
        Ok(date) => Some(date),
        Err(e) => user_error(&e.to_string()),
    }
}

/// Resolve a user-supplied id or prefix, exiting with a user error if it matches nothing
fn resolve_task_id(store: &TaskStore, id: &str) -> String {
    match store.resolve_id(id) {
        Ok(Some(full)) => full.to_string(),
        Ok(None) => user_error(&format!("Task {} not found", id)),
        Err(e) => user_error(&e.to_string()),
    }
}

fn handle_add(
    store: &mut TaskStore,
    title: Vec<String>,
    description: Option<String>,
    priority: Option<Priority>,
    category: Option<Category>,
    due: Option<String>,
) -> Result<()> {
    let draft = TaskDraft {
        title: title.join(" "),
        description: description.filter(|d| !d.trim().is_empty()),
        priority,
        category,
        due_date: due.and_then(|expr| parse_due_arg(&expr, false)),
    };

    match store.create(draft) {
        Ok(task) => {
            println!("Created task {}: {}", task.short_id(), task.title);
            Ok(())
        }
        Err(e) => user_error(&e.to_string()),
    }
}

fn handle_list(
    store: &TaskStore,
    filter_args: Vec<String>,
    json: bool,
    options: &TaskListOptions,
) -> Result<()> {
    let filter = parse_filter(filter_args).unwrap_or_else(|e| user_error(&e));
    let view = store.view(&filter);
    let stats = store.statistics();

    if json {
        let output = serde_json::json!({
            "tasks": view,
            "statistics": stats,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if view.is_empty() {
        print!("{}", format_empty_view(filter.has_active_filters()));
    } else {
        print!("{}", format_task_list_table(&view, options));
    }
    println!();
    print!("{}", format_statistics(&stats));
    Ok(())
}

fn handle_show(store: &TaskStore, id: &str, json: bool, options: &TaskListOptions) -> Result<()> {
    let id = resolve_task_id(store, id);
    let Some(task) = store.get(&id) else {
        user_error(&format!("Task {} not found", id));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(task)?);
    } else {
        print!("{}", format_task_summary(task, options));
    }
    Ok(())
}

fn handle_edit(store: &mut TaskStore, id: &str, patch: TaskPatch) -> Result<()> {
    if patch.is_empty() {
        user_error("Nothing to change. Use --title, --description, --priority, --category or --due.");
    }
    let id = resolve_task_id(store, id);

    match store.update(&id, patch) {
        Ok(Some(task)) => {
            println!("Modified task {}: {}", task.short_id(), task.title);
            Ok(())
        }
        Ok(None) => user_error(&format!("Task {} not found", id)),
        Err(e) => user_error(&e.to_string()),
    }
}

fn handle_toggle(store: &mut TaskStore, id: &str) -> Result<()> {
    let id = resolve_task_id(store, id);

    match store.toggle_completion(&id) {
        Some(completed) => {
            let task = store.get(&id).map(describe).unwrap_or_default();
            let verb = if completed { "Completed" } else { "Reopened" };
            println!("{} task {}", verb, task);
            Ok(())
        }
        None => user_error(&format!("Task {} not found", id)),
    }
}

fn handle_delete(store: &mut TaskStore, id: &str) -> Result<()> {
    let id = resolve_task_id(store, id);

    match store.remove(&id) {
        Some(task) => {
            println!("Deleted task {}", describe(&task));
            Ok(())
        }
        None => user_error(&format!("Task {} not found", id)),
    }
}

fn handle_stats(store: &TaskStore, json: bool) -> Result<()> {
    let stats = store.statistics();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", format_statistics(&stats));
    }
    Ok(())
}

fn describe(task: &Task) -> String {
    format!("{}: {}", task.short_id(), task.title)
}
