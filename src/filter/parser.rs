//! Filter parser for list queries
//!
//! Turns CLI filter arguments into a [`FilterSpec`].
//!
//! # Grammar
//!
//! ```text
//! filter := token*
//! token  := category:<name|all> | priority:<level|all> | status:<all|active|completed> | word
//! ```
//!
//! `=` is accepted in place of `:`. `cat` and `pri` are short forms of the
//! keys. Every plain word is appended to the search text, so
//! `buy milk status:active` searches for "buy milk" among active tasks.
//!
//! Later tokens for the same key win.

use crate::models::{Category, FilterSpec, Priority, StatusFilter};

/// Parse filter tokens into a FilterSpec
///
/// # Example
///
/// ```
/// use taskpad::filter::parse_filter;
///
/// let spec = parse_filter(vec!["milk".to_string(), "status:active".to_string()]).unwrap();
/// assert_eq!(spec.search, "milk");
/// ```
pub fn parse_filter(tokens: Vec<String>) -> Result<FilterSpec, String> {
    let mut spec = FilterSpec::default();
    let mut words: Vec<String> = Vec::new();

    for token in tokens {
        match split_key_value(&token) {
            Some((key, value)) => match key.as_str() {
                "category" | "cat" => {
                    spec.category = parse_wildcard(value, Category::from_str)
                        .ok_or_else(|| invalid_value("category", value, &category_names()))?;
                }
                "priority" | "pri" => {
                    spec.priority = parse_wildcard(value, Priority::from_str)
                        .ok_or_else(|| invalid_value("priority", value, &priority_names()))?;
                }
                "status" => {
                    spec.status = StatusFilter::from_str(value).ok_or_else(|| {
                        invalid_value("status", value, &["all", "active", "completed"])
                    })?;
                }
                _ => words.push(token.clone()),
            },
            None => words.push(token),
        }
    }

    spec.search = words.join(" ").trim().to_string();
    Ok(spec)
}

/// Split `key:value` or `key=value`. The key is lowercased.
fn split_key_value(token: &str) -> Option<(String, &str)> {
    let idx = token.find(|c| c == ':' || c == '=')?;
    let (key, rest) = token.split_at(idx);
    if key.is_empty() {
        return None;
    }
    Some((key.to_lowercase(), &rest[1..]))
}

/// `Some(None)` for the "all" wildcard, `Some(Some(v))` for a value, `None` if invalid
fn parse_wildcard<T>(value: &str, parse: fn(&str) -> Option<T>) -> Option<Option<T>> {
    if value.eq_ignore_ascii_case("all") {
        Some(None)
    } else {
        parse(value).map(Some)
    }
}

fn category_names() -> Vec<&'static str> {
    std::iter::once("all")
        .chain(Category::ALL.iter().map(|c| c.as_str()))
        .collect()
}

fn priority_names() -> Vec<&'static str> {
    std::iter::once("all")
        .chain(Priority::ALL.iter().map(|p| p.as_str()))
        .collect()
}

fn invalid_value(field: &str, value: &str, expected: &[&str]) -> String {
    format!(
        "Invalid {} '{}'. Expected one of: {}",
        field,
        value,
        expected.join(", ")
    )
}
