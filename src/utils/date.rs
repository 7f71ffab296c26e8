// Due date expressions and display formatting

use chrono::{Duration, Local, NaiveDate};
use anyhow::{bail, Result};

/// Parse a due date expression relative to `today`.
///
/// Accepts `YYYY-MM-DD`, `today`, `tomorrow`, `+Nd` and `+Nw`.
pub fn parse_due_date_from(expr: &str, today: NaiveDate) -> Result<NaiveDate> {
    let expr = expr.trim();

    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(date);
    }

    match expr.to_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    if let Some(date) = expr.strip_prefix('+').and_then(|offset| parse_offset(offset, today)) {
        return Ok(date);
    }

    bail!(
        "Invalid due date: '{}'. Use YYYY-MM-DD, today, tomorrow, +Nd or +Nw.",
        expr
    )
}

/// Forward offset such as `3d` or `2w`. The count is unsigned digits only.
fn parse_offset(offset: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (idx, unit) = offset.char_indices().last()?;
    let count = &offset[..idx];
    if count.is_empty() || !count.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let count: i64 = count.parse().ok()?;
    let days = match unit {
        'd' => count,
        'w' => count.checked_mul(7)?,
        _ => return None,
    };
    today.checked_add_signed(Duration::try_days(days)?)
}

/// Parse a due date expression relative to the local current date
pub fn parse_due_date(expr: &str) -> Result<NaiveDate> {
    parse_due_date_from(expr, Local::now().date_naive())
}

/// Human-readable due date, e.g. `Jan 05, 2026`
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}
