//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print one ranked repository entry.
pub fn repo_entry(
    rank: usize,
    name: &str,
    url: &str,
    description: Option<&str>,
    language: Option<&str>,
    hotness: f64,
) {
    let language = language.unwrap_or("-");
    println!(
        "{:>3}. {} {} {}",
        rank,
        name.bold(),
        format!("[{}]", language).dimmed(),
        format!("{:.4}", hotness).yellow(),
    );
    println!("     {}", url.blue());
    if let Some(description) = description {
        println!("     {}", description);
    }
}
