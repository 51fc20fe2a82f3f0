// Output formatting for the pubsub-gapic CLI
use colored::*;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON format
    Json,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Render a single resource: a one-row table or a JSON object.
pub fn render_resource<T>(resource: &T, format: OutputFormat) -> anyhow::Result<String>
where
    T: Tabled + Serialize,
{
    Ok(match format {
        OutputFormat::Table => Table::new(std::iter::once(resource)).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(resource)?,
    })
}

/// Render a listing. An empty table is replaced by `empty`; JSON output
/// stays an array so it can be piped.
pub fn render_listing<T>(rows: &[T], format: OutputFormat, empty: &str) -> anyhow::Result<String>
where
    T: Tabled + Serialize,
{
    Ok(match format {
        OutputFormat::Table if rows.is_empty() => empty.yellow().to_string(),
        OutputFormat::Table => Table::new(rows).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
    })
}

/// Print a single resource
pub fn print_resource<T>(resource: &T, format: OutputFormat) -> anyhow::Result<()>
where
    T: Tabled + Serialize,
{
    println!("{}", render_resource(resource, format)?);
    Ok(())
}

/// Print a listing
pub fn print_listing<T>(rows: &[T], format: OutputFormat, empty: &str) -> anyhow::Result<()>
where
    T: Tabled + Serialize,
{
    println!("{}", render_listing(rows, format, empty)?);
    Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
