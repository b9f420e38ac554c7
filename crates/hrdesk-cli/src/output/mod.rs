//! Console output
//!
//! Record listings render as a table or as JSON; status lines go to stdout,
//! errors to stderr in red.

use colored::Colorize;
use hrdesk_core::Notifier;
use serde::Serialize;
use std::fmt::Display;
use tabled::{Table, Tabled};

/// How listings are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    const NAMES: [(&'static str, OutputFormat); 2] =
        [("table", OutputFormat::Table), ("json", OutputFormat::Json)];
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, format)| *format)
            .ok_or_else(|| format!("Unknown output format '{}' (expected table or json)", s))
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = Self::NAMES
            .iter()
            .find(|(_, format)| format == self)
            .map(|(name, _)| *name)
            .unwrap_or_default();
        f.write_str(name)
    }
}

const EMPTY_LISTING: &str = "No records found.";

/// Text for `rows` in the requested format
fn render<T>(rows: &[T], format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize + Tabled,
{
    Ok(match format {
        OutputFormat::Table if rows.is_empty() => EMPTY_LISTING.to_string(),
        OutputFormat::Table => Table::new(rows).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
    })
}

pub fn print_output<T>(rows: &[T], format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
{
    println!("{}", render(rows, format)?);
    Ok(())
}

/// Print one record; JSON output is an object rather than a one-element list
pub fn print_single<T>(row: &T, format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
{
    let text = match format {
        OutputFormat::Table => render(std::slice::from_ref(row), format)?,
        OutputFormat::Json => serde_json::to_string_pretty(row)?,
    };
    println!("{}", text);
    Ok(())
}

pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message.green());
    }
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

pub fn print_info(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}

/// Shows service notifications as success lines on stdout
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str) {
        print_success(&format!("[{}] {}", title, message), self.quiet);
    }
}

/// Render an optional value as an empty cell when absent
pub fn display_opt<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
