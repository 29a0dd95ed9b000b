mod formatters;

pub use formatters::{CsvFormatter, JsonFormatter, JsonLinesFormatter, TextFormatter};

use anyhow::Result;
use gametag_core::Entry;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    JsonLines,
    Csv,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-lines" | "jsonl" => Ok(Self::JsonLines),
            "csv" => Ok(Self::Csv),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }
}

/// Trait for catalog formatters
pub trait OutputFormatter: Send + Sync {
    /// Format a single entry
    fn format_entry(&self, entry: &Entry) -> Result<String>;

    /// Format a whole catalog
    fn format_catalog(&self, entries: &[Entry]) -> Result<String> {
        let formatted: Result<Vec<String>> =
            entries.iter().map(|e| self.format_entry(e)).collect();

        Ok(formatted?.join("\n"))
    }
}

/// Create a formatter based on output format
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::JsonLines => Box::new(JsonLinesFormatter::new()),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}
