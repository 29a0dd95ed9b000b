use super::OutputFormatter;
use anyhow::Result;
use colored::*;
use gametag_core::Entry;

/// Separator used when a tag list is flattened into one column
const TAG_SEPARATOR: &str = ";";

/// Text formatter for human-readable output
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_entry(&self, entry: &Entry) -> Result<String> {
        let title = entry.title.as_deref().unwrap_or(&entry.id);
        let mut output = format!(
            "{} ({})",
            self.colorize(title, |s| s.bold()),
            self.colorize(&entry.id, |s| s.dimmed())
        );

        if let Some(hours) = entry.playtime_hours {
            output.push_str(&format!("  {hours:.1}h"));
        }

        match &entry.tags {
            Some(tags) if tags.is_empty() => {
                output.push_str(&format!("  {}", self.colorize("(no tags)", |s| s.yellow())));
            }
            Some(tags) => {
                output.push_str(&format!("  {}", self.colorize(&tags.join(", "), |s| s.cyan())));
            }
            None => {}
        }

        Ok(output)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_entry(&self, entry: &Entry) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(entry)?)
        } else {
            Ok(serde_json::to_string(entry)?)
        }
    }

    fn format_catalog(&self, entries: &[Entry]) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(entries)?)
        } else {
            Ok(serde_json::to_string(entries)?)
        }
    }
}

/// JSON Lines formatter, one entry per line
pub struct JsonLinesFormatter;

impl Default for JsonLinesFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonLinesFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonLinesFormatter {
    fn format_entry(&self, entry: &Entry) -> Result<String> {
        JsonFormatter::new(false).format_entry(entry)
    }
}

/// CSV formatter for tabular output
pub struct CsvFormatter;

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn headers() -> [&'static str; 4] {
        ["id", "title", "playtime_hours", "tags"]
    }

    fn entry_to_record(entry: &Entry) -> [String; 4] {
        [
            entry.id.clone(),
            entry.title.clone().unwrap_or_default(),
            entry
                .playtime_hours
                .map(|h| h.to_string())
                .unwrap_or_default(),
            entry
                .tags
                .as_ref()
                .map(|tags| tags.join(TAG_SEPARATOR))
                .unwrap_or_default(),
        ]
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_entry(&self, entry: &Entry) -> Result<String> {
        self.format_catalog(std::slice::from_ref(entry))
    }

    fn format_catalog(&self, entries: &[Entry]) -> Result<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(Self::headers())?;

        for entry in entries {
            wtr.write_record(Self::entry_to_record(entry))?;
        }

        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?.trim_end().to_string())
    }
}
