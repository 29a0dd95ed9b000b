//! Catalog data types shared by the store, provider and orchestrator

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered list of descriptive tags for one entry
///
/// An empty list means the entry was looked up and the provider had nothing
/// to report, which is different from never having been looked up.
pub type TagList = Vec<String>;

/// A single catalog entry ("game")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque identifier, e.g. a Steam app id
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Priority signal used to pick enrichment candidates
    #[serde(
        default,
        alias = "playtimeHours",
        skip_serializing_if = "Option::is_none"
    )]
    pub playtime_hours: Option<f64>,

    /// Output slot filled by enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagList>,

    /// Fields this crate does not interpret, carried through as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    /// Create an entry with only an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            playtime_hours: None,
            tags: None,
            extra: Map::new(),
        }
    }

    /// Set the display title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the playtime priority signal
    pub fn with_playtime(mut self, hours: f64) -> Self {
        self.playtime_hours = Some(hours);
        self
    }

    /// Set the tag slot
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Priority used for candidate selection; absent or NaN counts as zero
    pub fn priority(&self) -> f64 {
        match self.playtime_hours {
            Some(hours) if !hours.is_nan() => hours,
            _ => 0.0,
        }
    }
}

/// Tags resolved for one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResult {
    pub id: String,
    pub tags: TagList,
}

impl TagResult {
    pub fn new(id: impl Into<String>, tags: TagList) -> Self {
        Self {
            id: id.into(),
            tags,
        }
    }
}
