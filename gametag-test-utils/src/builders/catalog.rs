//! Catalog builders

use gametag_core::Entry;

/// Builder for catalogs of entries
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<Entry>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with a playtime priority
    pub fn game(mut self, id: &str, playtime_hours: f64) -> Self {
        self.entries
            .push(Entry::new(id).with_title(format!("Game {id}")).with_playtime(playtime_hours));
        self
    }

    /// Add an entry with no priority signal
    pub fn unplayed(mut self, id: &str) -> Self {
        self.entries.push(Entry::new(id).with_title(format!("Game {id}")));
        self
    }

    /// Add an entry that already carries tags
    pub fn tagged(mut self, id: &str, playtime_hours: f64, tags: &[&str]) -> Self {
        self.entries.push(
            Entry::new(id)
                .with_playtime(playtime_hours)
                .with_tags(tags.iter().copied()),
        );
        self
    }

    /// Add an arbitrary entry
    pub fn entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Vec<Entry> {
        self.entries
    }
}

/// `count` entries `entry_1..entry_<count>` with priorities `count..1`
pub fn ranked_catalog(count: usize) -> Vec<Entry> {
    (1..=count)
        .map(|n| {
            Entry::new(format!("entry_{n}"))
                .with_title(format!("Game {n}"))
                .with_playtime((count + 1 - n) as f64)
        })
        .collect()
}
