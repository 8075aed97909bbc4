// src/modules/timeline/application/filter.rs

use crate::modules::timeline::domain::{EntryKind, TimelineEntry};

/// Sentinel key meaning "no filter".
pub const ALL_KEY: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineFilter {
    All,
    Kind(EntryKind),
}

impl TimelineFilter {
    pub fn from_key(key: &str) -> Self {
        let key = key.trim();
        if key.is_empty() || key == ALL_KEY {
            TimelineFilter::All
        } else {
            TimelineFilter::Kind(EntryKind::from_tag(key))
        }
    }

    pub fn key(&self) -> &str {
        match self {
            TimelineFilter::All => ALL_KEY,
            TimelineFilter::Kind(kind) => kind.tag(),
        }
    }
}

/// Restricts `items` to the current filter. Total and synchronous: an
/// empty result is a renderable state, and the loader's sort order is
/// preserved as-is.
pub fn visible_set<'a>(
    items: &'a [TimelineEntry],
    filter: &TimelineFilter,
) -> Vec<&'a TimelineEntry> {
    match filter {
        TimelineFilter::All => items.iter().collect(),
        TimelineFilter::Kind(kind) => items.iter().filter(|item| &item.kind == kind).collect(),
    }
}
