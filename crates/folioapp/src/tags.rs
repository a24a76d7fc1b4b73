//! Tag support for folio.
//!
//! Tags ("technologies") are the facets projects are filtered by. The tag
//! list is loaded once per session together with the items and is never
//! mutated afterwards: selection lives in
//! [`SelectionState`](crate::selection::SelectionState), not on the records.
//!
//! ## Identity
//!
//! A tag is identified by its name, compared case-sensitively. `Rust` and
//! `rust` are two different tags.
//!
//! ## Ordering
//!
//! Every tag listing is sorted case-insensitively by name, see
//! [`compare_names`]. Names that only differ by case fall back to a
//! case-sensitive comparison so the order stays total and stable.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::warn;

/// A tag record as found in the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    #[serde(alias = "id")]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl TagRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A known tag in a loaded catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: String,
    pub icon: Option<String>,
}

impl From<TagRecord> for Tag {
    fn from(record: TagRecord) -> Self {
        Self {
            id: record.name,
            icon: record.icon,
        }
    }
}

/// Case-insensitive name ordering used for every tag listing.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Turns raw records into the catalogue's tag list.
///
/// Duplicate names keep the first record. The result is sorted with
/// [`compare_names`].
pub fn normalize_tags(records: Vec<TagRecord>) -> Vec<Tag> {
    let mut seen = HashSet::new();
    let mut tags: Vec<Tag> = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.name.clone()) {
            warn!(tag = %record.name, "duplicate tag record ignored");
            continue;
        }
        tags.push(record.into());
    }

    tags.sort_by(|a, b| compare_names(&a.id, &b.id));
    tags
}
