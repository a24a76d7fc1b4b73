//! # Domain Model: the Catalogue
//!
//! A [`Catalogue`] is the immutable snapshot a filtering session works on:
//! the known [`Tag`]s, the [`Item`]s ("projects") and the header [`Link`]s.
//! It is assembled from raw records by [`Catalogue::from_records`], which is
//! where all load-time normalisation happens.
//!
//! ## Normalisation
//!
//! - Tags are deduplicated and sorted, see [`crate::tags::normalize_tags`].
//! - An item without an `id` uses its `name` as id.
//! - `technos` is accepted as an alias of `tags` on item records.
//! - Repeated tag references inside one item collapse to the first one.
//! - Items sharing an id keep the first one; later ones are dropped with a
//!   warning.
//! - Items keep the order they were loaded in. They are never re-sorted.
//!
//! ## Unknown Tags
//!
//! Items may reference tags the tag list does not contain. That is not an
//! error: such references never match a filter and render with the fallback
//! indicator. They are logged at debug level when the catalogue is built.

use crate::tags::{normalize_tags, Tag, TagRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// An item record as found in the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "technos")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: None,
            website: None,
            github: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Referenced tag ids, deduplicated, in record order.
    pub tag_ids: Vec<String>,
    pub image: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
}

impl Item {
    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tag_ids.iter().any(|t| t == tag_id)
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let mut seen = HashSet::new();
        let tag_ids = record
            .tags
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();

        Self {
            id: record.id.unwrap_or_else(|| record.name.clone()),
            name: record.name,
            description: record.description,
            tag_ids,
            image: record.image,
            website: record.website,
            github: record.github,
        }
    }
}

/// An external link shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalogue {
    tags: Vec<Tag>,
    items: Vec<Item>,
    links: Vec<Link>,
}

impl Catalogue {
    pub fn from_records(
        tags: Vec<TagRecord>,
        items: Vec<ItemRecord>,
        links: Vec<Link>,
    ) -> Self {
        let tags = normalize_tags(tags);

        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(items.len());
        for item in items.into_iter().map(Item::from) {
            if !seen.insert(item.id.clone()) {
                warn!(item = %item.id, name = %item.name, "duplicate item id ignored");
                continue;
            }
            unique.push(item);
        }
        let items = unique;

        let catalogue = Self { tags, items, links };
        for item in &catalogue.items {
            for tag_id in item.tag_ids.iter().filter(|t| !catalogue.has_tag(t)) {
                debug!(item = %item.id, tag = %tag_id, "item references an unknown tag");
            }
        }
        catalogue
    }

    /// Known tags, sorted case-insensitively.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Items in load order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn tag(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    pub fn has_tag(&self, id: &str) -> bool {
        self.tag(id).is_some()
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.items.is_empty()
    }
}
