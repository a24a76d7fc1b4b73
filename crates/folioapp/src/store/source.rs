use crate::error::Result;
use crate::model::{ItemRecord, Link};
use crate::tags::TagRecord;

/// Abstract interface for the external data source.
///
/// This trait handles the "how" of fetching (filesystem vs memory), while
/// [`CatalogueStore`](super::CatalogueStore) handles the "what": assembling
/// and owning the catalogue, all-or-nothing.
pub trait DataSource {
    /// Fetch the tag list, in source order.
    fn fetch_tags(&self) -> Result<Vec<TagRecord>>;

    /// Fetch the item list, in source order.
    fn fetch_items(&self) -> Result<Vec<ItemRecord>>;

    /// Fetch the header links.
    /// Sources without a links resource return an empty list.
    fn fetch_links(&self) -> Result<Vec<Link>> {
        Ok(Vec::new())
    }

    /// Human readable location, for logs.
    fn describe(&self) -> String;
}
