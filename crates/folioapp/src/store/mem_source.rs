use super::source::DataSource;
use crate::error::{DataError, Resource, Result};
use crate::model::{ItemRecord, Link};
use crate::tags::TagRecord;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

/// In-memory data source.
///
/// Uses `RefCell` for interior mutability since folio is single-threaded,
/// so records can be swapped between loads while `DataSource` keeps `&self`.
#[derive(Default)]
pub struct MemSource {
    tags: RefCell<Vec<TagRecord>>,
    items: RefCell<Vec<ItemRecord>>,
    links: RefCell<Vec<Link>>,
    failing: RefCell<HashSet<Resource>>,
    fetches: Cell<usize>,
}

impl MemSource {
    pub fn new(tags: Vec<TagRecord>, items: Vec<ItemRecord>) -> Self {
        Self {
            tags: RefCell::new(tags),
            items: RefCell::new(items),
            ..Default::default()
        }
    }

    pub fn with_links(self, links: Vec<Link>) -> Self {
        *self.links.borrow_mut() = links;
        self
    }

    pub fn set_tags(&self, tags: Vec<TagRecord>) {
        *self.tags.borrow_mut() = tags;
    }

    pub fn set_items(&self, items: Vec<ItemRecord>) {
        *self.items.borrow_mut() = items;
    }

    /// Make fetches of `resource` fail, for testing error handling.
    pub fn set_failing(&self, resource: Resource, failing: bool) {
        let mut set = self.failing.borrow_mut();
        if failing {
            set.insert(resource);
        } else {
            set.remove(&resource);
        }
    }

    /// Number of fetch calls served, failed ones included.
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    fn check(&self, resource: Resource) -> Result<()> {
        self.fetches.set(self.fetches.get() + 1);
        if self.failing.borrow().contains(&resource) {
            return Err(DataError::Unavailable {
                resource,
                reason: "simulated fetch failure".to_string(),
            });
        }
        Ok(())
    }
}

impl DataSource for MemSource {
    fn fetch_tags(&self) -> Result<Vec<TagRecord>> {
        self.check(Resource::Tags)?;
        Ok(self.tags.borrow().clone())
    }

    fn fetch_items(&self) -> Result<Vec<ItemRecord>> {
        self.check(Resource::Items)?;
        Ok(self.items.borrow().clone())
    }

    fn fetch_links(&self) -> Result<Vec<Link>> {
        self.check(Resource::Links)?;
        Ok(self.links.borrow().clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
