//! # Catalogue Store
//!
//! The store owns the loaded [`Catalogue`] for the lifetime of a session.
//! It is filled from a [`DataSource`], the opaque collaborator that knows
//! where tags, items and links live.
//!
//! ## Loading Rules
//!
//! - Tags, items and links are fetched on every [`CatalogueStore::load`].
//! - Loading is **all-or-nothing**: if any fetch or parse fails the store is
//!   left empty and the error is returned. Partial catalogues are never
//!   exposed.
//! - No retry happens here. Whether and when to retry is the caller's call.
//! - `load` can be called again at any time; it re-fetches and fully
//!   replaces the previous catalogue.
//!
//! ## Implementations
//!
//! - [`fs_source::FsSource`]: JSON files in a data directory.
//! - [`mem_source::MemSource`]: in-memory records, for tests and embedding.
//!
//! ## Data Layout
//!
//! ```text
//! data/
//! ├── technos.json    # [{ "name": "Rust", "icon": "rust.svg" }, ...]
//! ├── projects.json   # [{ "name": "...", "description": "...", "technos": [...] }, ...]
//! ├── links.json      # optional: [{ "href": "...", "title": "...", "icon": "..." }]
//! └── folio.toml      # optional configuration
//! ```

use crate::error::Result;
use crate::model::{Catalogue, ItemRecord, Link};
use crate::tags::TagRecord;
use std::rc::Rc;
use tracing::{debug, warn};

pub mod fs_source;
pub mod mem_source;
pub mod source;

pub use source::DataSource;

pub struct CatalogueStore<S: DataSource> {
    source: S,
    catalogue: Option<Rc<Catalogue>>,
}

impl<S: DataSource> CatalogueStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalogue: None,
        }
    }

    /// Fetch everything from the source and replace the current catalogue.
    pub fn load(&mut self) -> Result<Rc<Catalogue>> {
        self.catalogue = None;

        let (tags, items, links) = match self.fetch_all() {
            Ok(records) => records,
            Err(e) => {
                warn!(source = %self.source.describe(), error = %e, "catalogue load failed");
                return Err(e);
            }
        };

        let catalogue = Rc::new(Catalogue::from_records(tags, items, links));
        debug!(
            source = %self.source.describe(),
            tags = catalogue.tags().len(),
            items = catalogue.items().len(),
            links = catalogue.links().len(),
            "catalogue loaded"
        );
        self.catalogue = Some(Rc::clone(&catalogue));
        Ok(catalogue)
    }

    fn fetch_all(&self) -> Result<(Vec<TagRecord>, Vec<ItemRecord>, Vec<Link>)> {
        let tags = self.source.fetch_tags()?;
        let items = self.source.fetch_items()?;
        let links = self.source.fetch_links()?;
        Ok((tags, items, links))
    }

    /// The last successfully loaded catalogue, if the last load succeeded.
    pub fn catalogue(&self) -> Option<&Rc<Catalogue>> {
        self.catalogue.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.catalogue.is_some()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
