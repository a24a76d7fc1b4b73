use super::source::DataSource;
use crate::config::FolioConfig;
use crate::error::{DataError, Resource, Result};
use crate::model::{ItemRecord, Link};
use crate::tags::TagRecord;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_TAGS_FILE: &str = "technos.json";
pub const DEFAULT_ITEMS_FILE: &str = "projects.json";
pub const DEFAULT_LINKS_FILE: &str = "links.json";

/// Reads the catalogue from JSON files in a data directory.
///
/// The tags and items files are required. The links file is optional: when
/// it does not exist the catalogue simply has no links, but a links file
/// that exists and cannot be read or parsed fails the whole load.
pub struct FsSource {
    root: PathBuf,
    tags_file: String,
    items_file: String,
    links_file: String,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            tags_file: DEFAULT_TAGS_FILE.to_string(),
            items_file: DEFAULT_ITEMS_FILE.to_string(),
            links_file: DEFAULT_LINKS_FILE.to_string(),
        }
    }

    pub fn from_config(config: &FolioConfig) -> Self {
        Self::new(config.data_dir.clone())
            .with_tags_file(&config.tags_file)
            .with_items_file(&config.items_file)
            .with_links_file(&config.links_file)
    }

    pub fn with_tags_file(mut self, name: &str) -> Self {
        self.tags_file = name.to_string();
        self
    }

    pub fn with_items_file(mut self, name: &str) -> Self {
        self.items_file = name.to_string();
        self
    }

    pub fn with_links_file(mut self, name: &str) -> Self {
        self.links_file = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, resource: Resource) -> PathBuf {
        let name = match resource {
            Resource::Tags => &self.tags_file,
            Resource::Items => &self.items_file,
            Resource::Links => &self.links_file,
        };
        self.root.join(name)
    }

    fn read_json<T: DeserializeOwned>(&self, resource: Resource) -> Result<T> {
        let path = self.path_for(resource);
        debug!(resource = %resource, path = %path.display(), "reading data file");
        let content =
            fs::read_to_string(&path).map_err(|source| DataError::Io { resource, source })?;
        serde_json::from_str(&content).map_err(|source| DataError::Parse { resource, source })
    }
}

impl DataSource for FsSource {
    fn fetch_tags(&self) -> Result<Vec<TagRecord>> {
        self.read_json(Resource::Tags)
    }

    fn fetch_items(&self) -> Result<Vec<ItemRecord>> {
        self.read_json(Resource::Items)
    }

    fn fetch_links(&self) -> Result<Vec<Link>> {
        if !self.path_for(Resource::Links).exists() {
            debug!("no links file, continuing without links");
            return Ok(Vec::new());
        }
        self.read_json(Resource::Links)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
