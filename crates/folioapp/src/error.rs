use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The resources a catalogue is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Tags,
    Items,
    Links,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Tags => "tags",
            Resource::Items => "items",
            Resource::Links => "links",
        };
        f.write_str(name)
    }
}

/// Catalogue load failure. Fatal to view construction: a caller receiving
/// one must not wire up any interaction.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read {resource} data: {source}")]
    Io {
        resource: Resource,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {resource} data: {source}")]
    Parse {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    #[error("{resource} data unavailable: {reason}")]
    Unavailable { resource: Resource, reason: String },
}

impl DataError {
    /// The resource whose fetch failed.
    pub fn resource(&self) -> Resource {
        match self {
            DataError::Io { resource, .. }
            | DataError::Parse { resource, .. }
            | DataError::Unavailable { resource, .. } => *resource,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Load(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
