//! # Configuration
//!
//! Folio configuration is managed by [`confique`], which handles layered
//! loading from TOML files and environment variables.
//!
//! ## Resolution Order
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `FOLIO_DATA_DIR`.
//! 2. **Local Config**: `folio.toml` in the directory folio was pointed at.
//! 3. **User Config**: `folio.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Command-line flags are applied by the CLI on top of the loaded value.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | `data` | Directory holding the JSON data files |
//! | `tags_file` | `technos.json` | Tag list file name |
//! | `items_file` | `projects.json` | Item list file name |
//! | `links_file` | `links.json` | Optional header links file name |
//! | `master_policy` | `derived` | `derived` or `sticky`, see [`MasterPolicy`] |
//! | `fallback_icon` | `question-mark.svg` | Indicator for unknown tag references |

use crate::error::ConfigError;
use crate::selection::MasterPolicy;
use crate::store::fs_source::{DEFAULT_ITEMS_FILE, DEFAULT_LINKS_FILE, DEFAULT_TAGS_FILE};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "folio.toml";
pub const DEFAULT_FALLBACK_ICON: &str = "question-mark.svg";

/// Configuration for folio, stored in `folio.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Directory holding the data files.
    #[config(env = "FOLIO_DATA_DIR", default = "data")]
    pub data_dir: PathBuf,

    #[config(default = "technos.json")]
    pub tags_file: String,

    #[config(default = "projects.json")]
    pub items_file: String,

    #[config(default = "links.json")]
    pub links_file: String,

    /// How the master filter follows tag clicks.
    /// When absent, the derived policy is used.
    pub master_policy: Option<MasterPolicy>,

    /// Icon shown for tags an item references but the tag list lacks.
    #[config(default = "question-mark.svg")]
    pub fallback_icon: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            tags_file: DEFAULT_TAGS_FILE.to_string(),
            items_file: DEFAULT_ITEMS_FILE.to_string(),
            links_file: DEFAULT_LINKS_FILE.to_string(),
            master_policy: None,
            fallback_icon: DEFAULT_FALLBACK_ICON.to_string(),
        }
    }
}

impl FolioConfig {
    /// Loads the layered configuration.
    ///
    /// `local_dir` is where a project-level `folio.toml` is looked up.
    /// Missing files are skipped; malformed ones are an error.
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder().env();
        if let Some(dir) = local_dir {
            builder = builder.file(dir.join(CONFIG_FILE));
        }
        if let Some(dirs) = ProjectDirs::from("com", "folio", "folio") {
            builder = builder.file(dirs.config_dir().join(CONFIG_FILE));
        }
        Ok(builder.load()?)
    }

    pub fn policy(&self) -> MasterPolicy {
        self.master_policy.unwrap_or_default()
    }
}
