//! # Selection State
//!
//! The only mutable state of a filtering session: which tags the user has
//! picked, and whether the master filter is on.
//!
//! ## Transition Rules
//!
//! - **Tag toggle**: flips one tag. If the master filter was off right
//!   before the toggle, every other selection is cleared first, so a new
//!   filtering session always starts from the single tag just clicked.
//! - **Master toggle**: inverts the master flag and nothing else. Turning the
//!   filter off suspends the selection; turning it back on restores it.
//!
//! After a tag toggle the master flag is recomputed according to the
//! session's [`MasterPolicy`].
//!
//! Only the [`Controller`](crate::controller::Controller) mutates a
//! `SelectionState`. It also guarantees the selected ids are known tags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How the master flag follows individual tag toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasterPolicy {
    /// The master flag is recomputed as "any tag selected" after every tag
    /// toggle. Unselecting the last tag switches filtering off.
    #[default]
    Derived,
    /// The first tag toggle switches the master flag on and later tag
    /// toggles never switch it off. Unselecting the last tag leaves the
    /// filter on with nothing picked, which hides every item.
    Sticky,
}

impl fmt::Display for MasterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MasterPolicy::Derived => f.write_str("derived"),
            MasterPolicy::Sticky => f.write_str("sticky"),
        }
    }
}

impl FromStr for MasterPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "derived" => Ok(MasterPolicy::Derived),
            "sticky" => Ok(MasterPolicy::Sticky),
            other => Err(format!(
                "unknown master policy '{}' (expected 'derived' or 'sticky')",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    master_enabled: bool,
    selected: BTreeSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn master_enabled(&self) -> bool {
        self.master_enabled
    }

    pub fn selected_tag_ids(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, tag_id: &str) -> bool {
        self.selected.contains(tag_id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub(crate) fn toggle_tag(&mut self, tag_id: &str, policy: MasterPolicy) {
        if !self.master_enabled {
            self.selected.clear();
        }

        if !self.selected.remove(tag_id) {
            self.selected.insert(tag_id.to_string());
        }

        self.master_enabled = match policy {
            MasterPolicy::Derived => self.has_selection(),
            MasterPolicy::Sticky => true,
        };
    }

    pub(crate) fn toggle_master(&mut self) {
        self.master_enabled = !self.master_enabled;
    }

    #[cfg(test)]
    pub(crate) fn from_parts(master_enabled: bool, selected: &[&str]) -> Self {
        Self {
            master_enabled,
            selected: selected.iter().map(|s| s.to_string()).collect(),
        }
    }
}
