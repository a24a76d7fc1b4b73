//! Visibility resolution.
//!
//! [`resolve`] maps a catalogue and a selection state to a complete
//! [`VisibilityResult`]: which items are shown, which tags are highlighted,
//! and how each item's tag chips look. It is a pure, total function. The
//! result is rebuilt from scratch on every state change and never diffed.
//!
//! ## Effective Filter
//!
//! | master | selection | active tags      | visible items           |
//! |--------|-----------|------------------|-------------------------|
//! | off    | anything  | all (no filter)  | every item              |
//! | on     | `{A, B}`  | `{A, B}`         | items tagged A or B     |
//! | on     | `{}`      | none             | no item                 |
//!
//! "Filter on with nothing picked" hides everything. That is distinct from
//! "filter off", which shows everything.
//!
//! Highlighting follows the explicit selection: with the master off nothing
//! is highlighted, even though everything is shown.

use crate::model::{Catalogue, Item};
use crate::selection::SelectionState;
use crate::tags::compare_names;
use serde::Serialize;
use std::collections::BTreeSet;

/// The tag filter derived from a selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFilter<'a> {
    /// Filtering is off: every item matches.
    All,
    /// Items match when they carry at least one of these tags.
    Any(&'a BTreeSet<String>),
}

impl<'a> ActiveFilter<'a> {
    pub fn from_selection(selection: &'a SelectionState) -> Self {
        if selection.master_enabled() {
            ActiveFilter::Any(selection.selected_tag_ids())
        } else {
            ActiveFilter::All
        }
    }

    /// Unknown tag references never match an `Any` filter, since the
    /// selection only ever holds known tags.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ActiveFilter::All => true,
            ActiveFilter::Any(active) => item.tag_ids.iter().any(|t| active.contains(t)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityResult {
    pub master_enabled: bool,
    /// One entry per item, in catalogue order.
    pub items: Vec<ItemView>,
    /// One entry per known tag, sorted case-insensitively.
    pub tags: Vec<TagView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub visible: bool,
    pub chips: Vec<ChipView>,
}

/// A tag indicator on an item card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipView {
    pub tag_id: String,
    /// `false` when the item references a tag the catalogue does not know;
    /// the view shows its fallback indicator.
    pub known: bool,
    pub icon: Option<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagView {
    pub id: String,
    pub icon: Option<String>,
    pub highlighted: bool,
}

impl VisibilityResult {
    pub fn visible_item_ids(&self) -> BTreeSet<&str> {
        self.items
            .iter()
            .filter(|i| i.visible)
            .map(|i| i.id.as_str())
            .collect()
    }

    pub fn highlighted_tag_ids(&self) -> BTreeSet<&str> {
        self.tags
            .iter()
            .filter(|t| t.highlighted)
            .map(|t| t.id.as_str())
            .collect()
    }

    pub fn is_visible(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i.id == item_id && i.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|i| i.visible).count()
    }
}

pub fn resolve(catalogue: &Catalogue, selection: &SelectionState) -> VisibilityResult {
    let filter = ActiveFilter::from_selection(selection);
    let highlighted = |tag_id: &str| selection.master_enabled() && selection.is_selected(tag_id);

    let tags = catalogue
        .tags()
        .iter()
        .map(|tag| TagView {
            id: tag.id.clone(),
            icon: tag.icon.clone(),
            highlighted: highlighted(&tag.id),
        })
        .collect();

    let items = catalogue
        .items()
        .iter()
        .map(|item| {
            let mut chips: Vec<ChipView> = item
                .tag_ids
                .iter()
                .map(|tag_id| {
                    let known = catalogue.tag(tag_id);
                    ChipView {
                        tag_id: tag_id.clone(),
                        known: known.is_some(),
                        icon: known.and_then(|t| t.icon.clone()),
                        highlighted: highlighted(tag_id),
                    }
                })
                .collect();
            chips.sort_by(|a, b| compare_names(&a.tag_id, &b.tag_id));

            ItemView {
                id: item.id.clone(),
                visible: filter.matches(item),
                chips,
            }
        })
        .collect();

    VisibilityResult {
        master_enabled: selection.master_enabled(),
        items,
        tags,
    }
}
