//! # Interaction Controller
//!
//! The controller is the single owner of a session's [`SelectionState`]. It
//! turns user events into state transitions, re-resolves visibility after
//! each one, and pushes the result to its [`ViewSync`].
//!
//! ## State Machine
//!
//! ```text
//!                 TagClicked (exclusive reset)
//!   ┌────────────┐ ─────────────────────────▶ ┌──────────┐
//!   │ Unfiltered │                            │ Filtered │ ◀─┐ TagClicked
//!   └────────────┘ ◀───────────────────────── └──────────┘ ──┘ (additive)
//!         ▲  │      MasterClicked, or last tag      │  ▲
//!         │  │      unselected (Derived policy)     │  │
//!         │  └──────────── MasterClicked ───────────┘  │
//!         └────────────────────────────────────────────┘
//! ```
//!
//! - `Unfiltered` is the initial state; there is no terminal state.
//! - A tag click while unfiltered clears any stale selection, then selects
//!   the clicked tag.
//! - A master click never touches the tag selection.
//! - Under [`MasterPolicy::Sticky`] unselecting the last tag keeps the
//!   session `Filtered` with nothing picked, so every item is hidden.
//!
//! ## Event Handling
//!
//! Events are keyed by stable tag id. Every handler takes `&mut self` and
//! runs to completion, including the view sync, before the next event can
//! be handled. A click on an id the catalogue does not know is ignored: no
//! state change, no resolve cycle.
//!
//! A controller can only be built from a loaded [`Catalogue`], so nothing
//! is interactive until the catalogue load has succeeded.

use crate::error::Result;
use crate::model::Catalogue;
use crate::resolver::{resolve, VisibilityResult};
use crate::selection::{MasterPolicy, SelectionState};
use crate::store::{CatalogueStore, DataSource};
use crate::view::ViewSync;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TagClicked(String),
    MasterClicked,
}

impl Event {
    pub fn tag(id: impl Into<String>) -> Self {
        Event::TagClicked(id.into())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::TagClicked(id) => write!(f, "tag={}", id),
            Event::MasterClicked => f.write_str("master"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("Empty event")]
    Empty,
    #[error("Missing tag id in '{0}'")]
    MissingTag(String),
    #[error("Unknown event '{0}' (expected 'master' or 'tag=<id>')")]
    Unknown(String),
}

/// Parses the textual event form: `master` or `tag=<id>`.
///
/// Tag ids are taken verbatim after the `=`, so they keep their case and
/// may contain spaces.
impl FromStr for Event {
    type Err = ParseEventError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseEventError::Empty);
        }
        if trimmed.eq_ignore_ascii_case("master") {
            return Ok(Event::MasterClicked);
        }
        match trimmed.split_once('=') {
            Some((kind, id)) if kind.trim().eq_ignore_ascii_case("tag") => {
                let id = id.trim();
                if id.is_empty() {
                    Err(ParseEventError::MissingTag(trimmed.to_string()))
                } else {
                    Ok(Event::tag(id))
                }
            }
            _ => Err(ParseEventError::Unknown(trimmed.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    Unfiltered,
    Filtered,
}

impl FilterMode {
    fn of(selection: &SelectionState) -> Self {
        if selection.master_enabled() {
            FilterMode::Filtered
        } else {
            FilterMode::Unfiltered
        }
    }
}

/// What a handled event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: FilterMode,
    pub to: FilterMode,
}

pub struct Controller<V: ViewSync> {
    catalogue: Rc<Catalogue>,
    selection: SelectionState,
    policy: MasterPolicy,
    view: V,
}

impl<V: ViewSync> Controller<V> {
    /// Starts an unfiltered session and performs the initial view sync.
    pub fn new(catalogue: Rc<Catalogue>, policy: MasterPolicy, view: V) -> Self {
        let mut controller = Self {
            catalogue,
            selection: SelectionState::new(),
            policy,
            view,
        };
        controller.sync();
        controller
    }

    /// Loads the catalogue and starts a session on it.
    ///
    /// On a load failure no controller exists, so no interaction can be
    /// wired and the view is never touched.
    pub fn open<S: DataSource>(
        store: &mut CatalogueStore<S>,
        policy: MasterPolicy,
        view: V,
    ) -> Result<Self> {
        let catalogue = store.load()?;
        Ok(Self::new(catalogue, policy, view))
    }

    /// Handles one event. Returns `None` when the event was ignored.
    pub fn handle(&mut self, event: &Event) -> Option<Transition> {
        match event {
            Event::TagClicked(id) => self.toggle_tag(id),
            Event::MasterClicked => Some(self.toggle_master()),
        }
    }

    pub fn toggle_tag(&mut self, tag_id: &str) -> Option<Transition> {
        if !self.catalogue.has_tag(tag_id) {
            warn!(tag = %tag_id, "click on unknown tag ignored");
            return None;
        }
        let from = self.mode();
        self.selection.toggle_tag(tag_id, self.policy);
        Some(self.finish(from))
    }

    pub fn toggle_master(&mut self) -> Transition {
        let from = self.mode();
        self.selection.toggle_master();
        self.finish(from)
    }

    fn finish(&mut self, from: FilterMode) -> Transition {
        let transition = Transition {
            from,
            to: self.mode(),
        };
        debug!(
            from = ?transition.from,
            to = ?transition.to,
            selected = self.selection.selected_tag_ids().len(),
            "selection changed"
        );
        self.sync();
        transition
    }

    fn sync(&mut self) {
        let result = resolve(&self.catalogue, &self.selection);
        debug!(
            visible = result.visible_count(),
            total = result.items.len(),
            "resolve cycle"
        );
        self.view.apply(&result);
    }

    /// Recomputes the current result without notifying the view.
    pub fn resolve(&self) -> VisibilityResult {
        resolve(&self.catalogue, &self.selection)
    }

    pub fn mode(&self) -> FilterMode {
        FilterMode::of(&self.selection)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn policy(&self) -> MasterPolicy {
        self.policy
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Resource;
    use crate::store::mem_source::MemSource;
    use crate::test_utils::{scenario_catalogue, scenario_source};
    use crate::view::RecordingView;
    use std::collections::BTreeSet;

    fn controller(policy: MasterPolicy) -> Controller<RecordingView> {
        Controller::new(Rc::new(scenario_catalogue()), policy, RecordingView::new())
    }

    fn set<'a>(ids: &[&'a str]) -> BTreeSet<&'a str> {
        ids.iter().copied().collect()
    }

    fn selected(c: &Controller<RecordingView>) -> Vec<&str> {
        c.selection()
            .selected_tag_ids()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_new_session_is_unfiltered_and_synced_once() {
        let c = controller(MasterPolicy::Derived);
        assert_eq!(c.mode(), FilterMode::Unfiltered);
        assert_eq!(c.view().cycles(), 1);
        assert_eq!(c.view().last().unwrap().visible_item_ids(), set(&["1", "2", "3"]));
    }

    #[test]
    fn test_full_scenario() {
        let mut c = controller(MasterPolicy::Derived);

        c.handle(&Event::tag("A"));
        let result = c.view().last().unwrap();
        assert_eq!(result.visible_item_ids(), set(&["1", "3"]));
        assert_eq!(result.highlighted_tag_ids(), set(&["A"]));

        c.handle(&Event::tag("B"));
        let result = c.view().last().unwrap();
        assert_eq!(result.visible_item_ids(), set(&["1", "2", "3"]));
        assert_eq!(result.highlighted_tag_ids(), set(&["A", "B"]));

        c.handle(&Event::MasterClicked);
        let result = c.view().last().unwrap();
        assert_eq!(result.visible_item_ids(), set(&["1", "2", "3"]));
        assert!(result.highlighted_tag_ids().is_empty());
        assert!(!c.selection().master_enabled());
        assert_eq!(selected(&c), vec!["A", "B"]);
    }

    #[test]
    fn test_each_handled_event_syncs_exactly_once() {
        let mut c = controller(MasterPolicy::Derived);
        c.handle(&Event::tag("A"));
        c.handle(&Event::MasterClicked);
        c.handle(&Event::MasterClicked);
        assert_eq!(c.view().cycles(), 4);
    }

    #[test]
    fn test_unfiltered_tag_click_enters_filtered() {
        let mut c = controller(MasterPolicy::Derived);
        let t = c.handle(&Event::tag("B")).unwrap();
        assert_eq!(t.from, FilterMode::Unfiltered);
        assert_eq!(t.to, FilterMode::Filtered);
        assert_eq!(selected(&c), vec!["B"]);
    }

    #[test]
    fn test_tag_click_after_master_off_resets_selection() {
        let mut c = controller(MasterPolicy::Derived);
        c.handle(&Event::tag("A"));
        c.handle(&Event::tag("B"));
        c.handle(&Event::MasterClicked);

        c.handle(&Event::tag("B"));
        assert_eq!(selected(&c), vec!["B"]);
        assert_eq!(c.mode(), FilterMode::Filtered);
        assert_eq!(c.view().last().unwrap().visible_item_ids(), set(&["2", "3"]));
    }

    #[test]
    fn test_master_off_then_on_restores_filter() {
        let mut c = controller(MasterPolicy::Derived);
        c.handle(&Event::tag("B"));
        c.handle(&Event::MasterClicked);
        c.handle(&Event::MasterClicked);

        let result = c.view().last().unwrap();
        assert_eq!(result.visible_item_ids(), set(&["2", "3"]));
        assert_eq!(result.highlighted_tag_ids(), set(&["B"]));
    }

    #[test]
    fn test_master_on_with_nothing_selected_hides_everything() {
        let mut c = controller(MasterPolicy::Derived);
        let t = c.handle(&Event::MasterClicked).unwrap();
        assert_eq!(t.to, FilterMode::Filtered);
        assert!(c.view().last().unwrap().visible_item_ids().is_empty());
    }

    #[test]
    fn test_derived_policy_last_tag_off_falls_back_to_unfiltered() {
        let mut c = controller(MasterPolicy::Derived);
        c.handle(&Event::tag("A"));
        let t = c.handle(&Event::tag("A")).unwrap();

        assert_eq!(t.from, FilterMode::Filtered);
        assert_eq!(t.to, FilterMode::Unfiltered);
        assert_eq!(c.view().last().unwrap().visible_count(), 3);
    }

    #[test]
    fn test_sticky_policy_last_tag_off_stays_filtered_and_empty() {
        let mut c = controller(MasterPolicy::Sticky);
        c.handle(&Event::tag("A"));
        let t = c.handle(&Event::tag("A")).unwrap();

        assert_eq!(t.to, FilterMode::Filtered);
        assert!(c.view().last().unwrap().visible_item_ids().is_empty());
    }

    #[test]
    fn test_master_click_after_derived_fallback_hides_everything() {
        // Selecting then unselecting A leaves nothing picked; the master
        // click then filters on the empty set.
        let mut c = controller(MasterPolicy::Derived);
        c.handle(&Event::tag("A"));
        c.handle(&Event::tag("A"));
        c.handle(&Event::MasterClicked);
        assert_eq!(c.view().last().unwrap().visible_count(), 0);
    }

    #[test]
    fn test_unknown_tag_click_is_ignored() {
        let mut c = controller(MasterPolicy::Derived);
        assert_eq!(c.handle(&Event::tag("Cobol")), None);
        assert_eq!(c.view().cycles(), 1);
        assert!(!c.selection().has_selection());
    }

    #[test]
    fn test_tag_ids_are_case_sensitive() {
        let mut c = controller(MasterPolicy::Derived);
        assert_eq!(c.handle(&Event::tag("a")), None);
    }

    #[test]
    fn test_resolve_does_not_touch_view() {
        let c = controller(MasterPolicy::Derived);
        let result = c.resolve();
        assert_eq!(&result, c.view().last().unwrap());
        assert_eq!(c.view().cycles(), 1);
    }

    #[test]
    fn test_open_loads_then_syncs() {
        let mut store = CatalogueStore::new(scenario_source());
        let c = Controller::open(&mut store, MasterPolicy::Derived, RecordingView::new()).unwrap();
        assert_eq!(c.catalogue().items().len(), 3);
        assert_eq!(c.view().cycles(), 1);
    }

    #[test]
    fn test_open_failure_never_touches_view() {
        let source = scenario_source();
        source.set_failing(Resource::Items, true);
        let mut store = CatalogueStore::new(source);
        let mut view = RecordingView::new();

        let opened = Controller::open(&mut store, MasterPolicy::Derived, &mut view);
        assert!(opened.is_err());
        drop(opened);
        assert_eq!(view.cycles(), 0);
    }

    #[test]
    fn test_open_on_empty_source() {
        let mut store = CatalogueStore::new(MemSource::default());
        let mut c = Controller::open(&mut store, MasterPolicy::Derived, ()).unwrap();
        assert_eq!(c.handle(&Event::MasterClicked).unwrap().to, FilterMode::Filtered);
        assert!(c.resolve().items.is_empty());
    }

    #[test]
    fn test_event_parsing() {
        assert_eq!("master".parse::<Event>(), Ok(Event::MasterClicked));
        assert_eq!("MASTER".parse::<Event>(), Ok(Event::MasterClicked));
        assert_eq!("tag=Rust".parse::<Event>(), Ok(Event::tag("Rust")));
        assert_eq!("tag = Node JS ".parse::<Event>(), Ok(Event::tag("Node JS")));
        assert_eq!(
            "tag=".parse::<Event>(),
            Err(ParseEventError::MissingTag("tag=".to_string()))
        );
        assert_eq!("".parse::<Event>(), Err(ParseEventError::Empty));
        assert!(matches!(
            "click=Rust".parse::<Event>(),
            Err(ParseEventError::Unknown(_))
        ));
    }

    #[test]
    fn test_event_display_roundtrips_through_parse() {
        for event in [Event::MasterClicked, Event::tag("Vue")] {
            assert_eq!(event.to_string().parse::<Event>(), Ok(event));
        }
    }
}
