//! # View Sync Adapter
//!
//! The boundary between the filtering core and whatever draws it. A
//! [`ViewSync`] receives the complete [`VisibilityResult`] exactly once per
//! resolve cycle, synchronously, and must bring its surface in line with it:
//!
//! - every item shown or hidden according to `ItemView::visible`
//! - every tag indicator highlighted or plain according to `TagView::highlighted`
//! - every item chip highlighted or plain, with the fallback indicator for
//!   unknown tags
//!
//! The core never reads anything back from the view. There is no
//! incremental protocol: adapters that care about diffs compute them
//! themselves.

use crate::resolver::VisibilityResult;

pub trait ViewSync {
    fn apply(&mut self, result: &VisibilityResult);
}

/// A headless view. Useful when only the controller's state matters.
impl ViewSync for () {
    fn apply(&mut self, _result: &VisibilityResult) {}
}

impl<V: ViewSync + ?Sized> ViewSync for &mut V {
    fn apply(&mut self, result: &VisibilityResult) {
        (**self).apply(result)
    }
}

impl<V: ViewSync + ?Sized> ViewSync for Box<V> {
    fn apply(&mut self, result: &VisibilityResult) {
        (**self).apply(result)
    }
}

/// Keeps every result it was handed, in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    applied: Vec<VisibilityResult>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resolve cycles seen so far.
    pub fn cycles(&self) -> usize {
        self.applied.len()
    }

    pub fn last(&self) -> Option<&VisibilityResult> {
        self.applied.last()
    }

    pub fn history(&self) -> &[VisibilityResult] {
        &self.applied
    }
}

impl ViewSync for RecordingView {
    fn apply(&mut self, result: &VisibilityResult) {
        self.applied.push(result.clone());
    }
}
