//! Shared fixtures for folio tests.
//!
//! The scenario catalogue is the canonical two-tag, three-item setup:
//! tags `A` and `B`, items `1:[A]`, `2:[B]`, `3:[A, B]`.

use crate::model::{Catalogue, ItemRecord};
use crate::store::mem_source::MemSource;
use crate::tags::TagRecord;

pub fn scenario_tags() -> Vec<TagRecord> {
    vec![TagRecord::new("A"), TagRecord::new("B")]
}

pub fn scenario_items() -> Vec<ItemRecord> {
    vec![
        ItemRecord::new("1", &["A"]),
        ItemRecord::new("2", &["B"]),
        ItemRecord::new("3", &["A", "B"]),
    ]
}

pub fn scenario_catalogue() -> Catalogue {
    Catalogue::from_records(scenario_tags(), scenario_items(), Vec::new())
}

pub fn scenario_source() -> MemSource {
    MemSource::new(scenario_tags(), scenario_items())
}
