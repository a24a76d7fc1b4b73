//! # Folio Architecture
//!
//! Folio is a **UI-agnostic faceted filtering library** for a portfolio of
//! projects tagged with technologies. It decides which projects are visible
//! and which technology indicators are highlighted as the user clicks
//! around. Drawing any of it is somebody else's job.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (anything implementing ViewSync)                │
//! │  - Receives one complete VisibilityResult per cycle         │
//! │  - Never read back by the core                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Interaction Controller (controller.rs)                     │
//! │  - Owns SelectionState, applies transition rules            │
//! │  - Re-resolves and syncs the view after every event         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Visibility Resolver (resolver.rs)                          │
//! │  - Pure function: catalogue + selection → result            │
//! └─────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalogue Store (store/)                                   │
//! │  - Abstract DataSource trait                                │
//! │  - FsSource (production), MemSource (testing)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: source → store → controller → resolver → view.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Apart from the filesystem data source, code in this crate:
//! - Takes regular Rust values and returns regular Rust types
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** assumes a terminal, a browser or any other surface
//!
//! ## Testing Strategy
//!
//! 1. **Selection and resolver**: unit tests plus `proptest` properties
//!    (monotonicity, idempotence, master-off behaviour).
//! 2. **Controller**: scenario tests driving events through a
//!    [`view::RecordingView`].
//! 3. **Store**: [`store::mem_source::MemSource`] for failure simulation,
//!    `tempfile` directories for [`store::fs_source::FsSource`].
//!
//! ## Module Overview
//!
//! - [`tags`], [`model`]: catalogue records and normalisation
//! - [`store`]: catalogue loading
//! - [`selection`]: the mutable filter state and master policy
//! - [`resolver`]: visibility resolution
//! - [`controller`]: event handling
//! - [`view`]: the view sync boundary
//! - [`config`], [`error`]: ambient concerns

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod resolver;
pub mod selection;
pub mod store;
pub mod tags;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
