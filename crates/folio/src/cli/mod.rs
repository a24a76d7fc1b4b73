//! # CLI Behavior
//!
//! This is **one possible UI client** for folio, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Naked Execution (`folio`)
//!
//! Running `folio` with no subcommand defaults to `folio list`: the
//! catalogue as it looks on first load, nothing filtered.
//!
//! ## Clicks as Events
//!
//! `folio replay tag=Vue tag=Node master` feeds the events to the controller
//! in order and prints the final frame (`--steps` prints every frame).
//! `folio shell` reads the same events from stdin, one per line, and prints
//! a frame after each.
//!
//! Clicking a technology the catalogue does not know is reported on stderr
//! and otherwise ignored.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Frame rendering, text and JSON
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
