//! # Folio CLI
//!
//! A terminal client for the `folioapp` filtering engine. The binary only
//! invokes `cli::run()` and handles process termination; everything else
//! lives in `src/cli/`.
//!
//! ## Workspace Structure
//!
//! - `crates/folioapp/`: UI-agnostic filtering library
//! - `crates/folio/`: this CLI, one possible view on top of the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/folio/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - TerminalView, a ViewSync that renders frames (render.rs) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (folioapp::controller)                          │
//! │  - Owns the selection, resolves, syncs the view             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store + Resolver (folioapp::store, folioapp::resolver)     │
//! │  - Catalogue loading, pure visibility resolution            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A terminal has no DOM, so the CLI replays clicks as events: each event is
//! handed to the controller, and the view it was built with receives the
//! resolved result and turns it into a text frame.
//!
//! ## Testing Approach
//!
//! - **Library**: unit and property tests inside `folioapp`.
//! - **Rendering (`render.rs`)**: canned catalogues rendered without color and
//!   compared line by line.
//! - **End to end (`tests/`)**: the real binary run with `assert_cmd` over a
//!   temporary data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
