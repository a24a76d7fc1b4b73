use clap::{Parser, Subcommand};
use folioapp::controller::Event;
use folioapp::selection::MasterPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", bin_name = "folio", version)]
#[command(
    about = "Filter a portfolio of projects by technology",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding technos.json, projects.json and links.json
    #[arg(short, long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// How the master filter follows tag clicks (derived or sticky)
    #[arg(long, global = true, value_name = "POLICY", help_heading = "Options")]
    pub policy: Option<MasterPolicy>,

    /// Print machine readable JSON instead of styled text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Disable colors
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every project, unfiltered
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Apply a sequence of clicks and show the resulting view
    #[command(display_order = 2)]
    Replay {
        /// Events in order: `tag=<name>` or `master`
        #[arg(required = true, num_args = 1.., value_name = "EVENT")]
        events: Vec<Event>,

        /// Show the view after every event, not only the last one
        #[arg(long)]
        steps: bool,
    },

    /// Interactive session reading one event per line from stdin
    #[command(display_order = 3)]
    Shell,

    /// List known technologies
    #[command(display_order = 10)]
    Tags,

    /// List header links
    #[command(display_order = 11)]
    Links,

    /// Print the effective configuration
    #[command(display_order = 20)]
    Config,
}
