//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a `tracing` subscriber
//! - Turns library errors into user-facing messages
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments to typed commands via clap
//! 2. **Context Setup**: layered config, CLI overrides, catalogue load
//! 3. **Dispatch**: route commands to handlers
//! 4. **Output**: print the frames the [`TerminalView`] rendered

use super::render::{OutputMode, Renderer, TerminalView};
use super::setup::{Cli, Commands};
use super::styles::{names, paint};
use anyhow::{Context, Result};
use clap::Parser;
use folioapp::config::FolioConfig;
use folioapp::controller::{Controller, Event};
use folioapp::model::Catalogue;
use folioapp::store::fs_source::FsSource;
use folioapp::store::{CatalogueStore, DataSource};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "FOLIO_LOG";

pub const SHELL_HELP: &str = "\
Events, one per line:
  tag=<name>   toggle a technology
  master       toggle the filter on or off
  help         show this message
  quit         leave the shell
";

struct AppContext {
    config: FolioConfig,
    catalogue: Rc<Catalogue>,
    mode: OutputMode,
    color: bool,
}

impl AppContext {
    fn renderer(&self) -> Renderer {
        Renderer::new(
            self.catalogue.clone(),
            self.config.fallback_icon.clone(),
            self.mode,
        )
        .with_color(self.color)
    }

    fn session(&self) -> Controller<TerminalView> {
        Controller::new(
            self.catalogue.clone(),
            self.config.policy(),
            TerminalView::new(self.renderer()),
        )
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;

    // Config does not need the catalogue, so a broken data dir can still be inspected.
    if let Some(Commands::Config) = &cli.command {
        return handle_config(&config);
    }

    let ctx = init_context(&cli, config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None | Some(Commands::List) => handle_list(&ctx, &mut out),
        Some(Commands::Replay { events, steps }) => handle_replay(&ctx, &events, steps, &mut out),
        Some(Commands::Shell) => {
            let stdin = io::stdin();
            let mut err = io::stderr();
            run_shell(&ctx, stdin.lock(), &mut out, &mut err)
        }
        Some(Commands::Tags) => write_out(&mut out, &ctx.renderer().tags()),
        Some(Commands::Links) => write_out(&mut out, &ctx.renderer().links()),
        Some(Commands::Config) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Loads the layered config and applies command-line overrides on top.
fn load_config(cli: &Cli) -> Result<FolioConfig> {
    let local_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    let mut config = FolioConfig::load(Some(local_dir.as_path()))?;

    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(policy) = cli.policy {
        config.master_policy = Some(policy);
    }
    Ok(config)
}

fn init_context(cli: &Cli, config: FolioConfig) -> Result<AppContext> {
    let mut store = CatalogueStore::new(FsSource::from_config(&config));
    let catalogue = store
        .load()
        .with_context(|| format!("Could not load the catalogue from {}", store.source().describe()))?;
    debug!(
        tags = catalogue.tags().len(),
        items = catalogue.items().len(),
        policy = %config.policy(),
        "catalogue ready"
    );

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let color = !cli.no_color && console::colors_enabled();

    Ok(AppContext {
        config,
        catalogue,
        mode,
        color,
    })
}

fn write_out<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn handle_list<W: Write>(ctx: &AppContext, out: &mut W) -> Result<()> {
    let mut session = ctx.session();
    for frame in session.view_mut().take_frames() {
        write_out(out, &frame)?;
    }
    Ok(())
}

fn handle_replay<W: Write>(
    ctx: &AppContext,
    events: &[Event],
    steps: bool,
    out: &mut W,
) -> Result<()> {
    let mut session = ctx.session();
    let mut blocks = session.view_mut().take_frames();

    for event in events {
        if session.handle(event).is_none() {
            warn_ignored(&mut io::stderr(), event, ctx.color)?;
            continue;
        }
        let frame = session.view_mut().take_frames().concat();
        if steps && ctx.mode == OutputMode::Text {
            blocks.push(format!("> {}\n{}", event, frame));
        } else {
            blocks.push(frame);
        }
    }

    if !steps {
        if let Some(last) = blocks.last() {
            write_out(out, last)?;
        }
        return Ok(());
    }
    let separator = match ctx.mode {
        OutputMode::Text => "\n",
        OutputMode::Json => "",
    };
    write_out(out, &blocks.join(separator))
}

fn warn_ignored<E: Write>(err: &mut E, event: &Event, color: bool) -> io::Result<()> {
    match event {
        Event::TagClicked(id) => writeln!(
            err,
            "{} unknown technology '{}' ignored",
            paint(names::WARNING, "warning:", color),
            id
        ),
        Event::MasterClicked => Ok(()),
    }
}

/// Reads events line by line, printing a frame after each handled one.
///
/// The initial frame is printed before the first line is read. Blank lines
/// and lines starting with `#` are skipped. A line that is not an event is
/// reported on `err` and the session goes on.
fn run_shell<R: BufRead, W: Write, E: Write>(
    ctx: &AppContext,
    input: R,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let mut session = ctx.session();
    for frame in session.view_mut().take_frames() {
        write_out(out, &frame)?;
    }

    for line in input.lines() {
        let line = line.context("Failed to read from stdin")?;
        let line = line.trim();
        match line {
            "" => continue,
            _ if line.starts_with('#') => continue,
            "quit" | "exit" => break,
            "help" => {
                write_out(out, SHELL_HELP)?;
                continue;
            }
            _ => {}
        }

        let event: Event = match line.parse() {
            Ok(event) => event,
            Err(e) => {
                writeln!(err, "error: {}", e)?;
                continue;
            }
        };
        if session.handle(&event).is_none() {
            warn_ignored(err, &event, ctx.color)?;
            continue;
        }
        for frame in session.view_mut().take_frames() {
            write_out(out, &frame)?;
        }
    }
    Ok(())
}

fn handle_config(config: &FolioConfig) -> Result<()> {
    let text = toml::to_string(config).context("Failed to serialize config")?;
    print!("{}", text);
    if config.master_policy.is_none() {
        println!("# master_policy = \"{}\" (default)", config.policy());
    }
    Ok(())
}
