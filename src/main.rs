//! Terminal front end and entry point.
//!
//! This binary wires the marquee library to a line-oriented terminal: commands
//! are read from stdin, turned into [`Event`]s and fed to the [`Controller`],
//! which renders to stdout.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐        ┌──────────────────────────────────────┐
//! │  stdin reader thread │ ─────► │  main task                           │
//! │  parse_command       │ Command│  Controller ─► TerminalRenderer      │
//! └──────────────────────┘        │      ▲  │                            │
//!                                 │      │  └─► spawned catalog requests │
//!                                 │      └──── feedback channel ◄────────│
//!                                 └──────────────────────────────────────┘
//! ```
//!
//! # Commands
//!
//! - `/term` or `search term`: Submit a search
//! - `type text`: Simulate typing into the search box (debounced)
//! - `open <id>` or `<id>`: Open a movie
//! - `more`: Load the next page
//! - `back`: Leave the detail view
//! - `fav`: Toggle the open movie as favorite
//! - `favorites`: Show favorites
//! - `home`: Popular movies
//! - `help`: Show this list
//! - `quit`: Exit

#![allow(clippy::multiple_crate_versions)]

use marquee::app::{Controller, Event};
use marquee::catalog::TmdbCatalog;
use marquee::domain::MovieId;
use marquee::observability::init_tracing;
use marquee::storage::{FavoritesStore, JsonFileStore};
use marquee::ui::TerminalRenderer;
use marquee::{resolve_theme, Config};
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};

const HELP: &str = "\
commands:
  /<term>, search <term>   search movies
  type <text>              type into the search box
  open <id>, <id>          show movie details
  more                     load more results
  back                     leave the detail view
  fav                      toggle favorite
  favorites                show favorites
  home                     popular movies
  help                     show this help
  quit                     exit";

/// A parsed line of user input.
#[derive(Debug, PartialEq)]
enum Command {
    Event(Event),
    Help,
}

enum Step {
    Command(Option<Command>),
    Feedback,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("marquee: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);
    tracing::debug!(data_dir = %config.data_dir.display(), "starting marquee");

    let catalog = match TmdbCatalog::from_config(&config) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            eprintln!("marquee: {e}");
            return ExitCode::FAILURE;
        }
    };

    let store = match JsonFileStore::new(&config.data_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("marquee: {e}");
            return ExitCode::FAILURE;
        }
    };
    let favorites = FavoritesStore::with_key(store, config.favorites_key.clone());

    let mut renderer = TerminalRenderer::new(std::io::stdout(), resolve_theme(&config), &config.image_base_url);
    if let Some(cols) = terminal_width() {
        renderer = renderer.with_width(cols);
    }
    renderer.hint("type `help` for commands");

    let mut controller = Controller::new(catalog, favorites, renderer, config.search_policy());

    let (command_tx, mut commands) = mpsc::unbounded_channel();
    spawn_input_reader(command_tx);

    if !controller.dispatch(Event::Start) {
        return ExitCode::SUCCESS;
    }

    loop {
        let step = tokio::select! {
            command = commands.recv() => Step::Command(command),
            () = controller.next_feedback() => Step::Feedback,
        };

        match step {
            Step::Command(Some(Command::Event(event))) => {
                if !controller.dispatch(event) {
                    break;
                }
            }
            Step::Command(Some(Command::Help)) => controller.renderer_mut().hint(HELP),
            Step::Command(None) => break,
            Step::Feedback => {}
        }
    }

    tracing::debug!("exiting");
    ExitCode::SUCCESS
}

/// Reads stdin lines on a dedicated thread.
///
/// A plain thread is used so a pending read never holds up shutdown.
fn spawn_input_reader(tx: UnboundedSender<Command>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if let Some(command) = parse_command(&line) {
                if tx.send(command).is_err() {
                    break;
                }
            }
        }
    });
}

/// Layout width from `COLUMNS`, if set.
fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS").ok()?.trim().parse().ok()
}

/// Maps a line of input to a command.
///
/// Returns `None` for blank or unrecognized lines.
fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(term) = line.strip_prefix('/') {
        return Some(Command::Event(Event::SubmitSearch(term.to_string())));
    }

    let (verb, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = raw.trim_start();

    let event = match verb {
        "search" => Event::SubmitSearch(rest.to_string()),
        // keep the raw text: the debounce trims it
        "type" => Event::InputChanged(raw.to_string()),
        "open" => Event::OpenMovie(MovieId(rest.parse().ok()?)),
        "more" => Event::LoadMore,
        "back" => Event::Back,
        "fav" => Event::ToggleFavorite,
        "favorites" => Event::ShowFavorites,
        "home" => Event::ShowHome,
        "quit" | "exit" => Event::Quit,
        "help" => return Some(Command::Help),
        _ => Event::OpenMovie(MovieId(verb.parse().ok()?)),
    };

    Some(Command::Event(event))
}
