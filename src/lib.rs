//! Marquee: a terminal client for the TMDB movie catalog.
//!
//! Marquee provides:
//! - Popular titles with paginated "load more"
//! - Incremental, debounced search
//! - Movie details with trailer lookup
//! - Favorites persisted as JSON on disk
//! - A view/state controller that discards stale catalog responses

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Front End (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← View rules
//! │  - Action dispatching                               │
//! │  - Generation guard                                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON I/O    │   │ - Async fetch │
//! │ - Theming     │   │ - Favorites   │   │ - Debounce    │
//! │ - Components  │   │ - Backend API │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//!                                         ┌───────────────┐
//!                                         │ Catalog       │
//!                                         │ (catalog/)    │
//!                                         │ - TMDB client │
//!                                         └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Movie and trailer models (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber fmt layer                     │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Catalog contract and the TMDB HTTP client
//! - [`domain`]: Core domain types (Movie, Trailer, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Key-value persistence and the favorites store
//! - [`worker`]: Spawned catalog requests and the debounce scheduler
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! Configuration is read from `~/.config/marquee/config.toml` (or the path
//! given as the first command-line argument) and overridden by environment
//! variables:
//!
//! ```toml
//! api_key = "your-tmdb-v3-key"
//! language = "en-US"
//! search_delay_ms = "500"
//! theme = "catppuccin-latte"
//! trace_level = "debug"
//! ```
//!
//! `TMDB_API_KEY` sets the API key; any other key can be set as
//! `MARQUEE_<KEY>`, e.g. `MARQUEE_THEME=catppuccin-mocha`.
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Resolve [`Config`]
//!    - Initialize tracing
//!    - Build the TMDB client, favorites store and terminal renderer
//!    - Dispatch [`Event::Start`]: popular titles, page 1
//!
//! 2. **Input**:
//!    - Text commands on stdin become [`Event`]s
//!    - Typed input is debounced, submitted searches are immediate
//!
//! 3. **Worker Processing**:
//!    - Catalog requests run in spawned tasks
//!    - Responses come back tagged with the ticket they were issued under
//!    - Responses for superseded tickets are dropped
//!
//! 4. **UI Rendering**:
//!    - The state machine emits [`RenderCommand`](ui::RenderCommand)s
//!    - The renderer draws header, cards, detail pane and footer
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```rust
//! use marquee::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::default();
//! let actions = handle_event(&mut state, &Event::Start);
//!
//! assert!(actions.iter().any(|a| matches!(a, Action::PostToWorker(_))));
//! ```
//!
//! ## Driving the Controller
//!
//! ```rust,no_run
//! use marquee::app::{Controller, Event};
//! use marquee::catalog::TmdbCatalog;
//! use marquee::storage::{FavoritesStore, MemoryStore};
//! use marquee::ui::{TerminalRenderer, Theme};
//! use marquee::Config;
//! use std::sync::Arc;
//!
//! # async fn demo() -> marquee::Result<()> {
//! let config = Config::load(None)?;
//! let catalog = Arc::new(TmdbCatalog::from_config(&config)?);
//! let renderer = TerminalRenderer::new(std::io::stdout(), Theme::default(), &config.image_base_url);
//!
//! let mut controller = Controller::new(
//!     catalog,
//!     FavoritesStore::new(MemoryStore::default()),
//!     renderer,
//!     config.search_policy(),
//! );
//! controller.dispatch(Event::Start);
//! controller.next_feedback().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Key Design Decisions
//!
//! ## Pure State Machine
//!
//! [`handle_event`] mutates [`AppState`] and returns [`Action`]s; it performs
//! no I/O. The [`Controller`](app::Controller) executes the actions.
//!
//! ## Generation Guard
//!
//! Every list or detail request takes a ticket from a per-slot counter.
//! Starting a new request, or leaving the view, invalidates older tickets.
//!
//! ## Graceful Degradation
//!
//! Catalog failures become in-pane error messages, a missing trailer is
//! simply omitted, and unreadable favorites load as an empty set.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, ViewState};
pub use domain::{CatalogError, MarqueeError, Movie, MovieId, Result, Trailer};
pub use ui::Theme;

use app::SearchPolicy;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default TMDB v3 API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default poster image root (500px wide renditions).
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the TMDB API key.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Prefix for environment overrides of any config key.
pub const ENV_PREFIX: &str = "MARQUEE_";

/// Application configuration.
///
/// Resolved from built-in defaults, then an optional TOML file of flat
/// `key = "value"` pairs, then environment variables.
///
/// # Example
///
/// ```toml
/// api_key = "0123456789abcdef"
/// api_base_url = "https://api.themoviedb.org/3"
/// image_base_url = "https://image.tmdb.org/t/p/w500"
/// language = "de-DE"
/// request_timeout_secs = "10"
/// search_delay_ms = "500"
/// min_search_len = "3"
/// favorites_key = "favoriteMovies"
/// data_dir = "~/.local/share/marquee"
/// theme = "catppuccin-mocha"
/// theme_file = "/path/to/theme.toml"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// TMDB v3 API key. Required by [`catalog::TmdbCatalog::from_config`].
    pub api_key: Option<String>,

    /// API root. Default: [`DEFAULT_API_BASE_URL`]
    pub api_base_url: String,

    /// Poster image root. Default: [`DEFAULT_IMAGE_BASE_URL`]
    pub image_base_url: String,

    /// Optional TMDB `language` parameter, e.g. `en-US`.
    pub language: Option<String>,

    /// Per-request timeout. Default: 10 seconds
    pub request_timeout: Duration,

    /// Quiet period before typed input is evaluated. Default: 500 ms
    pub search_delay: Duration,

    /// Minimum trimmed length of a typed search term. Default: 3
    pub min_search_len: usize,

    /// Storage key under which favorites are persisted.
    ///
    /// Default: `"favoriteMovies"`
    pub favorites_key: String,

    /// Directory for favorites and the log file.
    ///
    /// Default: [`infrastructure::data_dir`]
    pub data_dir: PathBuf,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log filter used when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            search_delay: app::state::DEFAULT_SEARCH_DELAY,
            min_search_len: app::state::DEFAULT_MIN_SEARCH_LEN,
            favorites_key: storage::DEFAULT_FAVORITES_KEY.to_string(),
            data_dir: infrastructure::data_dir(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `request_timeout_secs`, `search_delay_ms`, `min_search_len`: numbers
    ///   (fall back to the default on parse error)
    /// - `data_dir`: path with `~` expanded
    /// - empty values count as unset
    /// - unknown keys are ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use marquee::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "secret".to_string());
    /// map.insert("search_delay_ms".to_string(), "250".to_string());
    /// map.insert("min_search_len".to_string(), "many".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_key.as_deref(), Some("secret"));
    /// assert_eq!(config.search_delay, Duration::from_millis(250));
    /// assert_eq!(config.min_search_len, 3);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };
        let number = |key: &str| get(key).and_then(|s| s.parse::<u64>().ok());

        Self {
            api_key: get("api_key"),
            api_base_url: get("api_base_url").unwrap_or(defaults.api_base_url),
            image_base_url: get("image_base_url").unwrap_or(defaults.image_base_url),
            language: get("language"),
            request_timeout: number("request_timeout_secs")
                .map_or(defaults.request_timeout, Duration::from_secs),
            search_delay: number("search_delay_ms").map_or(defaults.search_delay, Duration::from_millis),
            min_search_len: get("min_search_len")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(defaults.min_search_len),
            favorites_key: get("favorites_key").unwrap_or(defaults.favorites_key),
            data_dir: get("data_dir")
                .map(|dir| PathBuf::from(infrastructure::expand_tilde(&dir)))
                .unwrap_or(defaults.data_dir),
            theme_name: get("theme"),
            theme_file: get("theme_file").map(|file| infrastructure::expand_tilde(&file)),
            trace_level: get("trace_level"),
        }
    }

    /// Resolves configuration from the config file and the process
    /// environment.
    ///
    /// With `path` unset the default location is used, and a missing file
    /// there is not an error.
    ///
    /// # Errors
    ///
    /// - [`MarqueeError::Io`] if an explicitly given file cannot be read
    /// - [`MarqueeError::Config`] if the file is not valid TOML
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut map = match path {
            Some(path) => read_config_file(path)?,
            None => match infrastructure::config_path() {
                Some(default_path) if default_path.exists() => read_config_file(&default_path)?,
                _ => BTreeMap::new(),
            },
        };

        apply_env(&mut map, std::env::vars());
        tracing::debug!(keys = map.len(), "resolved configuration");

        Ok(Self::from_map(&map))
    }

    /// Rules for debounced search input.
    #[must_use]
    pub const fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            quiet_period: self.search_delay,
            min_term_len: self.min_search_len,
        }
    }
}

/// Reads a TOML file of flat pairs into a string map.
///
/// Non-string scalars are stringified; tables and arrays are rejected.
fn read_config_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = std::fs::read_to_string(path)?;
    parse_config_toml(&contents)
        .map_err(|e| MarqueeError::Config(format!("invalid config file {}: {e}", path.display())))
}

fn parse_config_toml(contents: &str) -> std::result::Result<BTreeMap<String, String>, String> {
    let table: toml::Table = toml::from_str(contents).map_err(|e| e.to_string())?;

    table
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => return Err(format!("`{key}` must be a scalar, found {}", other.type_str())),
            };
            Ok((key, value))
        })
        .collect()
}

/// Overlays environment variables onto a config map.
///
/// `TMDB_API_KEY` sets `api_key`; `MARQUEE_<KEY>` sets `<key>` (lowercased)
/// and wins over `TMDB_API_KEY`.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use marquee::apply_env;
///
/// let mut map = BTreeMap::new();
/// apply_env(&mut map, [
///     ("TMDB_API_KEY".to_string(), "k".to_string()),
///     ("MARQUEE_THEME".to_string(), "catppuccin-latte".to_string()),
///     ("HOME".to_string(), "/home/me".to_string()),
/// ]);
///
/// assert_eq!(map["api_key"], "k");
/// assert_eq!(map["theme"], "catppuccin-latte");
/// assert_eq!(map.len(), 2);
/// ```
pub fn apply_env<I>(map: &mut BTreeMap<String, String>, vars: I)
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut prefixed = Vec::new();

    for (name, value) in vars {
        if name == API_KEY_ENV {
            map.insert("api_key".to_string(), value);
        } else if let Some(key) = name.strip_prefix(ENV_PREFIX) {
            prefixed.push((key.to_ascii_lowercase(), value));
        }
    }

    map.extend(prefixed);
}

/// Resolves the renderer theme from configuration.
///
/// A theme file takes precedence over a theme name. Unknown names and
/// unreadable files fall back to the default theme.
#[must_use]
pub fn resolve_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}
