//! User interface rendering layer with component-based architecture.
//!
//! The controller emits [`RenderCommand`]s; a [`Renderer`] turns them into
//! output. The terminal implementation writes ANSI-styled lines through
//! composable components, with theme support and search-term highlighting.
//!
//! # Architecture
//!
//! ```text
//! handle_event → RenderCommand → Renderer::render → components → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Render commands and display-ready view types
//! - [`renderer`]: Renderer contract and terminal implementation
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, wrapping)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{Renderer, TerminalRenderer};
pub use theme::Theme;
pub use viewmodel::{CardItem, DetailView, EmptyState, FavoriteLabel, Pane, RenderCommand};
