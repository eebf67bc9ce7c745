//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic, sitting between the
//! front end (main.rs) and the catalog/storage/worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Worker Responses, Debounce ──┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`controller`]: Runtime executing actions against real collaborators
//! - [`generation`]: Stale-response guard
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: View and search context types
//! - [`state`]: Central application state container
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let actions = handle_event(&mut state, &Event::ShowFavorites);
//! assert!(!actions.is_empty());
//! ```

pub mod actions;
pub mod controller;
pub mod generation;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::{Controller, Feedback};
pub use handler::{handle_event, Event};
pub use modes::{ListMode, ReturnView, SearchContext, ViewState};
pub use state::{AppState, InputIntent, SearchPolicy};
