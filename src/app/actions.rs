//! Actions representing side effects to be executed by the controller.
//!
//! This module defines the [`Action`] type: imperative commands produced by
//! the event handler after processing user input or worker responses. Actions
//! bridge pure state transitions and effectful operations like rendering,
//! catalog requests, timers and favorites persistence.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` for each event, and the
//! [`Controller`](crate::app::Controller) executes them in order. Actions that
//! produce a result (favorites load and toggle) feed it back as a new event.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::generation::{Generations, Slot};
//! use marquee::app::modes::ListMode;
//! use marquee::app::Action;
//! use marquee::catalog::ListRequest;
//! use marquee::worker::WorkerMessage;
//!
//! let ticket = Generations::default().begin(Slot::List);
//! let actions = vec![Action::PostToWorker(WorkerMessage::fetch_list(
//!     ticket,
//!     ListRequest::Popular { page: 1 },
//!     ListMode::Replace,
//! ))];
//! # let _ = actions;
//! ```

use crate::domain::Movie;
use crate::ui::viewmodel::RenderCommand;
use crate::worker::WorkerMessage;
use std::time::Duration;

/// Commands representing side effects to be executed by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hands a catalog request to the worker.
    PostToWorker(WorkerMessage),

    /// Evaluates `text` once `delay` passes without another input change.
    ///
    /// Replaces any evaluation already scheduled.
    ScheduleSearch {
        /// Input content at the time of the change.
        text: String,
        /// Quiet period to wait.
        delay: Duration,
    },

    /// Drops the scheduled input evaluation, if any.
    CancelScheduledSearch,

    /// Reads the favorites store and reports back with `FavoritesLoaded`.
    LoadFavorites,

    /// Toggles a movie in the favorites store and reports back with
    /// `FavoriteToggled`.
    ToggleFavorite(Movie),

    /// Sends a command to the renderer.
    Render(RenderCommand),

    /// Stops the controller loop.
    Quit,
}
