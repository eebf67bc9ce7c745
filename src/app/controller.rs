//! Controller runtime.
//!
//! The [`Controller`] owns the [`AppState`] and the collaborators the state
//! machine talks to through actions: the catalog worker, the favorites store,
//! the debounce slot and the renderer. It processes one event at a time.
//!
//! # Event Loop
//!
//! ```text
//! user input ──────────────┐
//!                          ▼
//!               dispatch(Event) → handle_event → Vec<Action> → execute
//!                          ▲                                     │
//! feedback channel ────────┘  ◄── worker responses, debounce ◄───┘
//! ```

use super::handler::{handle_event, Event};
use super::state::{AppState, SearchPolicy};
use super::Action;
use crate::catalog::Catalog;
use crate::storage::{toggle, FavoritesStore};
use crate::ui::Renderer;
use crate::worker::{CatalogWorker, Debouncer, WorkerResponse};
use std::collections::VecDeque;
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Results flowing back into the controller from spawned tasks.
#[derive(Debug)]
pub enum Feedback {
    /// A catalog request finished.
    Worker(WorkerResponse),

    /// A debounce timer fired.
    Debounced {
        /// Debounce epoch the timer was scheduled under.
        epoch: u64,
        /// Input content it was scheduled with.
        text: String,
    },
}

impl From<WorkerResponse> for Feedback {
    fn from(response: WorkerResponse) -> Self {
        Self::Worker(response)
    }
}

enum Step {
    Input(Option<Event>),
    Feedback(Feedback),
}

/// Drives the state machine against real collaborators.
pub struct Controller<R: Renderer> {
    state: AppState,
    worker: CatalogWorker<Feedback>,
    favorites: FavoritesStore,
    renderer: R,
    debouncer: Debouncer,
    feedback_tx: UnboundedSender<Feedback>,
    feedback_rx: UnboundedReceiver<Feedback>,
}

impl<R: Renderer> Controller<R> {
    /// Creates a controller in the startup state.
    ///
    /// Nothing is fetched until [`Event::Start`] is dispatched.
    pub fn new(catalog: Arc<dyn Catalog>, favorites: FavoritesStore, renderer: R, policy: SearchPolicy) -> Self {
        let (feedback_tx, feedback_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(policy),
            worker: CatalogWorker::new(catalog, feedback_tx.clone()),
            favorites,
            renderer,
            debouncer: Debouncer::new(),
            feedback_tx,
            feedback_rx,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Processes `event` and every follow-up event its actions produce.
    ///
    /// Returns `false` once a quit has been requested.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            for action in handle_event(&mut self.state, &event) {
                match self.execute(action) {
                    ControlFlow::Continue(Some(follow_up)) => queue.push_back(follow_up),
                    ControlFlow::Continue(None) => {}
                    ControlFlow::Break(()) => return false,
                }
            }
        }

        true
    }

    /// Waits for the next worker response or debounce firing and processes it.
    pub async fn next_feedback(&mut self) {
        // the controller keeps a sender, so the channel never closes
        if let Some(feedback) = self.feedback_rx.recv().await {
            self.process_feedback(feedback);
        }
    }

    /// Processes feedback that has already arrived, without waiting.
    ///
    /// Returns how many items were processed.
    pub fn drain_feedback(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(feedback) = self.feedback_rx.try_recv() {
            self.process_feedback(feedback);
            processed += 1;
        }
        processed
    }

    /// Runs until `input` closes or a quit is dispatched.
    ///
    /// Feedback keeps being processed while waiting for input.
    pub async fn run(&mut self, mut input: UnboundedReceiver<Event>) {
        loop {
            let step = tokio::select! {
                event = input.recv() => Step::Input(event),
                Some(feedback) = self.feedback_rx.recv() => Step::Feedback(feedback),
            };

            match step {
                Step::Input(Some(event)) => {
                    if !self.dispatch(event) {
                        tracing::debug!("quit requested");
                        break;
                    }
                }
                Step::Input(None) => {
                    tracing::debug!("input closed");
                    break;
                }
                Step::Feedback(feedback) => self.process_feedback(feedback),
            }
        }

        self.debouncer.cancel();
    }

    fn process_feedback(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Worker(response) => {
                self.dispatch(Event::WorkerResponse(response));
            }
            Feedback::Debounced { epoch, text } => {
                if self.debouncer.complete(epoch) {
                    self.dispatch(Event::InputSettled(text));
                }
            }
        }
    }

    fn execute(&mut self, action: Action) -> ControlFlow<(), Option<Event>> {
        match action {
            Action::PostToWorker(message) => {
                self.worker.post(message);
            }
            Action::ScheduleSearch { text, delay } => {
                let feedback = self.feedback_tx.clone();
                self.debouncer.schedule(delay, move |epoch| async move {
                    let _ = feedback.send(Feedback::Debounced { epoch, text });
                });
            }
            Action::CancelScheduledSearch => {
                if self.debouncer.is_pending() {
                    tracing::debug!("dropping pending typed search");
                }
                self.debouncer.cancel();
            }
            Action::LoadFavorites => {
                return ControlFlow::Continue(Some(Event::FavoritesLoaded(self.favorites.load())));
            }
            Action::ToggleFavorite(movie) => {
                let favorites = self.favorites.update(|current| toggle(current, &movie));
                return ControlFlow::Continue(Some(Event::FavoriteToggled {
                    favorites,
                    movie_id: movie.id,
                }));
            }
            Action::Render(command) => self.renderer.render(&command),
            Action::Quit => return ControlFlow::Break(()),
        }

        ControlFlow::Continue(None)
    }
}
