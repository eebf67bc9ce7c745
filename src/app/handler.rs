//! Event handling and state transition logic.
//!
//! This module implements the state machine of the client: it takes user
//! input, favorites results and worker responses, mutates [`AppState`] and
//! returns the actions to execute. It performs no I/O itself.
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `ShowHome`, `ShowFavorites`, `OpenMovie`, `Back`
//! - **Search**: `SubmitSearch`, `InputChanged`, `InputSettled`, `LoadMore`
//! - **Favorites**: `ToggleFavorite`, `FavoritesLoaded`, `FavoriteToggled`
//! - **Worker**: `WorkerResponse` with typed response variants
//! - **Lifecycle**: `Start`, `Quit`
//!
//! # Ordering
//!
//! Every list and detail request is issued under a fresh generation ticket.
//! Responses whose ticket is no longer current are dropped without touching
//! state, so a slow response can never overwrite a newer one.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::default();
//! let actions = handle_event(&mut state, &Event::Start);
//! assert!(actions.iter().any(|action| matches!(action, Action::PostToWorker(_))));
//! ```

use super::generation::Slot;
use super::modes::{ListMode, ReturnView, ViewState};
use super::state::InputIntent;
use crate::app::{Action, AppState};
use crate::catalog::ListRequest;
use crate::domain::{CatalogResult, Movie, MovieId, Trailer};
use crate::storage::FavoritesSet;
use crate::ui::viewmodel::{
    results_heading, DetailView, EmptyState, FavoriteLabel, Pane, RenderCommand, DETAIL_ERROR_MESSAGE,
    FAVORITES_HEADING, LIST_ERROR_MESSAGE, POPULAR_HEADING,
};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, favorites results or worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Application startup: prime favorites and show popular titles.
    Start,

    /// The user submitted the search input.
    SubmitSearch(String),

    /// The search input changed (each keystroke).
    InputChanged(String),

    /// The search input has been quiet for the configured period.
    ///
    /// Produced by the controller's debounce, not by the user.
    InputSettled(String),

    /// The user opened a movie card.
    OpenMovie(MovieId),

    /// Leave the detail view.
    Back,

    /// Home navigation: popular titles, search reset.
    ShowHome,

    /// Favorites navigation.
    ShowFavorites,

    /// Fetch and append the next page.
    LoadMore,

    /// Toggle the movie in the detail pane.
    ToggleFavorite,

    /// The favorites store was read.
    FavoritesLoaded(FavoritesSet),

    /// The favorites store was updated by a toggle.
    FavoriteToggled {
        /// Favorites after the toggle.
        favorites: FavoritesSet,
        /// Movie that was toggled.
        movie_id: MovieId,
    },

    /// Wraps a response from the catalog worker.
    WorkerResponse(WorkerResponse),

    /// Stop the application.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// Actions to execute in order. Empty when the event does not apply in the
/// current view (e.g. `Back` outside Details) or answers a stale request.
pub fn handle_event(state: &mut AppState, event: &Event) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event), view = ?state.view).entered();

    match event {
        Event::Start => {
            tracing::debug!("starting up");
            let mut actions = vec![Action::LoadFavorites];
            actions.extend(go_home(state));
            actions
        }
        Event::SubmitSearch(text) => {
            let term = text.trim();
            if term.is_empty() {
                tracing::debug!("ignoring empty search submission");
                return vec![];
            }
            state.input.clone_from(text);
            let mut actions = vec![Action::CancelScheduledSearch];
            actions.extend(start_search(state, term));
            actions
        }
        Event::InputChanged(text) => {
            state.input.clone_from(text);
            vec![Action::ScheduleSearch {
                text: text.clone(),
                delay: state.policy.quiet_period,
            }]
        }
        Event::InputSettled(text) => match state.policy.classify(text) {
            InputIntent::Search(term) => start_search(state, &term),
            InputIntent::Home => go_home(state),
            InputIntent::Ignore => {
                tracing::trace!(input = %text, "input too short, waiting for more");
                vec![]
            }
        },
        Event::OpenMovie(id) => open_movie(state, *id),
        Event::Back => {
            let ViewState::Details(id) = state.view else {
                return vec![];
            };
            tracing::debug!(movie_id = %id, return_to = ?state.return_to, "leaving detail view");
            leave_details(state);

            match state.return_to {
                ReturnView::Favorites => show_favorites(state),
                ReturnView::Home => {
                    state.view = ViewState::Home;
                    state.search.reset_page();
                    let heading = list_heading(state);
                    let mut actions = show_list(state, heading);
                    actions.extend(fetch_list(state, ListMode::Replace));
                    actions
                }
            }
        }
        Event::ShowHome => go_home(state),
        Event::ShowFavorites => show_favorites(state),
        Event::LoadMore => {
            if state.view != ViewState::Home || !state.load_more_visible {
                tracing::debug!(visible = state.load_more_visible, "load more not available");
                return vec![];
            }
            let page = state.search.advance();
            tracing::debug!(page, term = %state.search.term(), "loading next page");
            fetch_list(state, ListMode::for_page(page))
        }
        Event::ToggleFavorite => match (state.view, &state.detail) {
            (ViewState::Details(_), Some(movie)) => vec![Action::ToggleFavorite(movie.clone())],
            _ => {
                tracing::debug!("no loaded detail to toggle");
                vec![]
            }
        },
        Event::FavoritesLoaded(favorites) => {
            state.favorites = favorites.clone();
            if state.view != ViewState::Favorites {
                return vec![];
            }
            render_favorites(state)
        }
        Event::FavoriteToggled { favorites, movie_id } => {
            state.favorites = favorites.clone();
            let now_favorite = state.favorites.contains(*movie_id);
            tracing::debug!(movie_id = %movie_id, now_favorite, count = state.favorites.len(), "favorite toggled");

            match (state.view, state.favorite_label()) {
                (ViewState::Details(open), Some(label)) if open == *movie_id => {
                    vec![Action::Render(RenderCommand::FavoriteLabel(label))]
                }
                _ => vec![],
            }
        }
        Event::WorkerResponse(response) => {
            if !state.generations.is_current(response.ticket()) {
                tracing::debug!(ticket = ?response.ticket(), "discarding stale response");
                return vec![];
            }
            match response {
                WorkerResponse::ListLoaded {
                    request, mode, result, ..
                } => list_loaded(state, request, *mode, result),
                WorkerResponse::DetailLoaded { id, detail, trailer, .. } => detail_loaded(state, *id, detail, trailer),
            }
        }
        Event::Quit => vec![Action::Quit],
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Start => "start",
        Event::SubmitSearch(_) => "submit_search",
        Event::InputChanged(_) => "input_changed",
        Event::InputSettled(_) => "input_settled",
        Event::OpenMovie(_) => "open_movie",
        Event::Back => "back",
        Event::ShowHome => "show_home",
        Event::ShowFavorites => "show_favorites",
        Event::LoadMore => "load_more",
        Event::ToggleFavorite => "toggle_favorite",
        Event::FavoritesLoaded(_) => "favorites_loaded",
        Event::FavoriteToggled { .. } => "favorite_toggled",
        Event::WorkerResponse(_) => "worker_response",
        Event::Quit => "quit",
    }
}

/// Heading for the Home view's current search context.
fn list_heading(state: &AppState) -> String {
    if state.search.is_searching() {
        results_heading(state.search.term())
    } else {
        POPULAR_HEADING.to_string()
    }
}

/// Switches to the list pane under `heading`.
fn show_list(state: &mut AppState, heading: String) -> Vec<Action> {
    state.heading.clone_from(&heading);
    vec![
        Action::Render(RenderCommand::ShowPane(Pane::List)),
        Action::Render(RenderCommand::Heading(heading)),
    ]
}

/// Discards any detail result, shown or in flight.
fn leave_details(state: &mut AppState) {
    state.generations.invalidate(Slot::Detail);
    state.detail = None;
    state.trailer = None;
}

/// Requests the current search context's page under a fresh list ticket.
///
/// Load-more stays hidden until the page arrives.
fn fetch_list(state: &mut AppState, mode: ListMode) -> Vec<Action> {
    let ticket = state.generations.begin(Slot::List);
    state.loading = true;
    state.load_more_visible = false;

    vec![
        Action::Render(RenderCommand::Loading(true)),
        Action::Render(RenderCommand::LoadMore(false)),
        Action::PostToWorker(WorkerMessage::fetch_list(ticket, state.search.request(), mode)),
    ]
}

fn go_home(state: &mut AppState) -> Vec<Action> {
    tracing::debug!("navigating home");
    leave_details(state);
    state.view = ViewState::Home;
    state.return_to = ReturnView::Home;
    state.search.reset();
    state.input.clear();

    let mut actions = vec![Action::CancelScheduledSearch];
    actions.extend(show_list(state, POPULAR_HEADING.to_string()));
    actions.push(Action::Render(RenderCommand::ClearInput));
    actions.extend(fetch_list(state, ListMode::Replace));
    actions
}

fn start_search(state: &mut AppState, term: &str) -> Vec<Action> {
    tracing::debug!(term = %term, "starting search");
    leave_details(state);
    state.view = ViewState::Home;
    state.return_to = ReturnView::Home;
    state.search.begin_search(term);

    let mut actions = show_list(state, results_heading(term));
    actions.extend(fetch_list(state, ListMode::Replace));
    actions
}

fn show_favorites(state: &mut AppState) -> Vec<Action> {
    tracing::debug!("showing favorites");
    leave_details(state);
    state.generations.invalidate(Slot::List);
    state.view = ViewState::Favorites;
    state.return_to = ReturnView::Favorites;
    state.search.reset_page();
    state.loading = false;
    state.load_more_visible = false;

    let mut actions = vec![Action::CancelScheduledSearch];
    actions.extend(show_list(state, FAVORITES_HEADING.to_string()));
    actions.push(Action::Render(RenderCommand::LoadMore(false)));
    actions.push(Action::LoadFavorites);
    actions
}

fn render_favorites(state: &mut AppState) -> Vec<Action> {
    state.displayed = state.favorites.movies().to_vec();
    state.load_more_visible = false;

    let mut actions = vec![Action::Render(RenderCommand::Movies {
        movies: state.displayed.clone(),
        mode: ListMode::Replace,
        highlight: None,
    })];
    if state.displayed.is_empty() {
        actions.push(Action::Render(RenderCommand::Empty(EmptyState::no_favorites())));
    }
    actions.push(Action::Render(RenderCommand::LoadMore(false)));
    actions
}

fn open_movie(state: &mut AppState, id: MovieId) -> Vec<Action> {
    match state.view {
        ViewState::Home => state.return_to = ReturnView::Home,
        ViewState::Favorites => state.return_to = ReturnView::Favorites,
        // detail to detail keeps the original list context
        ViewState::Details(_) => {}
    }
    tracing::debug!(movie_id = %id, return_to = ?state.return_to, "opening movie");

    state.generations.invalidate(Slot::List);
    state.view = ViewState::Details(id);
    state.detail = None;
    state.trailer = None;
    state.loading = true;
    state.load_more_visible = false;
    let ticket = state.generations.begin(Slot::Detail);

    vec![
        Action::CancelScheduledSearch,
        Action::Render(RenderCommand::ShowPane(Pane::Detail)),
        Action::Render(RenderCommand::Loading(true)),
        Action::PostToWorker(WorkerMessage::fetch_detail(ticket, id)),
    ]
}

fn list_loaded(
    state: &mut AppState,
    request: &ListRequest,
    mode: ListMode,
    result: &CatalogResult<Vec<Movie>>,
) -> Vec<Action> {
    state.loading = false;
    let mut actions = vec![Action::Render(RenderCommand::Loading(false))];

    let movies = match result {
        Ok(movies) => movies,
        Err(e) => {
            tracing::warn!(error = %e, transport = e.is_transport(), page = request.page(), "list request failed");
            state.displayed.clear();
            state.load_more_visible = false;
            actions.push(Action::Render(RenderCommand::Error {
                pane: Pane::List,
                message: LIST_ERROR_MESSAGE.to_string(),
            }));
            actions.push(Action::Render(RenderCommand::LoadMore(false)));
            return actions;
        }
    };

    let highlight = match request {
        ListRequest::Search { term, .. } => Some(term.clone()),
        ListRequest::Popular { .. } => None,
    };

    match mode {
        ListMode::Replace => state.displayed.clone_from(movies),
        ListMode::Append => state.displayed.extend(movies.iter().cloned()),
    }
    actions.push(Action::Render(RenderCommand::Movies {
        movies: movies.clone(),
        mode,
        highlight,
    }));

    if mode == ListMode::Replace && movies.is_empty() && request.is_search() {
        actions.push(Action::Render(RenderCommand::Empty(EmptyState::no_results())));
    }

    state.load_more_visible = !movies.is_empty();
    tracing::debug!(
        received = movies.len(),
        displayed = state.displayed.len(),
        page = request.page(),
        load_more = state.load_more_visible,
        "list page applied"
    );
    actions.push(Action::Render(RenderCommand::LoadMore(state.load_more_visible)));
    actions
}

fn detail_loaded(
    state: &mut AppState,
    id: MovieId,
    detail: &CatalogResult<Movie>,
    trailer: &Option<Trailer>,
) -> Vec<Action> {
    if state.view != ViewState::Details(id) {
        tracing::debug!(movie_id = %id, "detail no longer wanted");
        return vec![];
    }
    state.loading = false;

    match detail {
        Ok(movie) => {
            state.detail = Some(movie.clone());
            state.trailer.clone_from(trailer);
            let favorite = FavoriteLabel::for_membership(state.favorites.contains(id));
            tracing::debug!(movie_id = %id, has_trailer = trailer.is_some(), "detail loaded");

            vec![
                Action::Render(RenderCommand::Loading(false)),
                Action::Render(RenderCommand::Detail(DetailView {
                    movie: movie.clone(),
                    trailer: trailer.clone(),
                    favorite,
                })),
            ]
        }
        Err(e) => {
            tracing::warn!(movie_id = %id, error = %e, transport = e.is_transport(), "detail request failed");
            vec![
                Action::Render(RenderCommand::Loading(false)),
                Action::Render(RenderCommand::Error {
                    pane: Pane::Detail,
                    message: DETAIL_ERROR_MESSAGE.to_string(),
                }),
            ]
        }
    }
}
