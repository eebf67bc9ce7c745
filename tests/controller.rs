//! End-to-end behavior of the controller against a scripted catalog.

mod support;

use marquee::app::{Event, ViewState};
use marquee::domain::{CatalogError, Movie, MovieId, Trailer};
use marquee::storage::FavoritesStore;
use marquee::ui::viewmodel::{
    results_heading, EmptyState, FavoriteLabel, Pane, RenderCommand, DETAIL_ERROR_MESSAGE, FAVORITES_HEADING,
    LIST_ERROR_MESSAGE, POPULAR_HEADING,
};
use std::time::Duration;
use support::{controller, movies, MockCatalog};
use tokio::sync::mpsc;

fn ids(movies: &[Movie]) -> Vec<u64> {
    movies.iter().map(|movie| movie.id.0).collect()
}

#[tokio::test(start_paused = true)]
async fn startup_shows_full_popular_page_with_load_more() {
    let (mut controller, _store) = controller(MockCatalog::new().popular(1, movies(1..21)));

    assert!(controller.dispatch(Event::Start));
    assert!(controller.state().loading);
    controller.next_feedback().await;

    let state = controller.state();
    assert_eq!(state.view, ViewState::Home);
    assert_eq!(state.displayed.len(), 20);
    assert!(state.load_more_visible);
    assert!(!state.loading);
    assert_eq!(controller.renderer().last_heading(), Some(POPULAR_HEADING));
    assert_eq!(controller.renderer().load_more(), Some(true));
}

#[tokio::test(start_paused = true)]
async fn empty_search_shows_no_results_and_hides_load_more() {
    let (mut controller, _store) = controller(MockCatalog::new().popular(1, movies(1..21)));
    controller.dispatch(Event::Start);
    controller.next_feedback().await;

    controller.dispatch(Event::SubmitSearch("zzzzqqq".into()));
    controller.next_feedback().await;

    let state = controller.state();
    assert!(state.displayed.is_empty());
    assert!(!state.load_more_visible);
    assert!(controller
        .renderer()
        .contains(&RenderCommand::Empty(EmptyState::no_results())));
    assert_eq!(controller.renderer().last_heading(), Some(results_heading("zzzzqqq").as_str()));
    assert_eq!(controller.renderer().load_more(), Some(false));
}

#[tokio::test(start_paused = true)]
async fn load_more_appends_next_page() {
    let catalog = MockCatalog::new()
        .search("star", 1, movies(1..21))
        .search("star", 2, movies(21..26));
    let calls = catalog.call_log();
    let (mut controller, _store) = controller(catalog);

    controller.dispatch(Event::SubmitSearch("  star ".into()));
    controller.next_feedback().await;
    assert_eq!(controller.state().search.page(), 1);

    controller.dispatch(Event::LoadMore);
    assert!(!controller.state().load_more_visible, "hidden while the page loads");
    controller.next_feedback().await;

    let state = controller.state();
    assert_eq!(state.search.page(), 2);
    assert_eq!(ids(&state.displayed), (1..26).collect::<Vec<_>>());
    assert!(state.load_more_visible);
    assert_eq!(calls.matching("search"), vec!["search star 1", "search star 2"]);
}

#[tokio::test(start_paused = true)]
async fn new_search_resets_page_and_replaces_results() {
    let catalog = MockCatalog::new()
        .search("star", 1, movies(1..21))
        .search("star", 2, movies(21..41))
        .search("alien", 1, movies(100..103));
    let (mut controller, _store) = controller(catalog);

    controller.dispatch(Event::SubmitSearch("star".into()));
    controller.next_feedback().await;
    controller.dispatch(Event::LoadMore);
    controller.next_feedback().await;
    assert_eq!(controller.state().displayed.len(), 40);

    controller.dispatch(Event::SubmitSearch("alien".into()));
    controller.next_feedback().await;

    let state = controller.state();
    assert_eq!(state.search.page(), 1);
    assert_eq!(ids(&state.displayed), vec![100, 101, 102]);
}

#[tokio::test(start_paused = true)]
async fn keystrokes_within_quiet_period_evaluate_once() {
    let catalog = MockCatalog::new().search("alien", 1, movies(1..4));
    let calls = catalog.call_log();
    let (mut controller, _store) = controller(catalog);

    for text in ["a", "al", "ali", "alie", "alien "] {
        controller.dispatch(Event::InputChanged(text.into()));
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(calls.calls().is_empty());

    // debounce fires, then the search answers
    controller.next_feedback().await;
    controller.next_feedback().await;

    assert_eq!(calls.calls(), vec!["search alien 1"]);
    assert_eq!(controller.state().displayed.len(), 3);
    assert_eq!(controller.drain_feedback(), 0);
}

#[tokio::test(start_paused = true)]
async fn short_input_is_ignored_and_cleared_input_goes_home() {
    let catalog = MockCatalog::new().popular(1, movies(1..21));
    let calls = catalog.call_log();
    let (mut controller, _store) = controller(catalog);

    controller.dispatch(Event::InputChanged("al".into()));
    controller.next_feedback().await;
    assert!(calls.calls().is_empty());

    controller.dispatch(Event::InputChanged("   ".into()));
    controller.next_feedback().await;
    controller.next_feedback().await;

    assert_eq!(calls.calls(), vec!["popular 1"]);
    assert_eq!(controller.state().displayed.len(), 20);
    assert!(controller.renderer().contains(&RenderCommand::ClearInput));
}

#[tokio::test(start_paused = true)]
async fn submit_cancels_pending_typed_search() {
    let catalog = MockCatalog::new().search("dune", 1, movies(1..3));
    let calls = catalog.call_log();
    let (mut controller, _store) = controller(catalog);

    controller.dispatch(Event::InputChanged("dun".into()));
    controller.dispatch(Event::SubmitSearch("dune".into()));
    controller.next_feedback().await;

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(controller.drain_feedback(), 0);
    assert_eq!(calls.calls(), vec!["search dune 1"]);
}

#[tokio::test(start_paused = true)]
async fn favorites_navigation_drops_pending_typed_search() {
    let catalog = MockCatalog::new().search("alien", 1, movies(1..4));
    let calls = catalog.call_log();
    let (mut controller, _store) = controller(catalog);

    controller.dispatch(Event::InputChanged("alien".into()));
    tokio::time::sleep(Duration::from_millis(100)).await;
    controller.dispatch(Event::ShowFavorites);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(controller.drain_feedback(), 0);
    assert_eq!(controller.state().view, ViewState::Favorites);
    assert!(calls.matching("search").is_empty());
}

#[tokio::test(start_paused = true)]
async fn toggling_twice_restores_favorites_and_persists() {
    let movie = Movie::new(MovieId(42), "Arrival");
    let catalog = MockCatalog::new().popular(1, movies(1..3)).detail(movie.clone());
    let (mut controller, store) = controller(catalog);
    let persisted = FavoritesStore::new(store);

    controller.dispatch(Event::Start);
    controller.next_feedback().await;
    controller.dispatch(Event::OpenMovie(MovieId(42)));
    controller.next_feedback().await;
    assert_eq!(controller.renderer().last_detail().unwrap().favorite, FavoriteLabel::Add);

    controller.dispatch(Event::ToggleFavorite);
    assert_eq!(controller.state().favorites.len(), 1);
    assert!(persisted.load().contains(MovieId(42)));
    assert!(controller
        .renderer()
        .contains(&RenderCommand::FavoriteLabel(FavoriteLabel::Remove)));

    controller.dispatch(Event::ToggleFavorite);
    assert_eq!(controller.state().favorites.len(), 0);
    assert!(persisted.load().is_empty());
    assert_eq!(
        controller.renderer().commands.last(),
        Some(&RenderCommand::FavoriteLabel(FavoriteLabel::Add))
    );
}

#[tokio::test(start_paused = true)]
async fn favorites_view_lists_saved_movies_without_load_more() {
    let movie = Movie::new(MovieId(7), "Se7en");
    let catalog = MockCatalog::new()
        .popular(1, movies(1..21))
        .popular(2, movies(21..41))
        .detail(movie.clone());
    let (mut controller, _store) = controller(catalog);

    controller.dispatch(Event::Start);
    controller.next_feedback().await;
    controller.dispatch(Event::LoadMore);
    controller.next_feedback().await;
    assert_eq!(controller.state().search.page(), 2);

    controller.dispatch(Event::ShowFavorites);
    let state = controller.state();
    assert_eq!(state.view, ViewState::Favorites);
    assert!(state.displayed.is_empty());
    assert!(!state.load_more_visible);
    assert_eq!(controller.renderer().last_heading(), Some(FAVORITES_HEADING));
    assert!(controller
        .renderer()
        .contains(&RenderCommand::Empty(EmptyState::no_favorites())));

    controller.dispatch(Event::OpenMovie(MovieId(7)));
    controller.next_feedback().await;
    controller.dispatch(Event::ToggleFavorite);
    controller.dispatch(Event::Back);

    let state = controller.state();
    assert_eq!(state.view, ViewState::Favorites);
    assert_eq!(ids(&state.displayed), vec![7]);
    assert_eq!(controller.renderer().load_more(), Some(false));
}

#[tokio::test(start_paused = true)]
async fn slow_search_never_overwrites_newer_popular_results() {
    let catalog = MockCatalog::new()
        .search_after("alien", 1, movies(100..105), Duration::from_secs(2))
        .popular(1, movies(1..21));
    let (mut controller, _store) = controller(catalog);

    controller.dispatch(Event::SubmitSearch("alien".into()));
    controller.dispatch(Event::ShowHome);

    controller.next_feedback().await;
    assert_eq!(ids(&controller.state().displayed), (1..21).collect::<Vec<_>>());

    // the stale search answer arrives and is dropped
    controller.next_feedback().await;
    let state = controller.state();
    assert_eq!(ids(&state.displayed), (1..21).collect::<Vec<_>>());
    assert_eq!(state.heading, POPULAR_HEADING);
    assert!(state.load_more_visible);
}

#[tokio::test(start_paused = true)]
async fn only_latest_detail_renders() {
    let catalog = MockCatalog::new()
        .detail_after(Movie::new(MovieId(1), "Slow"), Duration::from_secs(3))
        .detail(Movie::new(MovieId(2), "Fast"));
    let (mut controller, _store) = controller(catalog);

    controller.dispatch(Event::OpenMovie(MovieId(1)));
    controller.dispatch(Event::OpenMovie(MovieId(2)));
    controller.next_feedback().await;
    controller.next_feedback().await;

    let details: Vec<_> = controller
        .renderer()
        .commands
        .iter()
        .filter_map(|command| match command {
            RenderCommand::Detail(detail) => Some(detail.movie.id),
            _ => None,
        })
        .collect();
    assert_eq!(details, vec![MovieId(2)]);
    assert_eq!(controller.state().view, ViewState::Details(MovieId(2)));
}

#[tokio::test(start_paused = true)]
async fn detail_failure_shows_message_in_detail_pane() {
    let (mut controller, _store) = controller(MockCatalog::new());

    controller.dispatch(Event::OpenMovie(MovieId(99)));
    controller.next_feedback().await;

    assert!(controller.renderer().contains(&RenderCommand::Error {
        pane: Pane::Detail,
        message: DETAIL_ERROR_MESSAGE.to_string(),
    }));
    assert!(controller.state().detail.is_none());
    assert!(!controller.state().loading);
}

#[tokio::test(start_paused = true)]
async fn list_failure_replaces_results_with_message() {
    let catalog = MockCatalog::new().popular_fails(1, CatalogError::Network("connection refused".into()));
    let (mut controller, _store) = controller(catalog);

    controller.dispatch(Event::Start);
    controller.next_feedback().await;

    assert!(controller.renderer().contains(&RenderCommand::Error {
        pane: Pane::List,
        message: LIST_ERROR_MESSAGE.to_string(),
    }));
    assert!(controller.state().displayed.is_empty());
    assert_eq!(controller.renderer().load_more(), Some(false));
}

#[tokio::test(start_paused = true)]
async fn trailer_is_first_youtube_trailer_or_absent() {
    let with = Movie::new(MovieId(1), "With trailer");
    let without = Movie::new(MovieId(2), "Without trailer");
    let catalog = MockCatalog::new()
        .detail(with)
        .detail(without)
        .videos(
            MovieId(1),
            Ok(vec![
                Trailer::new("clip", "YouTube", "Clip"),
                Trailer::new("vimeo", "Vimeo", "Trailer"),
                Trailer::new("teaser", "YouTube", "Teaser"),
                Trailer::new("trailer", "YouTube", "Trailer"),
            ]),
        )
        .videos(MovieId(2), Err(CatalogError::Remote { status: 500 }));
    let (mut controller, _store) = controller(catalog);

    controller.dispatch(Event::OpenMovie(MovieId(1)));
    controller.next_feedback().await;
    let trailer = controller.renderer().last_detail().unwrap().trailer.clone();
    assert_eq!(trailer.map(|t| t.key), Some("teaser".to_string()));

    controller.dispatch(Event::OpenMovie(MovieId(2)));
    controller.next_feedback().await;
    let detail = controller.renderer().last_detail().unwrap();
    assert_eq!(detail.movie.id, MovieId(2));
    assert!(detail.trailer.is_none());
}

#[tokio::test(start_paused = true)]
async fn back_returns_to_search_results() {
    let catalog = MockCatalog::new()
        .search("heat", 1, movies(1..4))
        .detail(Movie::new(MovieId(2), "Heat"));
    let calls = catalog.call_log();
    let (mut controller, _store) = controller(catalog);

    controller.dispatch(Event::SubmitSearch("heat".into()));
    controller.next_feedback().await;
    controller.dispatch(Event::OpenMovie(MovieId(2)));
    controller.next_feedback().await;

    controller.dispatch(Event::Back);
    assert_eq!(controller.state().view, ViewState::Home);
    controller.next_feedback().await;

    assert_eq!(controller.renderer().last_heading(), Some(results_heading("heat").as_str()));
    assert_eq!(calls.matching("search"), vec!["search heat 1", "search heat 1"]);
    assert_eq!(controller.state().displayed.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn run_processes_input_until_quit() {
    let (mut controller, _store) = controller(MockCatalog::new().popular(1, movies(1..21)));
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        tx.send(Event::Start).unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        tx.send(Event::Quit).unwrap();
        // keep the channel open so only the quit ends the loop
        tokio::time::sleep(Duration::from_secs(60)).await;
    });

    controller.run(rx).await;

    assert_eq!(controller.state().displayed.len(), 20);
    assert!(controller.renderer().commands.iter().any(|command| matches!(command, RenderCommand::Movies { .. })));
}
