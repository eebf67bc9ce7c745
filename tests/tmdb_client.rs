//! HTTP mapping of the TMDB client against a local stub server.
//!
//! Starts an axum server that imitates the TMDB v3 endpoints and exercises it
//! through `TmdbCatalog`.

use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use marquee::catalog::{Catalog, ListRequest, TmdbCatalog};
use marquee::domain::{CatalogError, MovieId};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

const API_KEY: &str = "test-key";

type Params = Query<HashMap<String, String>>;

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "status_code": 7, "status_message": "Invalid API key: You must be granted a valid key." })),
    )
        .into_response()
}

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("api_key").map(String::as_str) == Some(API_KEY)
}

async fn popular(Query(params): Params) -> Response {
    if !authorized(&params) {
        return unauthorized();
    }
    let page = params.get("page").cloned().unwrap_or_default();
    let language = params.get("language").cloned().unwrap_or_else(|| "none".to_string());
    Json(json!({
        "page": 1,
        "results": [
            { "id": 1, "title": format!("Popular page {page}"), "overview": language },
            { "id": 2, "title": "Sparse", "poster_path": null },
            { "id": 3, "title": "Nulls", "overview": null, "release_date": null, "vote_average": null },
        ],
        "total_pages": 3,
    }))
    .into_response()
}

async fn search(Query(params): Params) -> Response {
    if !authorized(&params) {
        return unauthorized();
    }
    let query = params.get("query").cloned().unwrap_or_default();
    if query == "nothing" {
        return Json(json!({ "page": 1, "results": [] })).into_response();
    }
    Json(json!({
        "page": 1,
        "results": [{ "id": 10, "title": query, "release_date": "1979-05-25", "vote_average": 8.4 }],
    }))
    .into_response()
}

async fn detail(Path(id): Path<u64>, Query(params): Params) -> Response {
    if !authorized(&params) {
        return unauthorized();
    }
    match id {
        404 => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status_code": 34, "status_message": "The resource you requested could not be found." })),
        )
            .into_response(),
        500 => (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], "{ not json").into_response(),
        _ => Json(json!({
            "id": id,
            "title": "Alien",
            "overview": "In space no one can hear you scream.",
            "release_date": "1979-05-25",
            "vote_average": 8.1,
            "poster_path": "/alien.jpg",
            "runtime": 117,
        }))
        .into_response(),
    }
}

async fn videos(Path(id): Path<u64>, Query(params): Params) -> Response {
    if !authorized(&params) {
        return unauthorized();
    }
    if id == 2 {
        return Json(json!({ "id": id, "results": [] })).into_response();
    }
    Json(json!({
        "id": id,
        "results": [
            { "key": "bts", "site": "YouTube", "type": "Behind the Scenes", "name": "Making of" },
            { "key": "vim", "site": "Vimeo", "type": "Trailer" },
            { "key": "yt-trailer", "site": "YouTube", "type": "Trailer", "name": "Official Trailer" },
            { "key": "yt-teaser", "site": "YouTube", "type": "Teaser" },
        ],
    }))
    .into_response()
}

/// Bind to port 0 and return the base URL.
async fn start_server() -> String {
    let app = Router::new()
        .route("/movie/popular", get(popular))
        .route("/search/movie", get(search))
        .route("/movie/{id}", get(detail))
        .route("/movie/{id}/videos", get(videos));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base: &str, key: &str) -> TmdbCatalog {
    TmdbCatalog::new(key, base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn popular_page_decodes_with_defaults() {
    let base = start_server().await;
    let catalog = client(&base, API_KEY);

    let movies = catalog.list_popular(2).await.unwrap();

    assert_eq!(movies.len(), 3);
    assert_eq!(movies[0].title, "Popular page 2");
    assert_eq!(movies[0].overview, "none");
    assert_eq!(movies[1].id, MovieId(2));
    assert!(movies[1].poster_path.is_none());
    assert!(movies[1].overview.is_empty());
    assert_eq!(movies[1].vote_average, 0.0);
    assert_eq!(movies[2].id, MovieId(3));
    assert!(movies[2].overview.is_empty());
    assert_eq!(movies[2].release_year(), None);
}

#[tokio::test]
async fn language_is_sent_when_configured() {
    let base = start_server().await;
    let catalog = client(&base, API_KEY).with_language("de-DE");

    let movies = catalog.list(&ListRequest::Popular { page: 1 }).await.unwrap();
    assert_eq!(movies[0].overview, "de-DE");
}

#[tokio::test]
async fn search_sends_term_and_page() {
    let base = start_server().await;
    let catalog = client(&base, API_KEY);

    let movies = catalog.search("star wars & more", 1).await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "star wars & more");
    assert_eq!(movies[0].release_year(), Some(1979));

    assert!(catalog.search("nothing", 1).await.unwrap().is_empty());
}

#[tokio::test]
async fn rejected_key_maps_to_remote_status() {
    let base = start_server().await;
    let catalog = client(&base, "wrong-key");

    let err = catalog.list_popular(1).await.unwrap_err();
    assert_eq!(err, CatalogError::Remote { status: 401 });
}

#[tokio::test]
async fn detail_maps_statuses_and_bodies() {
    let base = start_server().await;
    let catalog = client(&base, API_KEY);

    let movie = catalog.get_detail(MovieId(348)).await.unwrap();
    assert_eq!(movie.id, MovieId(348));
    assert_eq!(movie.title, "Alien");
    assert_eq!(movie.poster_path.as_deref(), Some("/alien.jpg"));

    let err = catalog.get_detail(MovieId(404)).await.unwrap_err();
    assert_eq!(err, CatalogError::Remote { status: 404 });

    let err = catalog.get_detail(MovieId(500)).await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn trailer_is_first_youtube_trailer_or_teaser() {
    let base = start_server().await;
    let catalog = client(&base, API_KEY);

    let videos = catalog.list_videos(MovieId(1)).await.unwrap();
    assert_eq!(videos.len(), 4);

    let trailer = catalog.get_trailer(MovieId(1)).await.unwrap();
    assert_eq!(trailer.key, "yt-trailer");
    assert_eq!(trailer.watch_url(), "https://www.youtube.com/watch?v=yt-trailer");

    assert!(catalog.get_trailer(MovieId(2)).await.is_none());
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let catalog = client(&format!("http://{addr}"), API_KEY);
    let err = catalog.list_popular(1).await.unwrap_err();
    assert!(matches!(err, CatalogError::Network(_)), "got {err:?}");

    // trailer lookups absorb the failure
    assert!(catalog.get_trailer(MovieId(1)).await.is_none());
}
