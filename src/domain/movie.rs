//! Movie domain model.
//!
//! A [`Movie`] is a catalog entry as returned by list, search and detail
//! lookups. Field names follow the catalog's wire format so the same record can
//! be decoded from a response and persisted into the favorites list unchanged.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Format of the catalog's `release_date` field.
const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Stable catalog identifier of a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// A movie record from the catalog.
///
/// Optional wire fields default when absent or `null`: an empty overview, an
/// empty release date and a rating of `0.0`. Records are immutable once
/// fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
}

/// Decodes an explicit `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Movie {
    /// Creates a movie with only an identifier and title set.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee::domain::{Movie, MovieId};
    ///
    /// let movie = Movie::new(MovieId(603), "The Matrix");
    /// assert_eq!(movie.title, "The Matrix");
    /// assert!(movie.poster_path.is_none());
    /// ```
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            overview: String::new(),
            release_date: String::new(),
            vote_average: 0.0,
        }
    }

    /// Returns the release year, or `None` when the date is missing or not in
    /// `YYYY-MM-DD` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee::domain::{Movie, MovieId};
    ///
    /// let mut movie = Movie::new(MovieId(603), "The Matrix");
    /// movie.release_date = "1999-03-30".to_string();
    /// assert_eq!(movie.release_year(), Some(1999));
    ///
    /// movie.release_date.clear();
    /// assert_eq!(movie.release_year(), None);
    /// ```
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(&self.release_date, RELEASE_DATE_FORMAT)
            .ok()
            .map(|date| date.year())
    }

    /// Formats the average rating with one decimal, e.g. `"7.4 / 10"`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1} / 10", self.vote_average)
    }

    /// Builds the full poster URL from the configured image base.
    ///
    /// Returns `None` when the catalog has no poster for this movie.
    #[must_use]
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{}{path}", image_base_url.trim_end_matches('/')))
    }

    /// Title with the release year appended when known, e.g. `"Heat (1995)"`.
    #[must_use]
    pub fn display_title(&self) -> String {
        self.release_year().map_or_else(
            || self.title.clone(),
            |year| format!("{} ({year})", self.title),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_null_optional_fields_as_defaults() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": 1, "title": "X", "poster_path": null, "overview": null, "release_date": null, "vote_average": null}"#,
        )
        .unwrap();

        assert!(movie.poster_path.is_none());
        assert!(movie.overview.is_empty());
        assert_eq!(movie.release_year(), None);
        assert_eq!(movie.rating_label(), "0.0 / 10");

        let page: Vec<Movie> =
            serde_json::from_str(r#"[{"id": 1, "title": "A"}, {"id": 2, "title": "B", "overview": null}]"#).unwrap();
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn decodes_catalog_record_with_missing_optional_fields() {
        let movie: Movie = serde_json::from_str(r#"{"id": 550, "title": "Fight Club"}"#).unwrap();

        assert_eq!(movie.id, MovieId(550));
        assert!(movie.overview.is_empty());
        assert!(movie.poster_path.is_none());
        assert!(movie.release_year().is_none());
        assert_eq!(movie.rating_label(), "0.0 / 10");
    }

    #[test]
    fn ignores_unknown_catalog_fields() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
            "overview": "Cobb steals secrets.",
            "release_date": "2010-07-15",
            "vote_average": 8.369,
            "adult": false,
            "genre_ids": [28, 878]
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();

        assert_eq!(movie.release_year(), Some(2010));
        assert_eq!(movie.rating_label(), "8.4 / 10");
        assert_eq!(movie.display_title(), "Inception (2010)");
        assert_eq!(
            movie.poster_url("https://image.tmdb.org/t/p/w500/").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg")
        );
    }

    #[test]
    fn parses_movie_id_from_user_input() {
        assert_eq!(" 603 ".parse::<MovieId>(), Ok(MovieId(603)));
        assert!("abc".parse::<MovieId>().is_err());
    }
}
