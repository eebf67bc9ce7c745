//! Trailer selection.
//!
//! The catalog returns every video attached to a movie (clips, featurettes,
//! trailers on several hosts). The client shows at most one: the first video,
//! in catalog order, hosted on [`VIDEO_HOST`] whose type is one of
//! [`TRAILER_KINDS`]. There is no ranking beyond list order.

use serde::{Deserialize, Serialize};

/// The only video host the client can embed.
pub const VIDEO_HOST: &str = "YouTube";

/// Video types accepted as a trailer.
pub const TRAILER_KINDS: [&str; 2] = ["Trailer", "Teaser"];

/// A video attached to a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    /// Host-specific video key.
    pub key: String,
    /// Hosting site name, e.g. `"YouTube"`.
    pub site: String,
    /// Video type tag, e.g. `"Trailer"` or `"Teaser"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Trailer {
    /// Creates a video record without a display name.
    pub fn new(key: impl Into<String>, site: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            site: site.into(),
            kind: kind.into(),
            name: None,
        }
    }

    /// Whether this video qualifies as the movie's trailer.
    #[must_use]
    pub fn is_candidate(&self) -> bool {
        self.site == VIDEO_HOST && TRAILER_KINDS.contains(&self.kind.as_str())
    }

    /// Browser URL for the video.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.key)
    }

    /// Embeddable player URL for the video.
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.key)
    }
}

/// Picks the trailer to show from a movie's video list.
///
/// Returns the first candidate in list order, or `None` when nothing matches.
///
/// # Examples
///
/// ```
/// use marquee::domain::{select_trailer, Trailer};
///
/// let videos = vec![
///     Trailer::new("a", "Vimeo", "Trailer"),
///     Trailer::new("b", "YouTube", "Teaser"),
///     Trailer::new("c", "YouTube", "Trailer"),
/// ];
/// assert_eq!(select_trailer(&videos).map(|t| t.key.as_str()), Some("b"));
/// ```
#[must_use]
pub fn select_trailer(videos: &[Trailer]) -> Option<&Trailer> {
    videos.iter().find(|video| video.is_candidate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_youtube_match_wins_over_later_trailer() {
        let videos = vec![
            Trailer::new("vimeo-trailer", "Vimeo", "Trailer"),
            Trailer::new("yt-teaser", "YouTube", "Teaser"),
            Trailer::new("yt-trailer", "YouTube", "Trailer"),
        ];

        let selected = select_trailer(&videos).unwrap();
        assert_eq!(selected.key, "yt-teaser");
        assert_eq!(selected.kind, "Teaser");
    }

    #[test]
    fn clips_and_other_hosts_are_not_trailers() {
        let videos = vec![
            Trailer::new("clip", "YouTube", "Clip"),
            Trailer::new("bts", "YouTube", "Behind the Scenes"),
            Trailer::new("vimeo", "Vimeo", "Teaser"),
        ];

        assert!(select_trailer(&videos).is_none());
        assert!(select_trailer(&[]).is_none());
    }

    #[test]
    fn decodes_type_field() {
        let json = r#"{"key": "zSWdZVtXT7E", "site": "YouTube", "type": "Trailer", "name": "Official Trailer", "size": 1080}"#;
        let trailer: Trailer = serde_json::from_str(json).unwrap();

        assert!(trailer.is_candidate());
        assert_eq!(trailer.watch_url(), "https://www.youtube.com/watch?v=zSWdZVtXT7E");
        assert_eq!(trailer.embed_url(), "https://www.youtube.com/embed/zSWdZVtXT7E");
    }
}
