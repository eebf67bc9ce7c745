//! Domain layer for Marquee.
//!
//! Core types shared by every other layer, independent of HTTP, storage and
//! terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie record and identifier
//! - [`trailer`]: Video records and trailer selection
//!
//! # Examples
//!
//! ```
//! use marquee::domain::{Movie, MovieId, Result};
//!
//! fn lookup() -> Result<Movie> {
//!     Ok(Movie::new(MovieId(603), "The Matrix"))
//! }
//! ```

pub mod error;
pub mod movie;
pub mod trailer;

pub use error::{CatalogError, CatalogResult, MarqueeError, Result};
pub use movie::{Movie, MovieId};
pub use trailer::{select_trailer, Trailer, TRAILER_KINDS, VIDEO_HOST};
