//! Error types for Marquee.
//!
//! This module defines the crate-wide error type [`MarqueeError`], the catalog
//! failure taxonomy [`CatalogError`], and the [`Result`] / [`CatalogResult`]
//! aliases used throughout the crate. All errors are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// Failure of a remote catalog lookup.
///
/// Catalog failures are never fatal. They travel back to the controller as
/// values inside worker responses and are turned into inline error messages
/// (or, for trailers, silently absorbed).
///
/// # Examples
///
/// ```
/// use marquee::domain::CatalogError;
///
/// let err = CatalogError::Remote { status: 404 };
/// assert_eq!(err.to_string(), "Remote error: status 404");
/// assert!(!err.is_transport());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("Network error: {0}")]
    Network(String),

    /// The catalog answered with a non-success HTTP status.
    #[error("Remote error: status {status}")]
    Remote {
        /// HTTP status code returned by the catalog.
        status: u16,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Returns `true` for transport-level failures.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// The main error type for Marquee operations.
///
/// Consolidates everything that can go wrong outside the catalog request path:
/// storage, configuration and theme loading. Catalog failures convert into it
/// with `?` through the `#[from]` attribute.
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to a storage backend fails, or when
    /// a storage key is rejected.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog request failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Persisted data could not be interpreted.
    ///
    /// Raised by the favorites store when the stored value is not a list of
    /// movie records. Callers recover by treating the data as empty.
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Marquee operations.
pub type Result<T> = std::result::Result<T, MarqueeError>;

/// Result of a single catalog lookup.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
