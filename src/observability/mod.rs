//! Structured logging to a rotating file.
//!
//! The terminal front end owns stdout, so log output goes to a file in the data
//! directory instead.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → marquee.log (+ rotated backups)
//! ```
//!
//! # Configuration
//!
//! The log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust,no_run
//! use marquee::observability::init_tracing;
//! use marquee::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("client initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
