//! Background work for the controller.
//!
//! Catalog requests and the search debounce both run as spawned tokio tasks
//! and report back to the controller over its feedback channel.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Catalog worker executing requests
//! - `debounce`: Cancellable single-slot delay for search input

pub mod debounce;
pub mod handler;
pub mod messages;

pub use debounce::Debouncer;
pub use handler::{handle_message, CatalogWorker};
pub use messages::{WorkerMessage, WorkerResponse};
