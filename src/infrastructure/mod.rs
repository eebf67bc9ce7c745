//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves the platform locations marquee reads and writes:
//! the data directory holding favorites and logs, the default config file and
//! tilde expansion for user-supplied paths.

pub mod paths;

pub use paths::{config_path, data_dir, expand_tilde, APP_DIR_NAME};
