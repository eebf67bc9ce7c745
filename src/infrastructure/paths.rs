//! Platform path resolution.
//!
//! Locations follow the platform conventions reported by the `dirs` crate:
//!
//! | Location    | Linux                              | macOS                                        |
//! |-------------|------------------------------------|----------------------------------------------|
//! | data dir    | `~/.local/share/marquee`           | `~/Library/Application Support/marquee`      |
//! | config file | `~/.config/marquee/config.toml`    | `~/Library/Application Support/marquee/config.toml` |

use std::path::PathBuf;

/// Directory name used under the platform data and config roots.
pub const APP_DIR_NAME: &str = "marquee";

/// Name of the default configuration file.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the data directory for marquee storage.
///
/// Favorites (`favoriteMovies.json`) and the log file live here. Falls back to
/// the current directory when the platform reports no data directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Returns the default configuration file path, if the platform has a config
/// directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use marquee::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home.to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}
