//! Color themes for the terminal renderer.
//!
//! A theme is a named palette of hex colors, read from TOML. Two palettes are
//! compiled in (`catppuccin-mocha`, the default, and `catppuccin-latte`); any
//! other palette can be loaded from a file. Colors are emitted as 24-bit SGR
//! escape sequences.
//!
//! # Theme File
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! rating_fg = "#f9e2af"
//! favorite_fg = "#f5c2e7"
//! link_fg = "#89dceb"
//! ```
//!
//! # Example
//!
//! ```rust
//! use marquee::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! let title = format!("{}{}Alien{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
//! assert!(title.ends_with("\u{1b}[0m"));
//! ```

use crate::domain::error::{MarqueeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Heading text color.
    pub header_fg: String,
    /// Optional heading background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (hints, loading indicator).
    pub text_dim: String,

    /// Separator line color.
    pub border: String,

    /// Search term highlight foreground.
    pub match_highlight_fg: String,
    /// Search term highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Inline error message color.
    pub error_fg: String,

    /// Rating label color.
    pub rating_fg: String,

    /// Favorite action color.
    pub favorite_fg: String,

    /// Poster and trailer link color.
    pub link_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Theme`] if the file cannot be read or its
    /// content is not a valid theme.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use marquee::ui::theme::Theme;
    ///
    /// let theme = Theme::from_file("/path/to/theme.toml")?;
    /// # Ok::<(), marquee::MarqueeError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| MarqueeError::Theme(format!("failed to read theme file {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| MarqueeError::Theme(format!("failed to parse theme TOML {}: {e}", path.display())))
    }

    /// Parses `#rrggbb` (leading `#` optional) into its channels.
    fn parse_hex(hex: &str) -> Option<[u8; 3]> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some([channel(0)?, channel(2)?, channel(4)?])
    }

    /// 24-bit color escape for SGR `layer` (38 foreground, 48 background).
    ///
    /// Unparsable colors render as white.
    fn truecolor(layer: u8, hex: &str) -> String {
        let [r, g, b] = Self::parse_hex(hex).unwrap_or([255; 3]);
        format!("\u{1b}[{layer};2;{r};{g};{b}m")
    }

    /// Foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        Self::truecolor(38, hex)
    }

    /// Background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        Self::truecolor(48, hex)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse. The built-ins are embedded
    /// at compile time and covered by tests.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::default().name, "catppuccin-mocha");
        assert_eq!(Theme::from_name("catppuccin-latte").unwrap().name, "catppuccin-latte");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_colors_become_ansi_sequences() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("bogus"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file_errors_are_theme_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"broken\"").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(MarqueeError::Theme(_))));
        assert!(matches!(Theme::from_file("/nonexistent/theme.toml"), Err(MarqueeError::Theme(_))));
    }
}
