//! Theme preference and palettes
//!
//! The dark/light preference persists across sessions: it is read once at
//! startup and written back on every toggle. The active palette reaches
//! the view tree through app state rather than ad hoc global reads.

use std::fs;
use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{LinkdeckError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// Read the persisted preference; missing or unreadable files fall
    /// back to the default without being treated as errors.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<ThemeFile>(&content) {
                Ok(file) => file.theme,
                Err(e) => {
                    warn!(
                        "Ignoring malformed theme file {}: {}",
                        path.as_ref().display(),
                        e
                    );
                    Theme::default()
                }
            },
            Err(_) => Theme::default(),
        }
    }

    /// Persist the preference. Called on every toggle.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let content = toml::to_string(&ThemeFile { theme: self })
            .map_err(|e| LinkdeckError::config(e.to_string()))?;
        fs::write(&path, content)
            .map_err(|e| LinkdeckError::config(format!("failed to save theme: {}", e)))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// Colors a screen needs; every UI function draws through one of these.
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub link: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

static DARK: Palette = Palette {
    accent: Color::Cyan,
    text: Color::White,
    muted: Color::DarkGray,
    border: Color::DarkGray,
    link: Color::Blue,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    highlight_fg: Color::White,
    highlight_bg: Color::DarkGray,
};

static LIGHT: Palette = Palette {
    accent: Color::Blue,
    text: Color::Black,
    muted: Color::Gray,
    border: Color::Gray,
    link: Color::Blue,
    success: Color::Green,
    warning: Color::Magenta,
    error: Color::Red,
    highlight_fg: Color::Black,
    highlight_bg: Color::Gray,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.toml");
        assert_eq!(Theme::load(&path), Theme::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        Theme::Light.save(&path).unwrap();
        assert_eq!(Theme::load(&path), Theme::Light);
        Theme::Dark.save(&path).unwrap();
        assert_eq!(Theme::load(&path), Theme::Dark);
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "theme = 42").unwrap();
        assert_eq!(Theme::load(&path), Theme::default());
    }
}
