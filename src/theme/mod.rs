//! Theming with semantic color roles
//!
//! Colors are named by role, not by hue, so the same rendering code works
//! for the light and dark palettes.

mod palettes;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Light or dark appearance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Follow the terminal
    #[default]
    Auto,
    Light,
    Dark,
}

impl Appearance {
    /// Resolve `Auto` against the terminal's `COLORFGBG` hint
    pub fn resolve(self) -> Appearance {
        match self {
            Appearance::Auto => {
                Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
            }
            other => other,
        }
    }

    /// Interpret a `COLORFGBG` value such as "15;0" (foreground;background)
    ///
    /// Background 7 (white) or 15 (bright white) means a light terminal.
    /// Anything else, including a missing value, is treated as dark.
    pub fn from_colorfgbg(value: Option<&str>) -> Appearance {
        let background = value.and_then(|v| v.rsplit(';').next()).map(str::trim);
        match background {
            Some("7") | Some("15") => Appearance::Light,
            _ => Appearance::Dark,
        }
    }
}

/// A color theme for the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,

    // Backgrounds
    pub background: Color,
    pub secondary_background: Color,
    pub tertiary_background: Color,

    // Text
    pub label: Color,
    pub secondary_label: Color,
    pub tertiary_label: Color,

    // Fills and accents
    pub tertiary_fill: Color,
    pub accent: Color,
    pub destructive: Color,
}

impl Theme {
    /// Theme for an appearance, resolving `Auto` first
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance.resolve() {
            Appearance::Light => Theme::light(),
            _ => Theme::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}
