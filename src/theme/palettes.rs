//! Light and dark palettes
//!
//! Values follow the system colors of Apple platforms for each role.

use ratatui::style::Color;

use super::Theme;

/// Light palette
const LIGHT: Theme = Theme {
    name: String::new(), // Will be set properly with const fn when stabilized

    background: Color::Rgb(255, 255, 255),           // #ffffff
    secondary_background: Color::Rgb(242, 242, 247), // #f2f2f7
    tertiary_background: Color::Rgb(229, 229, 234),  // #e5e5ea

    label: Color::Rgb(0, 0, 0),                // #000000
    secondary_label: Color::Rgb(60, 60, 67),   // #3c3c43
    tertiary_label: Color::Rgb(142, 142, 147), // #8e8e93

    tertiary_fill: Color::Rgb(209, 209, 214), // #d1d1d6
    accent: Color::Rgb(0, 122, 255),          // #007aff
    destructive: Color::Rgb(255, 59, 48),     // #ff3b30
};

/// Dark palette
const DARK: Theme = Theme {
    name: String::new(),

    background: Color::Rgb(0, 0, 0),              // #000000
    secondary_background: Color::Rgb(28, 28, 30), // #1c1c1e
    tertiary_background: Color::Rgb(44, 44, 46),  // #2c2c2e

    label: Color::Rgb(255, 255, 255),          // #ffffff
    secondary_label: Color::Rgb(174, 174, 178), // #aeaeb2
    tertiary_label: Color::Rgb(99, 99, 102),   // #636366

    tertiary_fill: Color::Rgb(58, 58, 60), // #3a3a3c
    accent: Color::Rgb(10, 132, 255),      // #0a84ff
    destructive: Color::Rgb(255, 69, 58),  // #ff453a
};

// Workaround for const String
impl Theme {
    pub fn light() -> Self {
        Theme { name: "Light".to_string(), ..LIGHT }
    }

    pub fn dark() -> Self {
        Theme { name: "Dark".to_string(), ..DARK }
    }
}
