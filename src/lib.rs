//! Inspire - a small TUI for paging through inspirational quotes
//!
//! One screen: a quote card, previous/favorite/next controls, a position
//! indicator and the list of quotes you have marked as favorites.

pub mod app;
pub mod config;
pub mod feedback;
pub mod quote;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use quote::{Deck, Quote};
pub use theme::Theme;
