//! The quote store
//!
//! Quotes are known at build time and never change while the app runs.

pub mod deck;
pub mod model;

pub use deck::{Deck, DeckError};
pub use model::{QUOTES, Quote, QuoteId};
