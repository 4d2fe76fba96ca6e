//! A validated, ordered, non-empty sequence of quotes

use std::collections::HashSet;

use thiserror::Error;

use super::model::{QUOTES, Quote, QuoteId};

/// Reasons a quote sequence cannot be used as a deck
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A deck needs at least one quote
    #[error("Deck has no quotes")]
    Empty,

    /// Ids must be positive
    #[error("Quote at position {index} has id 0")]
    ZeroId {
        /// Canonical position of the offending quote
        index: usize,
    },

    /// Ids must be unique
    #[error("Quote id {0} appears more than once")]
    DuplicateId(QuoteId),

    /// Text and author must be non-empty
    #[error("Quote {0} has blank text or author")]
    Blank(QuoteId),
}

/// The fixed quote sequence a screen pages through
///
/// The order given at construction is the canonical order. A deck is never
/// empty, so index arithmetic over [`Deck::len`] is always defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    quotes: Vec<Quote>,
}

impl Deck {
    /// Build a deck, validating every quote
    pub fn new(quotes: Vec<Quote>) -> Result<Self, DeckError> {
        if quotes.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut seen = HashSet::with_capacity(quotes.len());
        for (index, quote) in quotes.iter().enumerate() {
            if quote.id == 0 {
                return Err(DeckError::ZeroId { index });
            }
            if !seen.insert(quote.id) {
                return Err(DeckError::DuplicateId(quote.id));
            }
            if quote.text.trim().is_empty() || quote.author.trim().is_empty() {
                return Err(DeckError::Blank(quote.id));
            }
        }

        Ok(Self { quotes })
    }

    /// The built-in quotes
    pub fn builtin() -> Self {
        Self { quotes: QUOTES.to_vec() }
    }

    /// Number of quotes (always at least one)
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Quote at a canonical position
    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    /// First quote in canonical order
    pub fn first(&self) -> &Quote {
        &self.quotes[0]
    }

    /// Canonical position of the quote with this id
    pub fn position_of(&self, id: QuoteId) -> Option<usize> {
        self.quotes.iter().position(|q| q.id == id)
    }

    /// Quotes in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_passes_validation() {
        let validated = Deck::new(QUOTES.to_vec()).unwrap();
        assert_eq!(validated, Deck::builtin());
        assert_eq!(validated.len(), 8);
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(Deck::new(Vec::new()), Err(DeckError::Empty));
    }

    #[test]
    fn zero_id_is_rejected() {
        let quotes = vec![Quote::new(1, "a", "b"), Quote::new(0, "c", "d")];
        assert_eq!(Deck::new(quotes), Err(DeckError::ZeroId { index: 1 }));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let quotes = vec![Quote::new(4, "a", "b"), Quote::new(4, "c", "d")];
        assert_eq!(Deck::new(quotes), Err(DeckError::DuplicateId(4)));
    }

    #[test]
    fn blank_author_is_rejected() {
        let quotes = vec![Quote::new(2, "words", "  ")];
        assert_eq!(Deck::new(quotes), Err(DeckError::Blank(2)));
    }

    #[test]
    fn position_of_finds_canonical_index() {
        let deck = Deck::builtin();
        assert_eq!(deck.position_of(1), Some(0));
        assert_eq!(deck.position_of(8), Some(7));
        assert_eq!(deck.position_of(42), None);
        assert_eq!(deck.position_of(0), None);
    }

    #[test]
    fn error_messages_name_the_quote() {
        assert_eq!(DeckError::DuplicateId(3).to_string(), "Quote id 3 appears more than once");
    }
}
