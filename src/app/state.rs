//! View state and its transitions
//!
//! The state is a plain struct owned by the caller. Every transition is a
//! pure function of the state and the deck, so none of this needs a
//! terminal to test.

use std::collections::HashSet;

use crate::quote::{Deck, Quote, QuoteId};

/// Index after `current` in a sequence of `len` items, wrapping to 0
pub fn next_index(current: usize, len: usize) -> usize {
    debug_assert!(len > 0);
    (current + 1) % len
}

/// Index before `current` in a sequence of `len` items, wrapping to the end
pub fn previous_index(current: usize, len: usize) -> usize {
    debug_assert!(len > 0);
    (current + len - 1) % len
}

/// New favorite set with `id` removed if present, added otherwise
pub fn toggle_favorite(favorites: &HashSet<QuoteId>, id: QuoteId) -> HashSet<QuoteId> {
    let mut toggled = favorites.clone();
    if !toggled.remove(&id) {
        toggled.insert(id);
    }
    toggled
}

/// Mutable state of the quote screen
///
/// Created fresh for each screen and dropped with it. Nothing here is
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Canonical index of the displayed quote, always `< deck.len()`
    pub current_index: usize,
    /// Ids of favorited quotes
    pub favorite_ids: HashSet<QuoteId>,
}

impl ViewState {
    /// Fresh state: first quote, no favorites
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the next quote
    pub fn next(&mut self, deck: &Deck) {
        self.current_index = next_index(self.current_index, deck.len());
    }

    /// Show the previous quote
    pub fn previous(&mut self, deck: &Deck) {
        self.current_index = previous_index(self.current_index, deck.len());
    }

    /// Toggle favorite status of the quote with this id
    pub fn toggle(&mut self, id: QuoteId) {
        self.favorite_ids = toggle_favorite(&self.favorite_ids, id);
    }

    /// Jump to the quote with this id; unknown ids leave the index alone
    pub fn select(&mut self, deck: &Deck, id: QuoteId) {
        if let Some(index) = deck.position_of(id) {
            self.current_index = index;
        }
    }

    /// The quote on the card
    pub fn current_quote<'d>(&self, deck: &'d Deck) -> &'d Quote {
        // Out-of-range states can only be built by hand; show the first quote.
        deck.get(self.current_index).unwrap_or_else(|| deck.first())
    }

    /// Whether the displayed quote is a favorite
    pub fn is_current_favorite(&self, deck: &Deck) -> bool {
        self.favorite_ids.contains(&self.current_quote(deck).id)
    }

    /// Favorited quotes in canonical order, with their canonical index
    pub fn favorites<'d>(&self, deck: &'d Deck) -> Vec<(usize, &'d Quote)> {
        deck.iter().enumerate().filter(|(_, q)| self.favorite_ids.contains(&q.id)).collect()
    }

    /// "position of N" text for the indicator
    pub fn position_label(&self, deck: &Deck) -> String {
        format!("{} of {}", self.current_index + 1, deck.len())
    }
}
