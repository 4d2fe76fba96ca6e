//! Screen geometry shared by rendering and mouse hit-testing

use ratatui::layout::{Position, Rect};

use crate::app::intent::Intent;
use crate::app::state::ViewState;
use crate::quote::{Deck, QuoteId};

/// Widest the content column grows
pub const MAX_COLUMN_WIDTH: u16 = 72;
/// Horizontal padding inside the quote card
pub const CARD_PADDING: u16 = 3;
/// Smallest card height, borders included
const CARD_MIN_HEIGHT: u16 = 7;
/// Height of a control button, borders included
pub const CONTROL_HEIGHT: u16 = 3;
const NAV_WIDTH: u16 = 7;
const FAVORITE_WIDTH: u16 = 9;
const CONTROL_GAP: u16 = 2;
/// Text lines shown per favorites entry before truncating
pub const FAVORITE_TEXT_LINES: usize = 2;

/// A favorites-list entry and where it was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteSlot {
    /// Quote shown in this entry
    pub id: QuoteId,
    /// Canonical index of that quote
    pub index: usize,
    /// Entry area, borders included
    pub area: Rect,
}

/// Where everything on the screen goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Centered content column
    pub column: Rect,
    /// Quote card
    pub card: Rect,
    /// Previous control
    pub previous: Rect,
    /// Favorite toggle control
    pub favorite: Rect,
    /// Next control
    pub next: Rect,
    /// "n of N" label and dots
    pub indicator: Rect,
    /// "Favorites (n)" heading, present only when there are favorites
    pub favorites_title: Option<Rect>,
    /// Favorites entries placed on screen, starting at `favorites_offset`
    pub favorites: Vec<FavoriteSlot>,
    /// Position in the favorites list of the first placed entry
    pub favorites_offset: usize,
    /// Favorites scrolled past below the last placed entry
    pub favorites_below: usize,
    /// Key hints
    pub help: Rect,
}

impl ScreenLayout {
    /// Lay out the screen for the given state
    ///
    /// `favorites_scroll` is how many favorites entries are scrolled off the
    /// top of the list; it is clamped so the last entry stays reachable.
    pub fn compute(
        area: Rect,
        state: &ViewState,
        deck: &Deck,
        favorites_scroll: usize,
    ) -> Self {
        let help =
            Rect::new(area.x, area.bottom().saturating_sub(1), area.width, area.height.min(1));
        let body_bottom = help.y;

        let column_width = area.width.saturating_sub(4).min(MAX_COLUMN_WIDTH);
        let column_x = area.x + (area.width - column_width) / 2;
        let column =
            Rect::new(column_x, area.y, column_width, body_bottom.saturating_sub(area.y));

        let clip = |rect: Rect| rect.intersection(column);
        let mut y = area.y + 1;

        // Card
        let quote = state.current_quote(deck);
        let text_width = card_text_width(column_width);
        let text_lines = textwrap::wrap(quote.text, text_width).len() as u16;
        // text, blank line, attribution, one padding row above and below, borders
        let card_height = (text_lines + 6).max(CARD_MIN_HEIGHT);
        let card = clip(Rect::new(column.x, y, column_width, card_height));
        y += card_height + 1;

        // Controls, centered as a group
        let controls_width = NAV_WIDTH * 2 + FAVORITE_WIDTH + CONTROL_GAP * 2;
        let controls_x = column.x + column_width.saturating_sub(controls_width) / 2;
        let previous = clip(Rect::new(controls_x, y, NAV_WIDTH, CONTROL_HEIGHT));
        let favorite = clip(Rect::new(
            controls_x + NAV_WIDTH + CONTROL_GAP,
            y,
            FAVORITE_WIDTH,
            CONTROL_HEIGHT,
        ));
        let next = clip(Rect::new(
            controls_x + NAV_WIDTH + CONTROL_GAP + FAVORITE_WIDTH + CONTROL_GAP,
            y,
            NAV_WIDTH,
            CONTROL_HEIGHT,
        ));
        y += CONTROL_HEIGHT + 1;

        // Position indicator
        let indicator = clip(Rect::new(column.x, y, column_width, 2));
        y += 3;

        // Favorites
        let projection = state.favorites(deck);
        let mut favorites_title = None;
        let mut favorites = Vec::new();
        let favorites_offset = favorites_scroll.min(projection.len().saturating_sub(1));
        let mut favorites_below = 0;
        if !projection.is_empty() {
            favorites_title = Some(clip(Rect::new(column.x, y, column_width, 1)));
            y += 1;

            let entry_text_width = column_width.saturating_sub(4) as usize;
            let total = projection.len();
            let visible = projection.into_iter().skip(favorites_offset);
            for (placed, (index, quote)) in visible.enumerate() {
                let lines = clamp_lines(quote.text, entry_text_width, FAVORITE_TEXT_LINES).len();
                // text, attribution, borders
                let height = lines as u16 + 3;
                if y + height > body_bottom {
                    favorites_below = total - favorites_offset - placed;
                    break;
                }
                favorites.push(FavoriteSlot {
                    id: quote.id,
                    index,
                    area: Rect::new(column.x, y, column_width, height),
                });
                y += height;
            }
        }

        Self {
            column,
            card,
            previous,
            favorite,
            next,
            indicator,
            favorites_title,
            favorites,
            favorites_offset,
            favorites_below,
            help,
        }
    }

    /// The intent of whatever control covers this cell
    pub fn hit(&self, column: u16, row: u16) -> Option<Intent> {
        let position = Position::new(column, row);
        if self.previous.contains(position) {
            Some(Intent::Previous)
        } else if self.favorite.contains(position) {
            Some(Intent::ToggleFavorite)
        } else if self.next.contains(position) {
            Some(Intent::Next)
        } else {
            self.favorites
                .iter()
                .find(|slot| slot.area.contains(position))
                .map(|slot| Intent::SelectFavorite(slot.id))
        }
    }
}

/// Width available to quote text inside a card of this width
pub fn card_text_width(card_width: u16) -> usize {
    card_width.saturating_sub(2 + CARD_PADDING * 2).max(1) as usize
}

/// Wrap text to `width`, keeping at most `max_lines` lines
///
/// When text is cut, the last kept line ends in an ellipsis.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let width = width.max(1);
    let wrapped = textwrap::wrap(text, width);
    if wrapped.len() <= max_lines {
        return wrapped.into_iter().map(|line| line.into_owned()).collect();
    }

    let mut kept: Vec<String> =
        wrapped.into_iter().take(max_lines).map(|line| line.into_owned()).collect();
    if let Some(last) = kept.last_mut() {
        let room = width.saturating_sub(1);
        if last.chars().count() > room {
            *last = last.chars().take(room).collect();
        }
        last.push('\u{2026}'); // …
    }
    kept
}
