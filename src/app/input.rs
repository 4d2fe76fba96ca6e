//! Event handling utilities

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::intent::Intent;
use super::state::ViewState;
use crate::quote::Deck;
use crate::ui::layout::ScreenLayout;

/// Actions bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    ToggleFavorite,
    /// Pick the n-th entry (0-based) of the favorites list
    Favorite(usize),
    Quit,
}

/// Direction to move the favorites list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up,
    Down,
}

impl Scroll {
    /// Move a favorites scroll offset one entry
    ///
    /// The upper bound is left to `ScreenLayout::compute`, which clamps.
    pub fn apply(self, offset: usize) -> usize {
        match self {
            Scroll::Up => offset.saturating_sub(1),
            Scroll::Down => offset.saturating_add(1),
        }
    }
}

/// Key mapping (basic, without modifiers)
pub fn key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Some(Action::Previous),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Some(Action::Next),
        KeyCode::Char('f') | KeyCode::Char(' ') => Some(Action::ToggleFavorite),
        KeyCode::Char(c @ '1'..='9') => Some(Action::Favorite(c as usize - '1' as usize)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Key mapping with modifiers (for Ctrl combinations)
pub fn key_with_modifier_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        }
    } else {
        key_to_action(key)
    }
}

impl Action {
    /// Turn the action into an intent against the current state
    ///
    /// Favorites are numbered in the order the list shows them, so a digit
    /// past the end of the list resolves to nothing.
    pub fn resolve(self, state: &ViewState, deck: &Deck) -> Option<Intent> {
        match self {
            Action::Previous => Some(Intent::Previous),
            Action::Next => Some(Intent::Next),
            Action::ToggleFavorite => Some(Intent::ToggleFavorite),
            Action::Favorite(n) => {
                state.favorites(deck).get(n).map(|(_, q)| Intent::SelectFavorite(q.id))
            }
            Action::Quit => Some(Intent::Quit),
        }
    }
}

/// Keys that scroll the favorites list
pub fn key_to_scroll(key: KeyCode) -> Option<Scroll> {
    match key {
        KeyCode::PageUp | KeyCode::Up => Some(Scroll::Up),
        KeyCode::PageDown | KeyCode::Down => Some(Scroll::Down),
        _ => None,
    }
}

/// Mouse wheel scrolling of the favorites list
pub fn mouse_to_scroll(event: MouseEvent) -> Option<Scroll> {
    match event.kind {
        MouseEventKind::ScrollUp => Some(Scroll::Up),
        MouseEventKind::ScrollDown => Some(Scroll::Down),
        _ => None,
    }
}

/// Map a left click onto whatever control sits under it
pub fn mouse_to_intent(event: MouseEvent, layout: &ScreenLayout) -> Option<Intent> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => layout.hit(event.column, event.row),
        _ => None,
    }
}
