//! UI rendering components
//!
//! Everything here is a pure function of the view state, the deck, the
//! theme, which control is showing pressed feedback and how far the
//! favorites list is scrolled.

pub mod card;
pub mod controls;
pub mod favorites;
pub mod indicator;
pub mod layout;

use ratatui::{
    Frame,
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::intent::Intent;
use crate::app::state::ViewState;
use crate::quote::Deck;
use crate::theme::Theme;
use layout::ScreenLayout;

/// Main draw function
///
/// Returns the layout it drew with so clicks can be hit-tested against
/// exactly what is on screen.
pub fn draw(
    frame: &mut Frame,
    state: &ViewState,
    deck: &Deck,
    theme: &Theme,
    pressed: Option<Intent>,
    favorites_scroll: usize,
) -> ScreenLayout {
    let area = frame.area();
    let layout = ScreenLayout::compute(area, state, deck, favorites_scroll);

    frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    card::draw(frame, layout.card, state.current_quote(deck), theme);
    controls::draw(frame, &layout, state.is_current_favorite(deck), pressed, theme);
    indicator::draw(frame, layout.indicator, state, deck, theme);
    favorites::draw(frame, &layout, state.favorite_ids.len(), deck, pressed, theme);
    draw_help(frame, &layout, theme);

    layout
}

/// Key hints along the bottom edge
fn draw_help(frame: &mut Frame, layout: &ScreenLayout, theme: &Theme) {
    let key = Style::default().fg(theme.secondary_label);
    let hint = Style::default().fg(theme.tertiary_label);

    let line = Line::from(vec![
        Span::styled("\u{2190}/\u{2192}", key),
        Span::styled(" browse  ", hint),
        Span::styled("f", key),
        Span::styled(" favorite  ", hint),
        Span::styled("1-9", key),
        Span::styled(" jump  ", hint),
        Span::styled("PgUp/PgDn", key),
        Span::styled(" scroll  ", hint),
        Span::styled("q", key),
        Span::styled(" quit", hint),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), layout.help);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Position};

    fn render(
        state: &ViewState,
        pressed: Option<Intent>,
        width: u16,
        height: u16,
    ) -> (Buffer, ScreenLayout) {
        render_scrolled(state, pressed, 0, width, height)
    }

    fn render_scrolled(
        state: &ViewState,
        pressed: Option<Intent>,
        favorites_scroll: usize,
        width: u16,
        height: u16,
    ) -> (Buffer, ScreenLayout) {
        let deck = Deck::builtin();
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut layout = None;
        terminal
            .draw(|frame| {
                layout = Some(draw(frame, state, &deck, &theme, pressed, favorites_scroll));
            })
            .unwrap();
        (terminal.backend().buffer().clone(), layout.unwrap())
    }

    fn buffer_to_string(buffer: &Buffer) -> String {
        let area = buffer.area();
        let mut lines = Vec::new();

        for y in area.top()..area.bottom() {
            let mut line = String::new();
            for x in area.left()..area.right() {
                let cell = &buffer[(x, y)];
                line.push_str(cell.symbol());
            }
            let trimmed = line.trim_end();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }

        lines.join("\n")
    }

    fn row_of(content: &str, needle: &str) -> Option<usize> {
        content.lines().position(|line| line.contains(needle))
    }

    #[test]
    fn fresh_screen_shows_first_quote_and_position() {
        let (buffer, _) = render(&ViewState::new(), None, 80, 40);
        let content = buffer_to_string(&buffer);

        assert!(content.contains("The only way to do great work"), "got:\n{}", content);
        assert!(content.contains("\u{2014} Steve Jobs"));
        assert!(content.contains("1 of 8"));
        assert_eq!(content.matches('\u{25CF}').count(), 8);
        assert!(!content.contains("Favorites"));
    }

    #[test]
    fn favorite_button_reflects_membership() {
        let (buffer, _) = render(&ViewState::new(), None, 80, 40);
        assert!(buffer_to_string(&buffer).contains('\u{2661}'));

        let mut state = ViewState::new();
        state.toggle(1);
        let (buffer, _) = render(&state, None, 80, 40);
        let content = buffer_to_string(&buffer);
        assert!(content.contains('\u{2665}'));
        assert!(!content.contains('\u{2661}'));
    }

    #[test]
    fn favorites_list_is_in_canonical_order() {
        let mut state = ViewState { current_index: 4, ..Default::default() };
        state.toggle(3);
        state.toggle(1);

        let (buffer, _) = render(&state, None, 80, 50);
        let content = buffer_to_string(&buffer);

        assert!(content.contains("Favorites (2)"));
        let first = row_of(&content, "The only way to do great work").unwrap();
        let third = row_of(&content, "Life is what happens").unwrap();
        assert!(first < third, "got:\n{}", content);
    }

    #[test]
    fn selecting_a_favorite_changes_the_card() {
        let deck = Deck::builtin();
        let mut state = ViewState::new();
        state.toggle(5);
        state.select(&deck, 5);

        let (buffer, _) = render(&state, None, 80, 50);
        let content = buffer_to_string(&buffer);

        assert!(content.contains("5 of 8"));
        let card_row = row_of(&content, "\u{2014} Aristotle").unwrap();
        let heading_row = row_of(&content, "Favorites (1)").unwrap();
        assert!(card_row < heading_row, "got:\n{}", content);
    }

    #[test]
    fn pressed_nav_button_uses_tertiary_background() {
        let theme = Theme::dark();
        let (buffer, layout) = render(&ViewState::new(), Some(Intent::Next), 80, 40);

        let inside = |rect: ratatui::layout::Rect| Position::new(rect.x + 1, rect.y + 1);
        let next = inside(layout.next);
        let previous = inside(layout.previous);

        assert_eq!(buffer[(next.x, next.y)].bg, theme.tertiary_background);
        assert_eq!(buffer[(previous.x, previous.y)].bg, theme.secondary_background);
    }

    #[test]
    fn favorited_button_uses_destructive_background() {
        let theme = Theme::dark();
        let mut state = ViewState::new();
        state.toggle(1);
        let (buffer, layout) = render(&state, None, 80, 40);

        let cell = &buffer[(layout.favorite.x + 1, layout.favorite.y + 1)];
        assert_eq!(cell.bg, theme.destructive);
    }

    #[test]
    fn help_line_is_on_last_row() {
        let (buffer, layout) = render(&ViewState::new(), None, 80, 40);
        assert_eq!(layout.help.y, 39);
        let content = buffer_to_string(&buffer);
        assert!(content.lines().last().unwrap().contains("quit"));
    }

    #[test]
    fn scrolled_favorites_show_later_entries_and_hints() {
        let mut state = ViewState::new();
        for id in [1, 2, 3] {
            state.toggle(id);
        }

        let (buffer, _) = render_scrolled(&state, None, 0, 80, 24);
        let content = buffer_to_string(&buffer);
        assert!(content.contains("Favorites (3)"));
        assert!(content.contains("\u{2193}2"), "got:\n{}", content);
        assert!(!content.contains("Life is what happens"));

        let (buffer, _) = render_scrolled(&state, None, 2, 80, 24);
        let content = buffer_to_string(&buffer);
        assert!(content.contains("Life is what happens"), "got:\n{}", content);
        assert!(content.contains("\u{2191}2"));
        assert!(content.contains(" 3 "));
    }

    #[test]
    fn tiny_terminal_renders_without_panicking() {
        let mut state = ViewState::new();
        state.toggle(2);
        let _ = render(&state, Some(Intent::ToggleFavorite), 4, 3);
    }
}
