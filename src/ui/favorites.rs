//! Favorites list

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph},
};

use super::layout::{FAVORITE_TEXT_LINES, ScreenLayout, clamp_lines};
use crate::app::intent::Intent;
use crate::quote::Deck;
use crate::theme::Theme;

/// Draw the heading and every entry the layout placed
pub fn draw(
    frame: &mut Frame,
    layout: &ScreenLayout,
    count: usize,
    deck: &Deck,
    pressed: Option<Intent>,
    theme: &Theme,
) {
    let Some(title_area) = layout.favorites_title else {
        return;
    };

    let mut title = Line::from(Span::styled(
        format!(" Favorites ({})", count),
        Style::default().fg(theme.label).add_modifier(Modifier::BOLD),
    ));
    if let Some(hint) = scroll_hint(layout.favorites_offset, layout.favorites_below) {
        title.push_span(Span::styled(hint, Style::default().fg(theme.tertiary_label)));
    }
    frame.render_widget(Paragraph::new(title), title_area);

    for (placed, slot) in layout.favorites.iter().enumerate() {
        let position = layout.favorites_offset + placed;
        let Some(quote) = deck.get(slot.index) else {
            continue;
        };

        let mut style = Style::default().bg(theme.secondary_background);
        if pressed == Some(Intent::SelectFavorite(slot.id)) {
            style = style.add_modifier(Modifier::DIM);
        }

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.tertiary_fill))
            .padding(Padding::horizontal(1))
            .style(style);
        // Digit shortcuts only reach the first nine entries
        if position < 9 {
            block = block.title(Line::styled(
                format!(" {} ", position + 1),
                Style::default().fg(theme.tertiary_label),
            ));
        }

        let inner = block.inner(slot.area);
        let mut lines: Vec<Line> =
            clamp_lines(quote.text, inner.width as usize, FAVORITE_TEXT_LINES)
                .into_iter()
                .map(|line| Line::styled(line, Style::default().fg(theme.label)))
                .collect();
        lines.push(Line::styled(quote.attribution(), Style::default().fg(theme.secondary_label)));

        frame.render_widget(Paragraph::new(lines).block(block), slot.area);
    }
}

/// "↑n ↓m" counts of entries scrolled out of view, if any
fn scroll_hint(above: usize, below: usize) -> Option<String> {
    let mut parts = Vec::new();
    if above > 0 {
        parts.push(format!("\u{2191}{}", above)); // ↑
    }
    if below > 0 {
        parts.push(format!("\u{2193}{}", below)); // ↓
    }
    if parts.is_empty() { None } else { Some(format!("  {}", parts.join(" "))) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_hint_when_everything_is_visible() {
        assert_eq!(scroll_hint(0, 0), None);
    }

    #[test]
    fn hint_counts_both_directions() {
        assert_eq!(scroll_hint(1, 3).as_deref(), Some("  \u{2191}1 \u{2193}3"));
        assert_eq!(scroll_hint(0, 2).as_deref(), Some("  \u{2193}2"));
    }
}
