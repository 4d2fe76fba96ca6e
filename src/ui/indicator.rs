//! "n of N" label and position dots

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::ViewState;
use crate::quote::Deck;
use crate::theme::Theme;

const DOT: &str = "\u{25CF}"; // ●

/// Draw the position label with one dot per quote beneath it
pub fn draw(frame: &mut Frame, area: Rect, state: &ViewState, deck: &Deck, theme: &Theme) {
    let label = Line::styled(
        state.position_label(deck),
        Style::default().fg(theme.tertiary_label).add_modifier(Modifier::BOLD),
    );
    let lines = vec![label, dots(state.current_index, deck.len(), theme)];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Dots separated by spaces, the current one in the accent color
fn dots(current: usize, count: usize, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(count * 2);
    for index in 0..count {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let color = if index == current { theme.accent } else { theme.tertiary_fill };
        spans.push(Span::styled(DOT, Style::default().fg(color)));
    }
    Line::from(spans)
}
