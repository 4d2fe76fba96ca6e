//! Quote card

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph},
};

use super::layout::{CARD_PADDING, card_text_width};
use crate::quote::Quote;
use crate::theme::Theme;

/// Draw the card for the displayed quote, content centered both ways
pub fn draw(frame: &mut Frame, area: Rect, quote: &Quote, theme: &Theme) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.tertiary_fill))
        .padding(Padding::new(CARD_PADDING, CARD_PADDING, 1, 1))
        .style(Style::default().bg(theme.secondary_background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = card_lines(quote, card_text_width(area.width), theme);

    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect { y: inner.y + top, height: inner.height - top, ..inner };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
}

/// Wrapped quote text, a blank line, then the attribution
fn card_lines(quote: &Quote, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(theme.label).add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line<'static>> = textwrap::wrap(quote.text, width)
        .into_iter()
        .map(|line| Line::styled(line.into_owned(), text_style))
        .collect();

    lines.push(Line::default());
    lines.push(Line::styled(
        quote.attribution(),
        Style::default().fg(theme.secondary_label).add_modifier(Modifier::ITALIC),
    ));
    lines
}
