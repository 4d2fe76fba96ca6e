//! Previous / favorite / next controls

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Paragraph},
};

use super::layout::ScreenLayout;
use crate::app::intent::Intent;
use crate::theme::Theme;

const PREVIOUS: &str = "\u{2190}"; // ←
const NEXT: &str = "\u{2192}"; // →
const HEART_FILLED: &str = "\u{2665}"; // ♥
const HEART_EMPTY: &str = "\u{2661}"; // ♡

/// Draw the three controls, styling whichever one is pressed
pub fn draw(
    frame: &mut Frame,
    layout: &ScreenLayout,
    is_favorite: bool,
    pressed: Option<Intent>,
    theme: &Theme,
) {
    draw_nav(frame, layout.previous, PREVIOUS, pressed == Some(Intent::Previous), theme);

    let (symbol, fg, bg) = if is_favorite {
        (HEART_FILLED, theme.label, theme.destructive)
    } else {
        (HEART_EMPTY, theme.destructive, theme.secondary_background)
    };
    let favorite_pressed = pressed == Some(Intent::ToggleFavorite);
    draw_button(frame, layout.favorite, symbol, fg, bg, favorite_pressed, theme);

    draw_nav(frame, layout.next, NEXT, pressed == Some(Intent::Next), theme);
}

fn draw_nav(frame: &mut Frame, area: Rect, symbol: &str, pressed: bool, theme: &Theme) {
    let bg = if pressed { theme.tertiary_background } else { theme.secondary_background };
    draw_button(frame, area, symbol, theme.accent, bg, pressed, theme);
}

fn draw_button(
    frame: &mut Frame,
    area: Rect,
    symbol: &str,
    fg: Color,
    bg: Color,
    pressed: bool,
    theme: &Theme,
) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let mut style = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);
    if pressed {
        style = style.add_modifier(Modifier::DIM);
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.tertiary_fill))
        .style(style);

    frame.render_widget(
        Paragraph::new(symbol.to_string()).alignment(Alignment::Center).block(block),
        area,
    );
}
