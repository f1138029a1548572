mod form;
mod layout;
mod results;

use crate::cards::{Card, Suit};
use crate::tui::app::{AppState, Scene, StatusKind};
use ratatui::prelude::*;
use ratatui::widgets::*;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Form => form::draw_form(f, app),
        Scene::Results => results::draw_results(f, app),
    }
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

/// A boxed card; `None` draws an empty slot.
fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let content = if let Some(c) = card {
        let (glyph, style) = suit_glyph_and_style(c.suit());
        Line::from(Span::styled(format!("{}{}", c.rank().token().to_uppercase(), glyph), style))
    } else {
        Line::from("[  ]")
    };
    let inner_area = layout::inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner_area);
}

/// Status line plus key hints, bordered.
fn render_status(f: &mut Frame, area: Rect, app: &AppState, hints: &str) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(layout::inner(area));

    let message = match app.status() {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Success => Color::Green,
                StatusKind::Warning => Color::Yellow,
                StatusKind::Error => Color::Red,
            };
            Line::from(Span::styled(status.message.clone(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled("Ready", Style::default().add_modifier(Modifier::DIM))),
    };
    f.render_widget(Paragraph::new(message).wrap(Wrap { trim: true }), cols[0]);
    let keys = Paragraph::new(Line::from(Span::styled(
        hints.to_string(),
        Style::default().add_modifier(Modifier::DIM),
    )))
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Right);
    f.render_widget(keys, cols[1]);
}
