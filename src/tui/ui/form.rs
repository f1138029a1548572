use crate::hand::MAX_BOARD_CARDS;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_column, inner, slots};
use super::{render_card_widget, render_status};

const HINTS: &str = "[Enter] Run/Add  [↑/↓] Move  [+/-] Adjust  [M] Results  [Q] Quit";

pub(super) fn draw_form(f: &mut Frame, app: &AppState) {
    let area = centered_column(80, f.area());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // inputs
            Constraint::Length(5), // pending board
            Constraint::Length(4), // status
        ])
        .split(area);

    let block = Block::default()
        .title(format!("poker-odds v{}", crate::VERSION))
        .borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Texas Hold'em equity simulator",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    for (i, item) in app.form_items_display().into_iter().enumerate() {
        let style = if i == app.form_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let marker = if i == app.form_index { "> " } else { "  " };
        lines.push(Line::from(Span::styled(format!("{marker}{item}"), style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Cards: rank 2-10/j/q/k/a then suit s/h/d/c, e.g. \"as, 10h\". Leave your cards empty for a random hand.",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), chunks[0]);

    let board_area = chunks[1];
    f.render_widget(Block::default().title("Pending board").borders(Borders::ALL), board_area);
    for (i, slot) in slots(inner(board_area), MAX_BOARD_CARDS as u16).into_iter().enumerate() {
        render_card_widget(f, slot, app.community.get(i).copied(), None);
    }

    render_status(f, chunks[2], app, HINTS);
}
