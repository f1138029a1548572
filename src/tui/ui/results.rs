use crate::evaluator::Category;
use crate::results::SimulationResult;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::render_status;

const HINTS: &str = "[ / ] Player  1-9 Select  [M] Form  [Q] Quit";

fn pct(x: f64) -> String {
    format!("{:>6.2}%", x * 100.0)
}

pub(super) fn draw_results(f: &mut Frame, app: &AppState) {
    let Some(result) = app.result() else {
        render_status(f, f.area(), app, HINTS);
        return;
    };
    let rows_needed = result.num_players() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows_needed),
            Constraint::Min(Category::COUNT as u16 + 2),
            Constraint::Length(4),
        ])
        .split(f.area());

    draw_player_table(f, chunks[0], app, result);
    draw_category_chart(f, chunks[1], app);
    render_status(f, chunks[2], app, HINTS);
}

fn draw_player_table(f: &mut Frame, area: Rect, app: &AppState, result: &SimulationResult) {
    let header = Row::new(vec!["Player", "Win", "Tie", "Equity", "Most likely"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = result
        .players()
        .enumerate()
        .map(|(i, p)| {
            let style = if i == app.selected_player {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let likely = p.most_likely_category().map(|c| c.to_string()).unwrap_or_default();
            Row::new(vec![
                format!("{}. {}", i + 1, p.name()),
                pct(p.win_probability()),
                pct(p.tie_probability()),
                pct(p.equity()),
                likely,
            ])
            .style(style)
        })
        .collect();
    let widths = [
        Constraint::Length(14),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Min(16),
    ];
    let title = format!("Results: {} trials, seed {}", result.trials(), result.seed());
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(table, area);
}

fn draw_category_chart(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(stats) = app.selected_stats() else {
        return;
    };
    // Bar values are per-mille, strongest category on top.
    let bars: Vec<Bar> = stats
        .category_distribution()
        .into_iter()
        .rev()
        .map(|(category, p)| {
            Bar::default()
                .value((p * 1000.0).round() as u64)
                .label(Line::from(category.name()))
                .text_value(format!("{:.2}%", p * 100.0))
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!("Hand categories: {}", stats.name()))
                .borders(Borders::ALL),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::White))
        .max(1000)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}
