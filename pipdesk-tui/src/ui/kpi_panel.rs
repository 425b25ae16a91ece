//! Dashboard KPI cards — active signals, daily P&L, win rate, pairs.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use pipdesk_core::domain::pair::ALL_PAIRS;

use crate::app::AppState;
use crate::sample_data;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    card(
        f,
        cards[0],
        "Active Signals",
        app.active_signal_count().to_string(),
        theme::accent_bold(),
        "+2 today".to_string(),
    );

    card(
        f,
        cards[1],
        "Daily P&L",
        format!("+€{:.2}", sample_data::DAILY_PNL),
        theme::bull(),
        format!("{:+.2}%", sample_data::DAILY_PNL_PCT),
    );

    let closed = app.stats.wins + app.stats.losses;
    card(
        f,
        cards[2],
        "Win Rate",
        format!("{:.1}%", app.stats.win_rate),
        theme::win_rate(app.stats.win_rate),
        format!("{} wins of {} closed", app.stats.wins, closed),
    );

    card(
        f,
        cards[3],
        "Available Pairs",
        ALL_PAIRS.len().to_string(),
        theme::accent_bold(),
        "majors & crosses".to_string(),
    );
}

fn card(f: &mut Frame, area: Rect, title: &str, value: String, value_style: Style, sub: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {title} "))
        .title_style(theme::muted());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![Line::from(vec![
        Span::styled(value, value_style),
        Span::raw("  "),
        Span::styled(sub, theme::muted()),
    ])];
    f.render_widget(Paragraph::new(lines), inner);
}
