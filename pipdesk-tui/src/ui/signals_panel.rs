//! Signal feed — filter bar, pill row, signal cards, empty state.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use pipdesk_core::domain::signal::TradingSignal;
use pipdesk_core::query::Pill;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // feed summary
            Constraint::Length(1), // filter bar
            Constraint::Length(1), // pill row
            Constraint::Min(3),    // cards
        ])
        .split(area);

    render_summary(f, rows[0], app);
    render_filter_bar(f, rows[1], app);
    render_pill_row(f, rows[2], app);

    if app.filtered.is_empty() {
        render_empty_state(f, rows[3]);
    } else {
        render_cards(f, rows[3], app);
    }
}

fn render_summary(f: &mut Frame, area: Rect, app: &AppState) {
    let line = Line::from(vec![
        Span::styled("AI Trading Signals", theme::accent_bold()),
        Span::styled(
            format!(
                "  {} signals available • {} filters active",
                app.filtered.len(),
                app.filter.active_pills.len()
            ),
            theme::muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let pair = if app.filter.search_pair.is_empty() {
        "All Pairs"
    } else {
        app.filter.search_pair.as_str()
    };

    let mut spans = vec![
        Span::styled("Pair ", theme::muted()),
        Span::styled(pair, theme::accent()),
        Span::styled("  Min Conf ", theme::muted()),
        Span::styled(
            format!("{:.1}", app.filter.min_confidence),
            theme::accent(),
        ),
        Span::styled("  Sort ", theme::muted()),
        Span::styled(app.filter.sort_by.label(), theme::accent()),
    ];
    if app.refresh_in_progress {
        spans.push(Span::styled("  refreshing...", theme::warning()));
    } else {
        spans.push(Span::styled(
            "  [s]pair [+/-]conf [o]sort [c]lear [r]efresh",
            theme::muted(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_pill_row(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, name) in Pill::NAMES.iter().enumerate() {
        let active = app.filter.active_pills.iter().any(|p| p == name);
        let mut style = if active { theme::bull() } else { theme::muted() };
        if i == app.dashboard.pill_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let mark = if active { "●" } else { "○" };
        spans.push(Span::styled(format!(" {mark} {name} "), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_empty_state(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No signals match your criteria",
            theme::text_bold(),
        )),
        Line::from(Span::styled(
            "Try adjusting your filters or refresh to get the latest signals",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[c] ", theme::accent()),
            Span::styled("clear all filters   ", theme::muted()),
            Span::styled("[r] ", theme::accent()),
            Span::styled("refresh signals", theme::muted()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_cards(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0;

    for (i, signal) in app.filtered.iter().enumerate() {
        let is_cursor = i == app.dashboard.cursor;
        if is_cursor {
            cursor_line = lines.len();
        }
        let expanded = app.dashboard.expanded.contains(&signal.id);
        push_card(&mut lines, signal, is_cursor, expanded);
    }

    // Keep the cursor card in view.
    let height = area.height as usize;
    let scroll = if lines.len() > height {
        cursor_line.saturating_sub(height / 2).min(lines.len() - height)
    } else {
        0
    };

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    f.render_widget(para, area);
}

fn push_card<'a>(lines: &mut Vec<Line<'a>>, signal: &'a TradingSignal, cursor: bool, expanded: bool) {
    let marker = if cursor { "▸ " } else { "  " };
    let marker_style = if cursor { theme::accent_bold() } else { theme::muted() };
    let level = if signal.confidence >= 8.0 {
        "High"
    } else if signal.confidence >= 6.0 {
        "Medium"
    } else {
        "Low"
    };

    lines.push(Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled("● ", theme::signal_status(signal.status)),
        Span::styled(signal.pair.as_str(), theme::text_bold()),
        Span::raw(" "),
        Span::styled(signal.action.label(), theme::action(signal.action)),
        Span::styled(format!("  {}", signal.timestamp), theme::muted()),
        Span::styled(
            format!("  {:.1}/10 {}", signal.confidence, level),
            theme::confidence(signal.confidence),
        ),
    ]));

    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled("Entry ", theme::muted()),
        Span::styled(signal.entry_price.as_str(), theme::text()),
        Span::styled("  SL ", theme::muted()),
        Span::styled(signal.stop_loss.as_str(), theme::bear()),
        Span::styled("  TP ", theme::muted()),
        Span::styled(signal.take_profit.as_str(), theme::bull()),
        Span::styled("  R:R ", theme::muted()),
        Span::styled(signal.risk_reward.as_str(), theme::text()),
        Span::styled(
            format!("  {:+} pips", signal.potential_pips),
            theme::pips(signal.potential_pips),
        ),
    ]));

    if expanded {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(signal.reasoning.as_str(), theme::muted()),
        ]));
    }
    lines.push(Line::from(""));
}
