//! Trade journal — performance cards, trade table, advanced statistics.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use pipdesk_core::domain::pair::price_decimals;
use pipdesk_core::domain::trade::TradeStatus;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // performance cards
            Constraint::Min(5),    // trade table
            Constraint::Length(3), // advanced statistics
        ])
        .split(area);

    render_performance_cards(f, rows[0], app);
    render_trade_table(f, rows[1], app);
    render_advanced_stats(f, rows[2], app);
}

fn render_performance_cards(f: &mut Frame, area: Rect, app: &AppState) {
    let s = &app.stats;
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
        "Win Rate",
        vec![Line::from(vec![
            Span::styled(format!("{:.1}%", s.win_rate), theme::win_rate(s.win_rate)),
            Span::styled(
                format!("  {} wins of {}", s.wins, s.wins + s.losses),
                theme::muted(),
            ),
        ])],
    );

    card(
        f,
        cards[1],
        "Profit Factor",
        vec![Line::from(vec![
            Span::styled(format!("{:.2}", s.profit_factor), theme::pnl(s.profit_factor - 1.0)),
            Span::styled(
                format!("  €{:.0} / €{:.0}", s.total_win_pnl, s.total_loss_pnl),
                theme::muted(),
            ),
        ])],
    );

    card(
        f,
        cards[2],
        "Average R:R",
        vec![Line::from(vec![
            Span::styled(format!("1:{:.1}", s.avg_rr), theme::text_bold()),
            Span::styled("  target 1:2.0+", theme::muted()),
        ])],
    );

    card(
        f,
        cards[3],
        "Net P&L",
        vec![Line::from(vec![
            Span::styled(format!("{:+.0}€", s.total_pnl), theme::pnl(s.total_pnl)),
            Span::styled(format!("  {} open", s.open_trades), theme::muted()),
        ])],
    );
}

fn card(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {title} "))
        .title_style(theme::muted());
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_trade_table(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(
            "{:<17} {:<8} {:<6} {:>10} {:>10} {:>6} {:>8}  {}",
            "Date/Time", "Pair", "Dir", "Entry", "Exit", "Pips", "P&L", "Status"
        ),
        theme::accent_bold(),
    )));

    // Keep the cursor row in view.
    let visible = area.height.saturating_sub(1) as usize;
    let start = app.journal.cursor.saturating_sub(visible.saturating_sub(1));

    for (i, trade) in app.trades.iter().enumerate().skip(start).take(visible) {
        let is_cursor = i == app.journal.cursor;
        let base = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::text()
        };
        let styled = |style: Style| if is_cursor { base } else { style };

        let decimals = price_decimals(&trade.pair);
        let exit = match trade.exit {
            Some(price) => format!("{price:.decimals$}"),
            None => "--".to_string(),
        };
        let status = match trade.status {
            TradeStatus::Win => "Win",
            TradeStatus::Loss => "Loss",
            TradeStatus::Open => "Open",
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<17} ", trade.date), base),
            Span::styled(format!("{:<8} ", trade.pair), base),
            Span::styled(
                format!("{:<6} ", trade.direction.label()),
                styled(theme::direction(trade.direction)),
            ),
            Span::styled(format!("{:>10.decimals$} ", trade.entry), base),
            Span::styled(format!("{exit:>10} "), base),
            Span::styled(format!("{:>+6} ", trade.pips), styled(theme::pips(trade.pips))),
            Span::styled(format!("{:>+7.0}€ ", trade.pnl), styled(theme::pnl(trade.pnl))),
            Span::styled(format!(" {status}"), styled(theme::trade_status(trade.status))),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_advanced_stats(f: &mut Frame, area: Rect, app: &AppState) {
    let s = &app.stats;
    let streak = match s.current_streak {
        n if n > 0 => format!("{n} wins"),
        n if n < 0 => format!("{} losses", -n),
        _ => "none".to_string(),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Total Trades ", theme::muted()),
            Span::styled(s.total_trades.to_string(), theme::text_bold()),
            Span::styled("   Avg Win ", theme::muted()),
            Span::styled(format!("€{:.0}", s.avg_win), theme::bull()),
            Span::styled("   Avg Loss ", theme::muted()),
            Span::styled(format!("€{:.0}", s.avg_loss), theme::bear()),
            Span::styled("   Largest Win ", theme::muted()),
            Span::styled(format!("€{:.0}", s.largest_win), theme::bull()),
            Span::styled("   Largest Loss ", theme::muted()),
            Span::styled(format!("€{:.0}", s.largest_loss), theme::bear()),
        ]),
        Line::from(vec![
            Span::styled("Longest Streaks ", theme::muted()),
            Span::styled(format!("{}W", s.max_consecutive_wins), theme::bull()),
            Span::styled(" / ", theme::muted()),
            Span::styled(format!("{}L", s.max_consecutive_losses), theme::bear()),
            Span::styled("   Current Streak ", theme::muted()),
            Span::styled(streak, theme::pnl(s.current_streak as f64)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
