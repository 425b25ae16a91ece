//! Header — product title, wall clock with market session, account balance.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::sample_data;
use crate::session::{self, MarketSession};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(28),
            Constraint::Percentage(32),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(" PipDesk", theme::accent_bold())),
        Line::from(Span::styled(" AI Trading Analysis", theme::muted())),
    ]);
    f.render_widget(title, cols[0]);

    let session = MarketSession::current();
    let clock = Paragraph::new(vec![
        Line::from(Span::styled(session::clock_label(), theme::text_bold())),
        Line::from(Span::styled(
            format!("{} Session", session.label()),
            theme::muted(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(clock, cols[1]);

    let balance = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("€{:.2} ", sample_data::ACCOUNT_BALANCE),
            theme::text_bold(),
        )),
        Line::from(Span::styled(
            format!(
                "{:+.2} ({:+.2}%) ",
                sample_data::DAILY_PNL,
                sample_data::DAILY_PNL_PCT
            ),
            theme::pnl(sample_data::DAILY_PNL),
        )),
    ])
    .alignment(Alignment::Right);
    f.render_widget(balance, cols[2]);
}
