//! Chart analysis — mock candlestick chart plus market-overview widgets.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph, Sparkline};
use ratatui::Frame;

use crate::app::AppState;
use crate::sample_data::{self, QuoteRow, Trend, TIMEFRAMES};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // live quote
            Constraint::Length(1), // timeframe selector
            Constraint::Min(6),    // candle chart
            Constraint::Length(6), // market overview grid
        ])
        .split(area);

    let overview = sample_data::market_overview();
    let quote = &overview[app.chart.pair_idx % overview.len()];

    render_quote(f, rows[0], quote);
    render_timeframes(f, rows[1], app);
    render_candles(f, rows[2], app, quote);
    render_overview(f, rows[3], app, &overview);
}

fn trend_style(trend: Trend) -> ratatui::style::Style {
    match trend {
        Trend::Up => theme::bull(),
        Trend::Down => theme::bear(),
    }
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "↗",
        Trend::Down => "↘",
    }
}

fn render_quote(f: &mut Frame, area: Rect, quote: &QuoteRow) {
    let lines = vec![
        Line::from(vec![
            Span::styled(quote.pair, theme::text_bold()),
            Span::raw("  "),
            Span::styled(quote.price, theme::accent_bold()),
            Span::styled(
                format!("  {} ({})", quote.change, quote.change_pct),
                trend_style(quote.trend),
            ),
        ]),
        Line::from(vec![
            Span::styled(quote.volatility.label(), theme::warning()),
            Span::styled("   [h/l] pair  [t] timeframe", theme::muted()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_timeframes(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, tf) in TIMEFRAMES.iter().enumerate() {
        let style = if i == app.chart.timeframe_idx {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {tf} "), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_candles(f: &mut Frame, area: Rect, app: &AppState, quote: &QuoteRow) {
    let count = (area.width as usize / 2).max(1);
    let seed = sample_data::chart_seed(app.chart.pair_idx, app.chart.timeframe_idx);
    let candles = sample_data::candle_series(seed, count);

    let bars: Vec<Bar> = candles
        .iter()
        .map(|c| {
            Bar::default()
                .value(c.height)
                .style(if c.bullish { theme::bull() } else { theme::bear() })
                .text_value(String::new())
        })
        .collect();

    let label = format!(
        " {} • {} ",
        quote.pair,
        TIMEFRAMES[app.chart.timeframe_idx]
    );
    let chart = BarChart::default()
        .block(
            ratatui::widgets::Block::default()
                .title(label)
                .title_style(theme::muted()),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1)
        .max(60);
    f.render_widget(chart, area);
}

fn render_overview(f: &mut Frame, area: Rect, app: &AppState, overview: &[QuoteRow]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(*row_area);

        for (col_idx, cell) in cols.iter().enumerate() {
            let idx = row_idx * 4 + col_idx;
            if let Some(quote) = overview.get(idx) {
                render_overview_cell(f, *cell, quote, idx == app.chart.pair_idx, idx);
            }
        }
    }
}

fn render_overview_cell(f: &mut Frame, area: Rect, quote: &QuoteRow, selected: bool, idx: usize) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let pair_style = if selected {
        theme::accent_bold()
    } else {
        theme::text()
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(quote.pair, pair_style),
            Span::styled(
                format!(" {}", trend_arrow(quote.trend)),
                trend_style(quote.trend),
            ),
        ]),
        Line::from(vec![
            Span::styled(quote.price, theme::text()),
            Span::styled(format!(" {}", quote.change_pct), trend_style(quote.trend)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), parts[0]);

    let series = sample_data::sparkline_series(0xA5 ^ idx as u64, area.width as usize);
    let spark = Sparkline::default()
        .data(&series)
        .max(25)
        .style(trend_style(quote.trend));
    f.render_widget(spark, parts[1]);
}
