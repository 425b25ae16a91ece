//! Top-level UI layout — header, tabbed main area, status bar, overlays.

pub mod chart_panel;
pub mod header;
pub mod journal_panel;
pub mod kpi_panel;
pub mod overlays;
pub mod signals_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Tab};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: 2-line header, main area, 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    header::render(f, chunks[0], app);
    draw_tab(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    // Overlays on top.
    match app.overlay {
        Overlay::PairSelect => overlays::render_pair_select(f, chunks[1], app),
        Overlay::ErrorHistory => overlays::render_error_history(f, chunks[1], app),
        Overlay::None => {}
    }
}

/// Draw the active tab with its border.
fn draw_tab(f: &mut Frame, area: Rect, app: &AppState) {
    let tab = app.active_tab;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", tab.label(), tab.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match tab {
        Tab::Dashboard => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(3)])
                .split(inner);
            kpi_panel::render(f, rows[0], app);
            signals_panel::render(f, rows[1], app);
        }
        Tab::Journal => journal_panel::render(f, inner, app),
        Tab::Chart => chart_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
