//! Keyboard input dispatch — overlays → global keys → tab-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, ErrorCategory, Overlay, Tab};
use crate::worker::WorkerCommand;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::PairSelect => {
            handle_pair_overlay(app, key);
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_tab = Tab::Dashboard;
            return;
        }
        KeyCode::Char('2') => {
            app.active_tab = Tab::Journal;
            return;
        }
        KeyCode::Char('3') => {
            app.active_tab = Tab::Chart;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_tab = app.active_tab.prev();
            } else {
                app.active_tab = app.active_tab.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_tab = app.active_tab.prev();
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
            return;
        }
        KeyCode::Char('r') => {
            start_refresh(app);
            return;
        }
        _ => {}
    }

    // 3. Tab-specific keys.
    match app.active_tab {
        Tab::Dashboard => handle_dashboard_key(app, key),
        Tab::Journal => handle_journal_key(app, key),
        Tab::Chart => handle_chart_key(app, key),
    }
}

fn start_refresh(app: &mut AppState) {
    if app.refresh_in_progress {
        return;
    }
    let latency_ms = app.config.refresh_latency_ms;
    if app.worker_tx.send(WorkerCommand::Refresh { latency_ms }).is_err() {
        app.push_error(
            ErrorCategory::Worker,
            "refresh worker unavailable".into(),
            "manual refresh".into(),
        );
        return;
    }
    app.refresh_in_progress = true;
    app.set_status("Refreshing signals...");
}

fn handle_pair_overlay(app: &mut AppState, key: KeyEvent) {
    let options = AppState::pair_options();
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.pair_cursor + 1 < options.len() {
                app.pair_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.pair_cursor = app.pair_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            let choice = options[app.pair_cursor];
            if choice == "All Pairs" {
                app.set_search_pair("");
                app.set_status("Showing all pairs");
            } else {
                app.set_search_pair(choice);
                app.set_status(format!("Filtering on {choice}"));
            }
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_dashboard_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if !app.filtered.is_empty() && app.dashboard.cursor + 1 < app.filtered.len() {
                app.dashboard.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.dashboard.cursor = app.dashboard.cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            app.toggle_expanded();
        }
        KeyCode::Char('d') => {
            app.dismiss_selected();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.dashboard.pill_cursor = app.dashboard.pill_cursor.saturating_sub(1);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.dashboard.pill_cursor + 1 < pipdesk_core::query::Pill::NAMES.len() {
                app.dashboard.pill_cursor += 1;
            }
        }
        KeyCode::Char(' ') => {
            let name = app.toggle_pill_under_cursor();
            let state = if app.filter.active_pills.iter().any(|p| p == name) {
                "on"
            } else {
                "off"
            };
            app.set_status(format!("{name}: {state}"));
        }
        KeyCode::Char('s') => {
            // Pre-position the selector on the current filter.
            let options = AppState::pair_options();
            app.pair_cursor = options
                .iter()
                .position(|&p| p == app.filter.search_pair)
                .unwrap_or(0);
            app.overlay = Overlay::PairSelect;
        }
        KeyCode::Char('c') => {
            app.clear_filters();
            app.set_status("Filters cleared");
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust_min_confidence(0.5);
        }
        KeyCode::Char('-') => {
            app.adjust_min_confidence(-0.5);
        }
        KeyCode::Char('o') => {
            app.cycle_sort();
            app.set_status(format!("Sort: {}", app.filter.sort_by.label()));
        }
        KeyCode::Esc => {
            if app.refresh_in_progress {
                app.cancel.store(true, std::sync::atomic::Ordering::Relaxed);
                app.set_warning("Cancelling refresh...");
            }
        }
        _ => {}
    }
}

fn handle_journal_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if !app.trades.is_empty() && app.journal.cursor + 1 < app.trades.len() {
                app.journal.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.journal.cursor = app.journal.cursor.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_chart_key(app: &mut AppState, key: KeyEvent) {
    let pair_count = crate::sample_data::market_overview().len();
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => {
            app.chart.pair_idx = (app.chart.pair_idx + 1) % pair_count;
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.chart.pair_idx = (app.chart.pair_idx + pair_count - 1) % pair_count;
        }
        KeyCode::Char('t') => {
            app.chart.timeframe_idx =
                (app.chart.timeframe_idx + 1) % crate::sample_data::TIMEFRAMES.len();
        }
        _ => {}
    }
}
