//! PipDesk — terminal dashboard for mock forex signals and a trade journal.
//!
//! Tabs:
//! 1. Dashboard — KPI cards and the filterable AI signal feed
//! 2. Journal — trade history with aggregate performance metrics
//! 3. Chart Analysis — mock candlestick chart and market overview
//!
//! The engines live in `pipdesk-core`; this crate owns all mutable state
//! (snapshots, filter spec, cursors) and re-invokes the engines on change.

mod app;
mod config;
mod input;
mod sample_data;
mod session;
mod theme;
mod ui;
mod worker;

use std::io::{self, stdout};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::AppState;
use crate::worker::{WorkerCommand, WorkerResponse};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let config = config::Config::load(Path::new(config::CONFIG_FILE))?;

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx, cancel.clone());

    let mut app = AppState::new(config, cmd_tx.clone(), resp_rx, cancel);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::RefreshDone { signals } => {
            app.refresh_in_progress = false;
            app.install_signals(signals);
            app.set_status("Signals updated with the latest feed");
        }
        WorkerResponse::RefreshCancelled => {
            app.refresh_in_progress = false;
            app.set_warning("Refresh cancelled");
        }
    }
}
