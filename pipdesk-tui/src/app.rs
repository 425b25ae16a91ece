//! Application state — single-owner, main-thread only.
//!
//! All mutable dashboard state lives here: the signal/trade snapshots, the
//! filter spec, cursors and expanded cards. The engines stay pure; every
//! mutation that affects the feed goes through `apply_filters`, which
//! re-runs the query over the current snapshot.

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use chrono::NaiveDateTime;

use pipdesk_core::domain::pair::ALL_PAIRS;
use pipdesk_core::domain::signal::TradingSignal;
use pipdesk_core::domain::trade::Trade;
use pipdesk_core::query::{query, validate_signals, FilterSpec, Pill, SortKey};
use pipdesk_core::stats::JournalStats;

use crate::config::Config;
use crate::sample_data;
use crate::worker::{WorkerCommand, WorkerResponse};

/// Which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Journal,
    Chart,
}

impl Tab {
    pub fn index(self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Journal => 1,
            Tab::Chart => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Tab::Dashboard),
            1 => Some(Tab::Journal),
            2 => Some(Tab::Chart),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Journal => "Journal",
            Tab::Chart => "Chart Analysis",
        }
    }

    pub fn next(self) -> Tab {
        Tab::from_index((self.index() + 1) % 3).unwrap()
    }

    pub fn prev(self) -> Tab {
        Tab::from_index((self.index() + 2) % 3).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Error category for the history overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Worker,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Data => "DATA",
            ErrorCategory::Worker => "WORK",
        }
    }
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    PairSelect,
    ErrorHistory,
}

/// Dashboard tab state: signal-card cursor, pill cursor, expanded cards.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub cursor: usize,
    pub pill_cursor: usize,
    pub expanded: HashSet<String>,
}

/// Journal tab state.
#[derive(Debug, Default)]
pub struct JournalState {
    pub cursor: usize,
}

/// Chart tab state: which pair/timeframe the mock chart shows.
#[derive(Debug, Default)]
pub struct ChartState {
    pub pair_idx: usize,
    pub timeframe_idx: usize,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub active_tab: Tab,

    // Data snapshots (source of truth for the engines)
    pub signals: Vec<TradingSignal>,
    pub trades: Vec<Trade>,

    // Derived engine output, recomputed on every relevant change
    pub filter: FilterSpec,
    pub filtered: Vec<TradingSignal>,
    pub stats: JournalStats,

    // Per-tab view state
    pub dashboard: DashboardState,
    pub journal: JournalState,
    pub chart: ChartState,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
    pub cancel: Arc<AtomicBool>,
    pub refresh_in_progress: bool,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
    pub pair_cursor: usize,

    pub config: Config,
}

impl AppState {
    pub fn new(
        config: Config,
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        cancel: Arc<AtomicBool>,
    ) -> Self {
        let signals = sample_data::signals();
        let trades = sample_data::trades();
        let filter = FilterSpec {
            search_pair: String::new(),
            min_confidence: config.min_confidence,
            sort_by: config.sort_by,
            active_pills: Vec::new(),
        };
        let filtered = query(&signals, &filter);
        let stats = JournalStats::summarize(&trades);

        Self {
            running: true,
            active_tab: Tab::Dashboard,
            signals,
            trades,
            filter,
            filtered,
            stats,
            dashboard: DashboardState::default(),
            journal: JournalState::default(),
            chart: ChartState::default(),
            worker_tx,
            worker_rx,
            cancel,
            refresh_in_progress: false,
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::None,
            pair_cursor: 0,
            config,
        }
    }

    /// Re-run the query pipeline over the current snapshot and clamp the
    /// card cursor to the new result.
    pub fn apply_filters(&mut self) {
        self.filtered = query(&self.signals, &self.filter);
        if self.dashboard.cursor >= self.filtered.len() {
            self.dashboard.cursor = self.filtered.len().saturating_sub(1);
        }
    }

    /// Replace the signal snapshot (a refreshed feed batch) and recompute.
    /// Malformed records are reported but still displayed; the query
    /// coerces them deterministically.
    pub fn install_signals(&mut self, signals: Vec<TradingSignal>) {
        if let Err(err) = validate_signals(&signals) {
            self.push_error(ErrorCategory::Data, err.to_string(), "refresh batch".into());
        }
        self.signals = signals;
        self.apply_filters();
    }

    pub fn selected_signal(&self) -> Option<&TradingSignal> {
        self.filtered.get(self.dashboard.cursor)
    }

    /// Expand or collapse the reasoning section of the selected card.
    pub fn toggle_expanded(&mut self) {
        let Some(id) = self.selected_signal().map(|s| s.id.clone()) else {
            return;
        };
        if !self.dashboard.expanded.remove(&id) {
            self.dashboard.expanded.insert(id);
        }
    }

    /// Toggle the pill under the pill cursor. Returns its display name.
    pub fn toggle_pill_under_cursor(&mut self) -> &'static str {
        let name = Pill::NAMES[self.dashboard.pill_cursor];
        if let Some(pos) = self.filter.active_pills.iter().position(|p| p == name) {
            self.filter.active_pills.remove(pos);
        } else {
            self.filter.active_pills.push(name.to_string());
        }
        self.apply_filters();
        name
    }

    pub fn cycle_sort(&mut self) {
        let pos = SortKey::ALL
            .iter()
            .position(|&k| k == self.filter.sort_by)
            .unwrap_or(0);
        self.filter.sort_by = SortKey::ALL[(pos + 1) % SortKey::ALL.len()];
        self.apply_filters();
    }

    pub fn adjust_min_confidence(&mut self, delta: f64) {
        self.filter.min_confidence = (self.filter.min_confidence + delta).clamp(0.0, 10.0);
        self.apply_filters();
    }

    /// Set the exact-match pair filter; an empty string means all pairs.
    pub fn set_search_pair(&mut self, pair: &str) {
        self.filter.search_pair = pair.to_string();
        self.apply_filters();
    }

    /// Reset every filter control to its neutral state.
    pub fn clear_filters(&mut self) {
        self.filter = FilterSpec::default();
        self.apply_filters();
    }

    /// Dismiss the selected signal: the one status transition this state
    /// layer owns, applied to the snapshot before recomputing the feed.
    pub fn dismiss_selected(&mut self) {
        let Some(id) = self.selected_signal().map(|s| s.id.clone()) else {
            return;
        };
        if let Some(signal) = self.signals.iter_mut().find(|s| s.id == id) {
            signal.dismiss();
            let pair = signal.pair.clone();
            self.apply_filters();
            self.set_status(format!("Signal dismissed: {pair}"));
        }
    }

    pub fn active_signal_count(&self) -> usize {
        use pipdesk_core::domain::signal::SignalStatus;
        self.signals
            .iter()
            .filter(|s| s.status == SignalStatus::Active)
            .count()
    }

    /// Options for the pair-select overlay: "All Pairs" plus the selector.
    pub fn pair_options() -> Vec<&'static str> {
        let mut options = vec!["All Pairs"];
        options.extend(ALL_PAIRS);
        options
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
