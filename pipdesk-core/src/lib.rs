//! Pipdesk Core — domain types and the two pure dashboard engines.
//!
//! This crate contains everything the dashboard computes:
//! - Domain types (trading signals, journal trades, currency pairs)
//! - Signal query pipeline (pair/confidence filters, pill predicates, sorts)
//! - Journal statistics (win rate, profit factor, averages, streaks)
//!
//! Both engines are pure functions over immutable snapshots. The
//! presentation layer owns the collections and the filter state, and
//! re-invokes the engines on every change; nothing in here holds state or
//! performs I/O.

pub mod domain;
pub mod query;
pub mod stats;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything crossing the TUI worker-channel
    /// boundary is Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::TradingSignal>();
        require_sync::<domain::TradingSignal>();
        require_send::<domain::Trade>();
        require_sync::<domain::Trade>();
        require_send::<domain::SignalDataError>();
        require_sync::<domain::SignalDataError>();

        require_send::<query::FilterSpec>();
        require_sync::<query::FilterSpec>();
        require_send::<query::SortKey>();
        require_sync::<query::SortKey>();

        require_send::<stats::JournalStats>();
        require_sync::<stats::JournalStats>();
    }
}
