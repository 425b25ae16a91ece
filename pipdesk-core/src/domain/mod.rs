//! Domain types for Pipdesk.

pub mod pair;
pub mod signal;
pub mod trade;

pub use pair::{is_major, price_decimals, ALL_PAIRS, MAJOR_PAIRS};
pub use signal::{SignalAction, SignalDataError, SignalStatus, TradingSignal};
pub use trade::{Trade, TradeDirection, TradeStatus};
