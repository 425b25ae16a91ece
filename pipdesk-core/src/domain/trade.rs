//! Trade — one journal entry, open or closed.

use serde::{Deserialize, Serialize};

/// Direction of a journal trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeDirection {
    Long,
    Short,
}

impl TradeDirection {
    pub fn label(self) -> &'static str {
        match self {
            TradeDirection::Long => "LONG",
            TradeDirection::Short => "SHORT",
        }
    }
}

/// Outcome of a journal trade. `Open` means the position has not been
/// closed yet and carries unrealized pips/pnl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeStatus {
    Win,
    Loss,
    Open,
}

/// A single trade journal record.
///
/// `date` is a sortable timestamp string ("2025-01-30 14:30"); the stats
/// engine never parses it. Sign conventions are a data-quality contract on
/// the input (Win ⇒ pnl ≥ 0, Loss ⇒ pnl < 0), not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub date: String,
    pub pair: String,
    pub direction: TradeDirection,
    pub entry: f64,
    pub exit: Option<f64>,
    pub pips: i32,
    pub pnl: f64,
    pub status: TradeStatus,
    pub lot_size: f64,
}

impl Trade {
    pub fn is_win(&self) -> bool {
        self.status == TradeStatus::Win
    }

    pub fn is_loss(&self) -> bool {
        self.status == TradeStatus::Loss
    }

    pub fn is_open(&self) -> bool {
        self.status == TradeStatus::Open
    }

    /// Data-quality invariant: a trade is `Open` iff it has no exit price.
    pub fn status_consistent(&self) -> bool {
        self.is_open() == self.exit.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed_trade() -> Trade {
        Trade {
            id: "1".into(),
            date: "2025-01-30 14:30".into(),
            pair: "EURUSD".into(),
            direction: TradeDirection::Long,
            entry: 1.0825,
            exit: Some(1.0875),
            pips: 50,
            pnl: 250.0,
            status: TradeStatus::Win,
            lot_size: 0.5,
        }
    }

    #[test]
    fn status_predicates() {
        let trade = closed_trade();
        assert!(trade.is_win());
        assert!(!trade.is_loss());
        assert!(!trade.is_open());
    }

    #[test]
    fn closed_trade_is_consistent() {
        assert!(closed_trade().status_consistent());
    }

    #[test]
    fn open_trade_without_exit_is_consistent() {
        let mut trade = closed_trade();
        trade.exit = None;
        trade.status = TradeStatus::Open;
        assert!(trade.status_consistent());
    }

    #[test]
    fn open_trade_with_exit_is_inconsistent() {
        let mut trade = closed_trade();
        trade.status = TradeStatus::Open;
        assert!(!trade.status_consistent());
    }

    #[test]
    fn closed_trade_without_exit_is_inconsistent() {
        let mut trade = closed_trade();
        trade.exit = None;
        assert!(!trade.status_consistent());
    }

    #[test]
    fn trade_serialization_roundtrip() {
        let trade = closed_trade();
        let json = serde_json::to_string(&trade).unwrap();
        assert!(json.contains("\"direction\":\"LONG\""));
        let deser: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, deser);
    }
}
