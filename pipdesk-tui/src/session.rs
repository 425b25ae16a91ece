//! Wall clock and market-session tracking for the header.

use chrono::Timelike;

/// The trading session currently driving liquidity, derived from UTC time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketSession {
    Tokyo,
    London,
    NewYork,
}

impl MarketSession {
    /// Session for a UTC hour: Tokyo until 08:00, London until 16:00,
    /// New York for the rest of the day.
    pub fn at_utc_hour(hour: u32) -> MarketSession {
        match hour {
            0..=7 => MarketSession::Tokyo,
            8..=15 => MarketSession::London,
            _ => MarketSession::NewYork,
        }
    }

    pub fn current() -> MarketSession {
        MarketSession::at_utc_hour(chrono::Utc::now().hour())
    }

    pub fn label(self) -> &'static str {
        match self {
            MarketSession::Tokyo => "Tokyo",
            MarketSession::London => "London",
            MarketSession::NewYork => "New York",
        }
    }
}

/// "HH:MM:SS" local-time clock label.
pub fn clock_label() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn session_boundaries() {
        assert_eq!(MarketSession::at_utc_hour(0), MarketSession::Tokyo);
        assert_eq!(MarketSession::at_utc_hour(7), MarketSession::Tokyo);
        assert_eq!(MarketSession::at_utc_hour(8), MarketSession::London);
        assert_eq!(MarketSession::at_utc_hour(15), MarketSession::London);
        assert_eq!(MarketSession::at_utc_hour(16), MarketSession::NewYork);
        assert_eq!(MarketSession::at_utc_hour(23), MarketSession::NewYork);
    }

    #[test]
    fn clock_label_shape() {
        let label = clock_label();
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }

    proptest! {
        /// Every hour of the day maps to exactly one labelled session.
        #[test]
        fn every_hour_has_a_session(hour in 0u32..24) {
            let session = MarketSession::at_utc_hour(hour);
            prop_assert!(!session.label().is_empty());
        }
    }
}
