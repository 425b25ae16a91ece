//! Signal query pipeline — pair/confidence filters, pill predicates, sort keys.
//!
//! `query` is a pure function: signal snapshot + filter spec in, ordered
//! subset out. The presentation layer owns the spec and re-runs the query
//! on every change.
//!
//! Pipeline order: pair filter → confidence bound → pill predicates (AND)
//! → sort. Sorts are stable, so ties keep their feed order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::pair::is_major;
use crate::domain::signal::{SignalAction, SignalDataError, SignalStatus, TradingSignal};

/// Sort order for the signal feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep feed order — the feed arrives newest-first.
    #[default]
    Newest,
    /// Descending confidence.
    Confidence,
    /// Descending R parsed from the "1:R" risk/reward string.
    RiskReward,
    /// Descending absolute potential pips.
    Pips,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Confidence,
        SortKey::RiskReward,
        SortKey::Pips,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Confidence => "Highest Confidence",
            SortKey::RiskReward => "Best R:R",
            SortKey::Pips => "Most Pips",
        }
    }
}

/// A named boolean filter toggle. Pills stack conjunctively: every active
/// pill must match for a signal to survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pill {
    HighConfidence,
    MajorPairsOnly,
    BuyOnly,
    SellOnly,
    ActiveOnly,
    ExpiringSoon,
}

impl Pill {
    /// Display names, in the order the filter menu offers them.
    pub const NAMES: [&'static str; 6] = [
        "High Confidence (8+)",
        "Major Pairs Only",
        "BUY Signals Only",
        "SELL Signals Only",
        "Active Only",
        "Expiring Soon",
    ];

    /// Resolve a pill by display name. Unrecognized names yield `None` and
    /// are treated as no-ops by the query, not as errors.
    pub fn parse(name: &str) -> Option<Pill> {
        match name {
            "High Confidence (8+)" => Some(Pill::HighConfidence),
            "Major Pairs Only" => Some(Pill::MajorPairsOnly),
            "BUY Signals Only" => Some(Pill::BuyOnly),
            "SELL Signals Only" => Some(Pill::SellOnly),
            "Active Only" => Some(Pill::ActiveOnly),
            "Expiring Soon" => Some(Pill::ExpiringSoon),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pill::HighConfidence => "High Confidence (8+)",
            Pill::MajorPairsOnly => "Major Pairs Only",
            Pill::BuyOnly => "BUY Signals Only",
            Pill::SellOnly => "SELL Signals Only",
            Pill::ActiveOnly => "Active Only",
            Pill::ExpiringSoon => "Expiring Soon",
        }
    }

    fn matches(self, signal: &TradingSignal) -> bool {
        match self {
            Pill::HighConfidence => signal.confidence >= 8.0,
            Pill::MajorPairsOnly => is_major(&signal.pair),
            Pill::BuyOnly => signal.action == SignalAction::Buy,
            Pill::SellOnly => signal.action == SignalAction::Sell,
            Pill::ActiveOnly => signal.status == SignalStatus::Active,
            Pill::ExpiringSoon => signal.status == SignalStatus::Expiring,
        }
    }
}

/// The full filter/sort specification for the signal feed.
///
/// Owned and mutated by the presentation layer; the query only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact-match pair filter. Empty means "all pairs".
    pub search_pair: String,
    /// Inclusive lower confidence bound, [0, 10].
    pub min_confidence: f64,
    pub sort_by: SortKey,
    /// Active pill names. Order-irrelevant; unknown names are ignored.
    pub active_pills: Vec<String>,
}

/// Run the filter/sort pipeline over a signal snapshot.
///
/// Returns a fresh, ordered `Vec`; the input is never mutated. An empty
/// result is the ordinary "no matches" state, not an error.
///
/// Malformed risk/reward policy: a signal whose "1:R" string does not
/// parse contributes R = 0.0 under the `RiskReward` sort and sinks to the
/// bottom of the descending order. NaN never reaches the comparator.
pub fn query(signals: &[TradingSignal], spec: &FilterSpec) -> Vec<TradingSignal> {
    let pills: Vec<Pill> = spec
        .active_pills
        .iter()
        .filter_map(|name| Pill::parse(name))
        .collect();

    let mut matched: Vec<TradingSignal> = signals
        .iter()
        .filter(|s| spec.search_pair.is_empty() || s.pair == spec.search_pair)
        .filter(|s| s.confidence >= spec.min_confidence)
        .filter(|s| pills.iter().all(|pill| pill.matches(s)))
        .cloned()
        .collect();

    match spec.sort_by {
        SortKey::Newest => {} // feed order is already newest-first
        SortKey::Confidence => matched.sort_by(|a, b| desc_f64(a.confidence, b.confidence)),
        SortKey::RiskReward => matched.sort_by(|a, b| {
            desc_f64(
                a.reward_ratio().unwrap_or(0.0),
                b.reward_ratio().unwrap_or(0.0),
            )
        }),
        SortKey::Pips => {
            matched.sort_by(|a, b| b.potential_pips.abs().cmp(&a.potential_pips.abs()))
        }
    }

    matched
}

/// Strict data-contract check over a whole snapshot: reports the first
/// signal with out-of-range confidence or a malformed risk/reward string.
pub fn validate_signals(signals: &[TradingSignal]) -> Result<(), SignalDataError> {
    signals.iter().try_for_each(TradingSignal::validate)
}

// Descending f64 order; non-comparable values tie (sort_by is stable, so
// ties keep feed order).
fn desc_f64(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(id: &str, pair: &str, action: SignalAction, confidence: f64) -> TradingSignal {
        TradingSignal {
            id: id.into(),
            pair: pair.into(),
            action,
            timestamp: "1h ago".into(),
            entry_price: "1.0850".into(),
            stop_loss: "1.0800".into(),
            take_profit: "1.0950".into(),
            confidence,
            risk_reward: "1:2.0".into(),
            potential_pips: 100,
            reasoning: String::new(),
            status: SignalStatus::Active,
        }
    }

    fn ids(signals: &[TradingSignal]) -> Vec<&str> {
        signals.iter().map(|s| s.id.as_str()).collect()
    }

    fn spec() -> FilterSpec {
        FilterSpec::default()
    }

    // ── Pair filter ──

    #[test]
    fn empty_search_pair_keeps_everything() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 8.0),
            signal("2", "GBPJPY", SignalAction::Sell, 6.0),
        ];
        assert_eq!(query(&signals, &spec()).len(), 2);
    }

    #[test]
    fn search_pair_is_exact_match() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 8.0),
            signal("2", "EURJPY", SignalAction::Buy, 8.0),
        ];
        let mut f = spec();
        f.search_pair = "EURUSD".into();
        assert_eq!(ids(&query(&signals, &f)), ["1"]);
    }

    #[test]
    fn search_pair_is_case_sensitive() {
        let signals = vec![signal("1", "EURUSD", SignalAction::Buy, 8.0)];
        let mut f = spec();
        f.search_pair = "eurusd".into();
        assert!(query(&signals, &f).is_empty());
    }

    #[test]
    fn absent_pair_yields_empty() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 8.0),
            signal("2", "GBPUSD", SignalAction::Sell, 9.0),
        ];
        let mut f = spec();
        f.search_pair = "USDCAD".into();
        assert!(query(&signals, &f).is_empty());
    }

    // ── Confidence filter ──

    #[test]
    fn confidence_bound_is_inclusive() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 8.5),
            signal("2", "GBPUSD", SignalAction::Sell, 7.2),
            signal("3", "USDJPY", SignalAction::Buy, 9.1),
            signal("4", "USDCHF", SignalAction::Buy, 8.0),
        ];
        let mut f = spec();
        f.min_confidence = 8.0;
        assert_eq!(ids(&query(&signals, &f)), ["1", "3", "4"]);
    }

    /// The worked example: {8.5, 7.2, 9.1} with min 8 keeps {8.5, 9.1} in
    /// feed order under the newest sort.
    #[test]
    fn confidence_filter_preserves_feed_order() {
        let signals = vec![
            signal("a", "EURUSD", SignalAction::Buy, 8.5),
            signal("b", "GBPUSD", SignalAction::Sell, 7.2),
            signal("c", "USDJPY", SignalAction::Buy, 9.1),
        ];
        let mut f = spec();
        f.min_confidence = 8.0;
        assert_eq!(ids(&query(&signals, &f)), ["a", "c"]);
    }

    // ── Pills ──

    #[test]
    fn every_known_pill_name_parses() {
        for name in Pill::NAMES {
            let pill = Pill::parse(name).expect("known pill name must parse");
            assert_eq!(pill.name(), name);
        }
    }

    #[test]
    fn unknown_pill_names_are_ignored() {
        let signals = vec![signal("1", "EURUSD", SignalAction::Buy, 8.0)];
        let mut f = spec();
        f.active_pills = vec!["Only On Tuesdays".into(), "".into()];
        assert_eq!(query(&signals, &f).len(), 1);
    }

    #[test]
    fn high_confidence_pill() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 8.0),
            signal("2", "GBPUSD", SignalAction::Sell, 7.9),
        ];
        let mut f = spec();
        f.active_pills = vec!["High Confidence (8+)".into()];
        assert_eq!(ids(&query(&signals, &f)), ["1"]);
    }

    #[test]
    fn status_pills() {
        let mut expiring = signal("2", "GBPUSD", SignalAction::Sell, 7.0);
        expiring.status = SignalStatus::Expiring;
        let mut dismissed = signal("3", "USDJPY", SignalAction::Buy, 9.0);
        dismissed.dismiss();
        let signals = vec![signal("1", "EURUSD", SignalAction::Buy, 8.0), expiring, dismissed];

        let mut f = spec();
        f.active_pills = vec!["Active Only".into()];
        assert_eq!(ids(&query(&signals, &f)), ["1"]);

        f.active_pills = vec!["Expiring Soon".into()];
        assert_eq!(ids(&query(&signals, &f)), ["2"]);
    }

    /// Pills compose conjunctively: BUY + majors keeps only BUY signals on
    /// a major pair.
    #[test]
    fn pills_compose_as_and() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 8.0),
            signal("2", "EURUSD", SignalAction::Sell, 8.0),
            signal("3", "GBPJPY", SignalAction::Buy, 8.0),
            signal("4", "USDJPY", SignalAction::Buy, 8.0),
        ];
        let mut f = spec();
        f.active_pills = vec!["BUY Signals Only".into(), "Major Pairs Only".into()];
        assert_eq!(ids(&query(&signals, &f)), ["1", "4"]);
    }

    // ── Sorts ──

    #[test]
    fn newest_keeps_feed_order() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 5.0),
            signal("2", "GBPUSD", SignalAction::Sell, 9.0),
            signal("3", "USDJPY", SignalAction::Buy, 7.0),
        ];
        assert_eq!(ids(&query(&signals, &spec())), ["1", "2", "3"]);
    }

    #[test]
    fn confidence_sort_descends() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 5.0),
            signal("2", "GBPUSD", SignalAction::Sell, 9.0),
            signal("3", "USDJPY", SignalAction::Buy, 7.0),
        ];
        let mut f = spec();
        f.sort_by = SortKey::Confidence;
        assert_eq!(ids(&query(&signals, &f)), ["2", "3", "1"]);
    }

    #[test]
    fn confidence_sort_is_stable_on_ties() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 7.0),
            signal("2", "GBPUSD", SignalAction::Sell, 9.0),
            signal("3", "USDJPY", SignalAction::Buy, 7.0),
            signal("4", "USDCHF", SignalAction::Buy, 7.0),
        ];
        let mut f = spec();
        f.sort_by = SortKey::Confidence;
        assert_eq!(ids(&query(&signals, &f)), ["2", "1", "3", "4"]);
    }

    #[test]
    fn risk_reward_sort_descends() {
        let mut a = signal("1", "EURUSD", SignalAction::Buy, 8.0);
        a.risk_reward = "1:1.5".into();
        let mut b = signal("2", "GBPUSD", SignalAction::Sell, 8.0);
        b.risk_reward = "1:3.0".into();
        let mut c = signal("3", "USDJPY", SignalAction::Buy, 8.0);
        c.risk_reward = "1:2.2".into();

        let mut f = spec();
        f.sort_by = SortKey::RiskReward;
        assert_eq!(ids(&query(&[a, b, c], &f)), ["2", "3", "1"]);
    }

    #[test]
    fn malformed_risk_reward_sinks_to_bottom() {
        let mut bad = signal("bad", "EURUSD", SignalAction::Buy, 8.0);
        bad.risk_reward = "broken".into();
        let mut good = signal("good", "GBPUSD", SignalAction::Sell, 8.0);
        good.risk_reward = "1:0.5".into();

        let mut f = spec();
        f.sort_by = SortKey::RiskReward;
        assert_eq!(ids(&query(&[bad, good], &f)), ["good", "bad"]);
    }

    #[test]
    fn pips_sort_uses_absolute_value() {
        let mut a = signal("1", "EURUSD", SignalAction::Buy, 8.0);
        a.potential_pips = 60;
        let mut b = signal("2", "GBPUSD", SignalAction::Sell, 8.0);
        b.potential_pips = -120;
        let mut c = signal("3", "USDJPY", SignalAction::Buy, 8.0);
        c.potential_pips = 90;

        let mut f = spec();
        f.sort_by = SortKey::Pips;
        assert_eq!(ids(&query(&[a, b, c], &f)), ["2", "3", "1"]);
    }

    // ── Pipeline as a whole ──

    #[test]
    fn empty_input_yields_empty() {
        assert!(query(&[], &spec()).is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 5.0),
            signal("2", "GBPUSD", SignalAction::Sell, 9.0),
        ];
        let mut f = spec();
        f.sort_by = SortKey::Confidence;
        let before = signals.clone();
        let _ = query(&signals, &f);
        assert_eq!(signals, before);
    }

    #[test]
    fn query_is_idempotent() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 8.5),
            signal("2", "GBPJPY", SignalAction::Sell, 7.2),
            signal("3", "USDJPY", SignalAction::Buy, 9.1),
            signal("4", "AUDUSD", SignalAction::Sell, 6.8),
        ];
        let mut f = spec();
        f.min_confidence = 7.0;
        f.sort_by = SortKey::Confidence;
        f.active_pills = vec!["Major Pairs Only".into()];

        let once = query(&signals, &f);
        let twice = query(&once, &f);
        assert_eq!(once, twice);
    }

    // ── Validation ──

    #[test]
    fn validate_signals_accepts_clean_batch() {
        let signals = vec![
            signal("1", "EURUSD", SignalAction::Buy, 8.0),
            signal("2", "GBPUSD", SignalAction::Sell, 0.0),
        ];
        assert!(validate_signals(&signals).is_ok());
    }

    #[test]
    fn validate_signals_names_the_offender() {
        let mut bad = signal("s-17", "EURUSD", SignalAction::Buy, 8.0);
        bad.risk_reward = "1:".into();
        let signals = vec![signal("1", "GBPUSD", SignalAction::Sell, 8.0), bad];
        let err = validate_signals(&signals).unwrap_err();
        assert!(err.to_string().contains("s-17"));
    }

    #[test]
    fn sort_key_labels() {
        assert_eq!(SortKey::ALL.len(), 4);
        assert_eq!(SortKey::default(), SortKey::Newest);
        assert_eq!(SortKey::RiskReward.label(), "Best R:R");
    }
}
