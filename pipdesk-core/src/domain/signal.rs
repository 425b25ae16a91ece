//! TradingSignal — one entry in the signal feed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trade direction a signal recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
}

impl SignalAction {
    pub fn label(self) -> &'static str {
        match self {
            SignalAction::Buy => "BUY",
            SignalAction::Sell => "SELL",
        }
    }
}

/// Signal lifecycle state.
///
/// `Expiring` is assigned externally when a signal is close to invalidation;
/// the only transition this core knows about is into `Dismissed`, and it is
/// one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    Active,
    Expiring,
    Dismissed,
}

/// Data-contract violation on a signal record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalDataError {
    #[error("signal {id}: malformed risk/reward '{value}' (expected \"1:R\")")]
    MalformedRiskReward { id: String, value: String },

    #[error("signal {id}: confidence {confidence} outside [0, 10]")]
    ConfidenceOutOfRange { id: String, confidence: f64 },
}

/// A single trading signal as displayed in the feed.
///
/// Price fields stay as display strings: the engine never does price
/// arithmetic on them. `timestamp` is an age-relative label ("2h ago") and
/// is never parsed — feed order is the ordering key for "newest".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub id: String,
    pub pair: String,
    #[serde(rename = "type")]
    pub action: SignalAction,
    pub timestamp: String,
    pub entry_price: String,
    pub stop_loss: String,
    pub take_profit: String,
    pub confidence: f64,
    pub risk_reward: String,
    pub potential_pips: i32,
    pub reasoning: String,
    pub status: SignalStatus,
}

impl TradingSignal {
    /// Parse R out of the "1:R" risk/reward string.
    ///
    /// Returns `None` when the colon or the number is missing, or when the
    /// number is not finite. Callers sorting by risk/reward coerce `None`
    /// to 0.0 so malformed records sink to the bottom deterministically.
    pub fn reward_ratio(&self) -> Option<f64> {
        self.risk_reward
            .split_once(':')
            .and_then(|(_, r)| r.trim().parse::<f64>().ok())
            .filter(|r| r.is_finite())
    }

    /// Dismiss the signal. One-way: a dismissed signal never leaves
    /// `Dismissed`, and no other transition exists in this core.
    pub fn dismiss(&mut self) {
        self.status = SignalStatus::Dismissed;
    }

    /// Check the signal's data contract: confidence in [0, 10] and a
    /// risk/reward string that parses to a finite positive R.
    pub fn validate(&self) -> Result<(), SignalDataError> {
        if !(0.0..=10.0).contains(&self.confidence) || self.confidence.is_nan() {
            return Err(SignalDataError::ConfidenceOutOfRange {
                id: self.id.clone(),
                confidence: self.confidence,
            });
        }
        match self.reward_ratio() {
            Some(r) if r > 0.0 => Ok(()),
            _ => Err(SignalDataError::MalformedRiskReward {
                id: self.id.clone(),
                value: self.risk_reward.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_signal() -> TradingSignal {
        TradingSignal {
            id: "1".into(),
            pair: "EURUSD".into(),
            action: SignalAction::Buy,
            timestamp: "2h ago".into(),
            entry_price: "1.0850".into(),
            stop_loss: "1.0800".into(),
            take_profit: "1.0950".into(),
            confidence: 8.5,
            risk_reward: "1:2.0".into(),
            potential_pips: 100,
            reasoning: "Bullish momentum with oversold bounce.".into(),
            status: SignalStatus::Active,
        }
    }

    #[test]
    fn reward_ratio_parses() {
        let signal = sample_signal();
        assert_eq!(signal.reward_ratio(), Some(2.0));
    }

    #[test]
    fn reward_ratio_fractional() {
        let mut signal = sample_signal();
        signal.risk_reward = "1:1.75".into();
        assert_eq!(signal.reward_ratio(), Some(1.75));
    }

    #[test]
    fn reward_ratio_missing_colon() {
        let mut signal = sample_signal();
        signal.risk_reward = "2.0".into();
        assert_eq!(signal.reward_ratio(), None);
    }

    #[test]
    fn reward_ratio_non_numeric() {
        let mut signal = sample_signal();
        signal.risk_reward = "1:abc".into();
        assert_eq!(signal.reward_ratio(), None);
    }

    #[test]
    fn reward_ratio_non_finite() {
        let mut signal = sample_signal();
        signal.risk_reward = "1:inf".into();
        assert_eq!(signal.reward_ratio(), None);
    }

    #[test]
    fn dismiss_is_one_way() {
        let mut signal = sample_signal();
        signal.dismiss();
        assert_eq!(signal.status, SignalStatus::Dismissed);
        signal.dismiss();
        assert_eq!(signal.status, SignalStatus::Dismissed);
    }

    #[test]
    fn dismiss_from_expiring() {
        let mut signal = sample_signal();
        signal.status = SignalStatus::Expiring;
        signal.dismiss();
        assert_eq!(signal.status, SignalStatus::Dismissed);
    }

    #[test]
    fn validate_accepts_well_formed() {
        assert!(sample_signal().validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_confidence() {
        let mut signal = sample_signal();
        signal.confidence = 10.5;
        assert!(matches!(
            signal.validate(),
            Err(SignalDataError::ConfidenceOutOfRange { .. })
        ));
    }

    #[test]
    fn validate_rejects_malformed_risk_reward() {
        let mut signal = sample_signal();
        signal.risk_reward = "one to two".into();
        let err = signal.validate().unwrap_err();
        assert!(matches!(err, SignalDataError::MalformedRiskReward { .. }));
        assert!(err.to_string().contains("one to two"));
    }

    #[test]
    fn validate_rejects_non_positive_ratio() {
        let mut signal = sample_signal();
        signal.risk_reward = "1:0".into();
        assert!(signal.validate().is_err());
    }

    #[test]
    fn signal_serialization_roundtrip() {
        let signal = sample_signal();
        let json = serde_json::to_string(&signal).unwrap();
        assert!(json.contains("\"type\":\"BUY\""));
        assert!(json.contains("\"status\":\"active\""));
        let deser: TradingSignal = serde_json::from_str(&json).unwrap();
        assert_eq!(signal, deser);
    }
}
