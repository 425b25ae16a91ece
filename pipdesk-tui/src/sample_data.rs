//! Sample data for the dashboard.
//!
//! Everything the UI shows comes from here: the hardcoded signal feed and
//! trade journal, market-overview quotes, and the deterministic
//! pseudo-random series behind the mock candlestick chart and sparklines.
//! A linear congruential generator keeps the visuals reproducible without
//! pulling in `rand`.

use pipdesk_core::domain::signal::{SignalAction, SignalStatus, TradingSignal};
use pipdesk_core::domain::trade::{Trade, TradeDirection, TradeStatus};

pub const ACCOUNT_BALANCE: f64 = 10_000.00;
pub const DAILY_PNL: f64 = 127.50;
pub const DAILY_PNL_PCT: f64 = 1.28;

pub const TIMEFRAMES: [&str; 5] = ["5M", "15M", "1H", "4H", "D1"];

// ── Signal feed ──────────────────────────────────────────────────────

fn signal(
    id: &str,
    pair: &str,
    action: SignalAction,
    timestamp: &str,
    entry: &str,
    stop: &str,
    target: &str,
    confidence: f64,
    pips: i32,
    reasoning: &str,
    status: SignalStatus,
) -> TradingSignal {
    TradingSignal {
        id: id.to_string(),
        pair: pair.to_string(),
        action,
        timestamp: timestamp.to_string(),
        entry_price: entry.to_string(),
        stop_loss: stop.to_string(),
        take_profit: target.to_string(),
        confidence,
        risk_reward: "1:2.0".to_string(),
        potential_pips: pips,
        reasoning: reasoning.to_string(),
        status,
    }
}

/// The baseline signal feed, newest first.
pub fn signals() -> Vec<TradingSignal> {
    vec![
        signal(
            "1",
            "EURUSD",
            SignalAction::Buy,
            "2h ago",
            "1.0850",
            "1.0800",
            "1.0950",
            8.5,
            100,
            "Strong bullish momentum with RSI oversold bounce. Support at 1.0800 \
             confirmed by multiple timeframe analysis. ECB dovish stance and US \
             dollar weakness create favorable conditions for EUR strength.",
            SignalStatus::Active,
        ),
        signal(
            "2",
            "GBPUSD",
            SignalAction::Sell,
            "4h ago",
            "1.2645",
            "1.2695",
            "1.2545",
            7.2,
            -100,
            "Bearish divergence on 4H chart with resistance at 1.2700. UK \
             inflation concerns and potential BoE pause in rate hikes support \
             downside movement.",
            SignalStatus::Expiring,
        ),
        signal(
            "3",
            "USDJPY",
            SignalAction::Buy,
            "1h ago",
            "149.85",
            "149.35",
            "150.85",
            9.1,
            100,
            "BoJ intervention fears subsiding around 150 level. Strong US yields \
             and risk-on sentiment support USD strength. Technical breakout above \
             149.50 resistance.",
            SignalStatus::Active,
        ),
        signal(
            "4",
            "AUDUSD",
            SignalAction::Sell,
            "6h ago",
            "0.6721",
            "0.6771",
            "0.6621",
            6.8,
            -100,
            "China growth concerns weigh on commodity currencies. RBA dovish \
             tilt and weak Australian employment data suggest further AUD \
             weakness ahead.",
            SignalStatus::Active,
        ),
        signal(
            "5",
            "USDCHF",
            SignalAction::Buy,
            "3h ago",
            "0.8890",
            "0.8840",
            "0.8990",
            7.8,
            100,
            "SNB dovish stance and safe haven flows into USD. Swiss franc \
             weakness expected as SNB maintains ultra-loose monetary policy.",
            SignalStatus::Active,
        ),
    ]
}

/// A "fresh" feed for refresh number `generation`: the baseline signals
/// with confidence and pip targets jittered deterministically per
/// generation. Same generation, same batch.
pub fn refreshed_signals(generation: u64) -> Vec<TradingSignal> {
    let mut rng = Lcg::new(0x5EED ^ generation.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let mut batch = signals();
    for signal in &mut batch {
        let jitter = (rng.next_f64() - 0.5) * 0.8;
        signal.confidence = ((signal.confidence + jitter).clamp(0.0, 10.0) * 10.0).round() / 10.0;
        signal.potential_pips += rng.range_i32(-10, 10);
        signal.timestamp = "just now".to_string();
    }
    batch
}

// ── Trade journal ────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn trade(
    id: &str,
    date: &str,
    pair: &str,
    direction: TradeDirection,
    entry: f64,
    exit: Option<f64>,
    pips: i32,
    pnl: f64,
    status: TradeStatus,
) -> Trade {
    Trade {
        id: id.to_string(),
        date: date.to_string(),
        pair: pair.to_string(),
        direction,
        entry,
        exit,
        pips,
        pnl,
        status,
        lot_size: 0.5,
    }
}

/// The journal history, newest first.
pub fn trades() -> Vec<Trade> {
    use TradeDirection::{Long, Short};
    use TradeStatus::{Loss, Open, Win};
    vec![
        trade("1", "2025-01-30 14:30", "EURUSD", Long, 1.0825, Some(1.0875), 50, 250.0, Win),
        trade("2", "2025-01-29 09:15", "GBPUSD", Short, 1.2680, Some(1.2655), 25, 125.0, Win),
        trade("3", "2025-01-28 16:45", "USDJPY", Long, 149.50, Some(149.20), -30, -150.0, Loss),
        trade("4", "2025-01-27 11:20", "AUDUSD", Long, 0.6720, None, 15, 75.0, Open),
        trade("5", "2025-01-26 13:10", "USDCAD", Short, 1.3750, Some(1.3790), -40, -200.0, Loss),
        trade("6", "2025-01-25 08:30", "EURJPY", Long, 162.40, Some(162.80), 40, 200.0, Win),
        trade("7", "2025-01-24 15:45", "GBPJPY", Long, 189.20, Some(190.04), 84, 420.0, Win),
        trade("8", "2025-01-23 10:15", "NZDUSD", Short, 0.5990, Some(0.5970), 20, 100.0, Win),
    ]
}

// ── Market overview ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Volatility {
    Low,
    Medium,
    High,
}

impl Volatility {
    pub fn label(self) -> &'static str {
        match self {
            Volatility::Low => "low vol",
            Volatility::Medium => "med vol",
            Volatility::High => "high vol",
        }
    }
}

/// One market-overview quote tile.
#[derive(Debug, Clone)]
pub struct QuoteRow {
    pub pair: &'static str,
    pub price: &'static str,
    pub change: &'static str,
    pub change_pct: &'static str,
    pub trend: Trend,
    pub volatility: Volatility,
}

/// The eight pairs shown in the market overview, in display order.
pub fn market_overview() -> Vec<QuoteRow> {
    use Trend::{Down, Up};
    use Volatility::{High, Low, Medium};
    vec![
        QuoteRow { pair: "EURUSD", price: "1.0847", change: "+0.0023", change_pct: "+0.21%", trend: Up, volatility: Medium },
        QuoteRow { pair: "GBPUSD", price: "1.2645", change: "-0.0012", change_pct: "-0.09%", trend: Down, volatility: High },
        QuoteRow { pair: "USDJPY", price: "149.85", change: "+0.45", change_pct: "+0.30%", trend: Up, volatility: Low },
        QuoteRow { pair: "AUDUSD", price: "0.6721", change: "+0.0008", change_pct: "+0.12%", trend: Up, volatility: Medium },
        QuoteRow { pair: "USDCHF", price: "0.8890", change: "-0.0013", change_pct: "-0.15%", trend: Down, volatility: Low },
        QuoteRow { pair: "NZDUSD", price: "0.5987", change: "+0.0005", change_pct: "+0.08%", trend: Up, volatility: High },
        QuoteRow { pair: "USDCAD", price: "1.3756", change: "+0.0007", change_pct: "+0.05%", trend: Up, volatility: Medium },
        QuoteRow { pair: "EURJPY", price: "162.45", change: "+0.29", change_pct: "+0.18%", trend: Up, volatility: Medium },
    ]
}

// ── Deterministic mock series ────────────────────────────────────────

/// Linear congruential generator for reproducible mock visuals.
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Uniform integer in [lo, hi], inclusive.
    pub fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        let span = (hi - lo + 1) as f64;
        lo + (self.next_f64() * span) as i32
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

/// One mock candle: a bar height plus direction.
#[derive(Debug, Clone, Copy)]
pub struct Candle {
    pub height: u64,
    pub bullish: bool,
}

/// Seed for the chart view of a given pair/timeframe combination.
pub fn chart_seed(pair_idx: usize, timeframe_idx: usize) -> u64 {
    0x1469_5981_0393_4665_u64
        .wrapping_mul(pair_idx as u64 + 1)
        .wrapping_add(timeframe_idx as u64)
}

/// Mock candlestick series, heights in [10, 60].
pub fn candle_series(seed: u64, len: usize) -> Vec<Candle> {
    let mut rng = Lcg::new(seed);
    (0..len)
        .map(|_| Candle {
            height: rng.range_i32(10, 60) as u64,
            bullish: rng.next_bool(),
        })
        .collect()
}

/// Mock sparkline series, heights in [5, 25].
pub fn sparkline_series(seed: u64, len: usize) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..len).map(|_| rng.range_i32(5, 25) as u64).collect()
}
